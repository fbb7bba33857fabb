//! Area/population quiz: four countries per question, compared on one
//! randomly chosen dimension. Single-choice asks for one rank; ordered
//! selection asks for the whole descending order.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{Country, TierIndex};
use crate::quiz::locale::{self, Locale};
use crate::quiz::sampling;
use crate::quiz::{
    CorrectAnswer, CountryFacts, Difficulty, Dimension, GeneratedQuestion, QuestionKind,
    QuizError, MIN_POOL,
};

/// Countries compared per question.
const GROUP_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AreaPopulationQuizType {
    SingleChoice,
    OrderSelection,
}

fn measure(country: &Country, dimension: Dimension) -> f64 {
    match dimension {
        Dimension::Area => country.area.unwrap_or(0.0),
        Dimension::Population => country.population.unwrap_or(0) as f64,
    }
}

pub fn generate<R>(
    countries: &[Country],
    tiers: &TierIndex,
    difficulty: Difficulty,
    count: usize,
    quiz_type: AreaPopulationQuizType,
    locale: Locale,
    rng: &mut R,
) -> Result<Vec<GeneratedQuestion>, QuizError>
where
    R: Rng + ?Sized,
{
    let valid: Vec<&Country> = countries
        .iter()
        .filter(|c| c.area.is_some() && c.population.is_some())
        .collect();
    if valid.len() < MIN_POOL {
        return Err(QuizError::InsufficientData {
            what: "countries with area and population",
            needed: MIN_POOL,
            available: valid.len(),
        });
    }

    let pool = sampling::collect_group_pool(&valid, tiers, difficulty, count * GROUP_SIZE, rng);

    let mut questions = Vec::with_capacity(count);
    for i in 0..count {
        let start = (i * GROUP_SIZE).min(pool.len());
        let end = ((i + 1) * GROUP_SIZE).min(pool.len());
        let mut group: Vec<&Country> = pool[start..end].to_vec();

        // When the tiers ran dry the later chunks come up short; countries
        // may then repeat across questions, but never within one.
        if group.len() < GROUP_SIZE {
            let mut extra: Vec<&Country> = valid
                .iter()
                .copied()
                .filter(|c| !group.iter().any(|g| g.cca3 == c.cca3))
                .collect();
            extra.shuffle(rng);
            group.extend(extra.into_iter().take(GROUP_SIZE - group.len()));
        }
        if group.len() < GROUP_SIZE {
            return Err(QuizError::InsufficientData {
                what: "countries with area and population",
                needed: GROUP_SIZE,
                available: group.len(),
            });
        }

        for country in &group {
            if country.area.is_none() {
                return Err(QuizError::IncompleteCountry {
                    code: country.cca3.clone(),
                    field: "area",
                });
            }
            if country.population.is_none() {
                return Err(QuizError::IncompleteCountry {
                    code: country.cca3.clone(),
                    field: "population",
                });
            }
        }

        let dimension = if rng.gen_bool(0.5) {
            Dimension::Area
        } else {
            Dimension::Population
        };

        let options: Vec<String> = group
            .iter()
            .map(|c| locale::country_name(c, locale).to_string())
            .collect();
        let details: HashMap<String, CountryFacts> = group
            .iter()
            .map(|c| {
                (
                    locale::country_name(c, locale).to_string(),
                    CountryFacts {
                        area: c.area,
                        population: c.population,
                    },
                )
            })
            .collect();

        let mut sorted = group.clone();
        sorted.sort_by(|a, b| measure(b, dimension).total_cmp(&measure(a, dimension)));

        let question = match quiz_type {
            AreaPopulationQuizType::SingleChoice => {
                // rank within the descending order: 0 = largest, 3 = smallest
                let rank = rng.gen_range(0..GROUP_SIZE);
                GeneratedQuestion {
                    prompt: locale::rank_prompt(locale, dimension, rank).to_string(),
                    image: None,
                    options,
                    answer: CorrectAnswer::Single(
                        locale::country_name(sorted[rank], locale).to_string(),
                    ),
                    kind: QuestionKind::AreaPopulation(dimension),
                    details,
                }
            }
            AreaPopulationQuizType::OrderSelection => GeneratedQuestion {
                prompt: locale::order_prompt(locale, dimension).to_string(),
                image: None,
                options,
                answer: CorrectAnswer::Ordered(
                    sorted
                        .iter()
                        .map(|c| locale::country_name(c, locale).to_string())
                        .collect(),
                ),
                kind: QuestionKind::AreaPopulation(dimension),
                details,
            },
        };
        questions.push(question);
    }
    Ok(questions)
}
