//! Capital quiz: country → capital, capital → country, or a per-question
//! mix of both.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{CapitalTranslations, Country, TierIndex};
use crate::quiz::locale::{self, Locale};
use crate::quiz::sampling;
use crate::quiz::{
    CorrectAnswer, Difficulty, GeneratedQuestion, QuestionKind, QuizError, MIN_POOL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CapitalQuizType {
    CountryToCapital,
    CapitalToCountry,
    /// Each question flips a fair coin between the two directions.
    Mixed,
}

pub fn generate<R>(
    countries: &[Country],
    capitals: &CapitalTranslations,
    tiers: &TierIndex,
    difficulty: Difficulty,
    count: usize,
    quiz_type: CapitalQuizType,
    locale: Locale,
    rng: &mut R,
) -> Result<Vec<GeneratedQuestion>, QuizError>
where
    R: Rng + ?Sized,
{
    // Pair each eligible country with its capital up front so the rest of
    // the builder never has to re-check.
    let eligible: Vec<(&Country, &str)> = countries
        .iter()
        .filter_map(|c| c.capital().map(|city| (c, city)))
        .collect();
    if eligible.len() < MIN_POOL {
        return Err(QuizError::InsufficientData {
            what: "countries with capitals",
            needed: MIN_POOL,
            available: eligible.len(),
        });
    }

    let sampled = sampling::sample_entities(
        &eligible,
        |e| tiers.contains(difficulty, &e.0.cca3),
        count,
        rng,
    );
    if sampled.len() < count {
        return Err(QuizError::InsufficientData {
            what: "countries with capitals",
            needed: count,
            available: sampled.len(),
        });
    }

    let mut questions = Vec::with_capacity(sampled.len());
    for (country, city) in sampled {
        let kind = match quiz_type {
            CapitalQuizType::CountryToCapital => QuestionKind::CountryToCapital,
            CapitalQuizType::CapitalToCountry => QuestionKind::CapitalToCountry,
            CapitalQuizType::Mixed => {
                if rng.gen_bool(0.5) {
                    QuestionKind::CountryToCapital
                } else {
                    QuestionKind::CapitalToCountry
                }
            }
        };

        let country_name = locale::country_name(country, locale).to_string();
        let capital_name = locale::capital_name(capitals, city, locale).to_string();

        let (prompt, correct, pool) = match kind {
            QuestionKind::CountryToCapital => {
                let pool: Vec<String> = eligible
                    .iter()
                    .filter(|e| e.0.name.common != country.name.common)
                    .map(|e| locale::capital_name(capitals, e.1, locale).to_string())
                    .collect();
                (country_name, capital_name, pool)
            }
            _ => {
                // Two countries can share a capital spelling; those never
                // qualify as distractor sources for this question.
                let pool: Vec<String> = eligible
                    .iter()
                    .filter(|e| e.1 != city)
                    .map(|e| locale::country_name(e.0, locale).to_string())
                    .collect();
                (capital_name, country_name, pool)
            }
        };

        let mut options = sampling::pick_distractors(&pool, &correct, 3, rng);
        options.push(correct.clone());
        options.shuffle(rng);

        questions.push(GeneratedQuestion {
            prompt,
            image: None,
            options,
            answer: CorrectAnswer::Single(correct),
            kind,
            details: HashMap::new(),
        });
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{fixtures, CapitalEntry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn world() -> Vec<Country> {
        let mut countries: Vec<Country> = (0..12)
            .map(|i| {
                fixtures::country_full(
                    &format!("C{:02}", i),
                    &format!("Country {}", i),
                    &format!("Capital {}", i),
                    1000.0,
                    1000,
                )
            })
            .collect();
        // a territory without a capital never enters the pool
        countries.push(fixtures::country("ATA", "Antarctica"));
        countries
    }

    fn table() -> CapitalTranslations {
        let mut entries = HashMap::new();
        entries.insert(
            "Capital 0".to_string(),
            CapitalEntry {
                en: Some("Capital 0".to_string()),
                ko: Some("수도 0".to_string()),
            },
        );
        CapitalTranslations::new(entries)
    }

    #[test]
    fn country_to_capital_asks_with_the_country_name() {
        let countries = world();
        let tiers = fixtures::tiers(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        let questions = generate(
            &countries,
            &table(),
            &tiers,
            Difficulty::Easy,
            8,
            CapitalQuizType::CountryToCapital,
            Locale::En,
            &mut rng,
        )
        .unwrap();

        assert_eq!(questions.len(), 8);
        for q in &questions {
            assert_eq!(q.kind, QuestionKind::CountryToCapital);
            assert!(q.prompt.starts_with("Country "));
            let CorrectAnswer::Single(answer) = &q.answer else {
                panic!("capital questions are single-choice");
            };
            assert!(answer.starts_with("Capital "));
            assert_eq!(q.options.iter().filter(|o| *o == answer).count(), 1);
            let unique: HashSet<&String> = q.options.iter().collect();
            assert_eq!(unique.len(), q.options.len());
        }
    }

    #[test]
    fn capital_to_country_excludes_shared_spellings() {
        // two countries share the same capital spelling
        let mut countries = world();
        countries[1].capital = vec!["Capital 0".to_string()];
        let tiers = fixtures::tiers(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(33);

        let questions = generate(
            &countries,
            &CapitalTranslations::default(),
            &tiers,
            Difficulty::Easy,
            12,
            CapitalQuizType::CapitalToCountry,
            Locale::En,
            &mut rng,
        )
        .unwrap();

        for q in questions {
            if q.prompt == "Capital 0" {
                let CorrectAnswer::Single(answer) = &q.answer else {
                    panic!();
                };
                // the twin that shares the spelling must not show up as a
                // distractor next to the real answer
                for option in &q.options {
                    if option != answer {
                        assert!(option != "Country 0" && option != "Country 1");
                    }
                }
            }
        }
    }

    #[test]
    fn capitals_resolve_through_the_translation_table() {
        let countries = world();
        let tiers = fixtures::tiers(&[(Difficulty::Easy, &["C00"])]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let questions = generate(
            &countries,
            &table(),
            &tiers,
            Difficulty::Easy,
            1,
            CapitalQuizType::CountryToCapital,
            Locale::Ko,
            &mut rng,
        )
        .unwrap();

        let CorrectAnswer::Single(answer) = &questions[0].answer else {
            panic!();
        };
        assert_eq!(answer, "수도 0");
    }

    #[test]
    fn mixed_mode_produces_both_directions() {
        let countries = world();
        let tiers = fixtures::tiers(&[]);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let questions = generate(
            &countries,
            &CapitalTranslations::default(),
            &tiers,
            Difficulty::Easy,
            12,
            CapitalQuizType::Mixed,
            Locale::En,
            &mut rng,
        )
        .unwrap();

        let kinds: HashSet<QuestionKind> = questions.iter().map(|q| q.kind).collect();
        assert!(kinds.contains(&QuestionKind::CountryToCapital));
        assert!(kinds.contains(&QuestionKind::CapitalToCountry));
    }

    #[test]
    fn too_few_capitals_is_an_error() {
        let countries = vec![
            fixtures::country_full("FRA", "France", "Paris", 1.0, 1),
            fixtures::country_full("DEU", "Germany", "Berlin", 1.0, 1),
            fixtures::country_full("ESP", "Spain", "Madrid", 1.0, 1),
            fixtures::country("ATA", "Antarctica"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let err = generate(
            &countries,
            &CapitalTranslations::default(),
            &fixtures::tiers(&[]),
            Difficulty::Easy,
            5,
            CapitalQuizType::CountryToCapital,
            Locale::En,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientData {
                what: "countries with capitals",
                ..
            }
        ));
    }
}
