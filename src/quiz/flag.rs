//! Flag quiz: show a flag, ask which country it belongs to.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::{Country, TierIndex};
use crate::quiz::locale::{self, Locale};
use crate::quiz::sampling;
use crate::quiz::{
    CorrectAnswer, Difficulty, GeneratedQuestion, QuestionKind, QuizError, MIN_POOL,
};

/// Countries whose flag can headline a question: a real name, a real
/// image, and no dotted abbreviations.
fn flag_eligible(country: &Country) -> bool {
    country.name.common.chars().count() >= 3
        && !country.flags.png.is_empty()
        && !country.name.common.contains('.')
}

pub fn generate<R>(
    countries: &[Country],
    tiers: &TierIndex,
    difficulty: Difficulty,
    count: usize,
    locale: Locale,
    rng: &mut R,
) -> Result<Vec<GeneratedQuestion>, QuizError>
where
    R: Rng + ?Sized,
{
    let eligible: Vec<&Country> = countries.iter().filter(|c| flag_eligible(c)).collect();
    if eligible.len() < MIN_POOL {
        return Err(QuizError::InsufficientData {
            what: "countries with flags",
            needed: MIN_POOL,
            available: eligible.len(),
        });
    }

    let sampled = sampling::sample_entities(
        &eligible,
        |c| tiers.contains(difficulty, &c.cca3),
        count,
        rng,
    );
    if sampled.len() < count {
        return Err(QuizError::InsufficientData {
            what: "countries with flags",
            needed: count,
            available: sampled.len(),
        });
    }

    // Distractors are drawn from the whole eligible pool, not just the
    // sampled subset.
    let names: Vec<String> = eligible
        .iter()
        .map(|c| locale::country_name(c, locale).to_string())
        .collect();

    let mut questions = Vec::with_capacity(sampled.len());
    for country in sampled {
        let correct = locale::country_name(country, locale).to_string();
        let mut options = sampling::pick_distractors(&names, &correct, 3, rng);
        options.push(correct.clone());
        options.shuffle(rng);

        questions.push(GeneratedQuestion {
            prompt: locale::flag_prompt(locale).to_string(),
            image: Some(country.flags.png.clone()),
            options,
            answer: CorrectAnswer::Single(correct),
            kind: QuestionKind::Flag,
            details: HashMap::new(),
        });
    }
    Ok(questions)
}
