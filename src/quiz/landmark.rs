//! Landmark quiz: a photo, and either "which country is this in" or
//! "what is this landmark called".

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Landmark;
use crate::quiz::locale::{self, Locale};
use crate::quiz::sampling;
use crate::quiz::{
    CorrectAnswer, Difficulty, GeneratedQuestion, QuestionKind, QuizError, MIN_POOL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LandmarkQuizType {
    ToCountry,
    ToName,
    /// Each question flips a fair coin between the two variants.
    Mixed,
}

pub fn generate<R>(
    landmarks: &[Landmark],
    difficulty: Difficulty,
    count: usize,
    quiz_type: LandmarkQuizType,
    locale: Locale,
    rng: &mut R,
) -> Result<Vec<GeneratedQuestion>, QuizError>
where
    R: Rng + ?Sized,
{
    let pool: Vec<&Landmark> = landmarks.iter().collect();
    if pool.len() < MIN_POOL {
        return Err(QuizError::InsufficientData {
            what: "landmarks",
            needed: MIN_POOL,
            available: pool.len(),
        });
    }

    // Landmarks carry their own difficulty tag, so no tier index is needed.
    let sampled = sampling::sample_entities(&pool, |l| l.difficulty == difficulty, count, rng);
    if sampled.len() < count {
        return Err(QuizError::InsufficientData {
            what: "landmarks",
            needed: count,
            available: sampled.len(),
        });
    }

    let mut questions = Vec::with_capacity(sampled.len());
    for landmark in sampled {
        let kind = match quiz_type {
            LandmarkQuizType::ToCountry => QuestionKind::LandmarkToCountry,
            LandmarkQuizType::ToName => QuestionKind::LandmarkToName,
            LandmarkQuizType::Mixed => {
                if rng.gen_bool(0.5) {
                    QuestionKind::LandmarkToCountry
                } else {
                    QuestionKind::LandmarkToName
                }
            }
        };

        let (prompt, correct, distractor_pool) = match kind {
            QuestionKind::LandmarkToCountry => {
                let pool: Vec<String> = landmarks
                    .iter()
                    .filter(|l| l.country.code != landmark.country.code)
                    .map(|l| l.country.name.clone())
                    .collect();
                (
                    locale::landmark_country_prompt(locale, locale::landmark_name(landmark, locale)),
                    landmark.country.name.clone(),
                    pool,
                )
            }
            _ => {
                let pool: Vec<String> = landmarks
                    .iter()
                    .filter(|l| l.id != landmark.id)
                    .map(|l| locale::landmark_name(l, locale).to_string())
                    .collect();
                (
                    locale::landmark_name_prompt(locale).to_string(),
                    locale::landmark_name(landmark, locale).to_string(),
                    pool,
                )
            }
        };

        let mut options = sampling::pick_distractors(&distractor_pool, &correct, 3, rng);
        options.push(correct.clone());
        options.shuffle(rng);

        questions.push(GeneratedQuestion {
            prompt,
            image: Some(landmark.image_url.clone()),
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
    use crate::data::fixtures;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn world() -> Vec<Landmark> {
        let tiers = [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::VeryHard,
        ];
        (0..16)
            .map(|i| {
                fixtures::landmark(
                    &format!("lm{:02}", i),
                    &format!("Landmark {}", i),
                    &format!("Country {}", i / 2),
                    &format!("C{:02}", i / 2),
                    tiers[i % 4],
                )
            })
            .collect()
    }

    #[test]
    fn to_country_questions_draw_countries_not_landmarks() {
        let landmarks = world();
        let mut rng = ChaCha8Rng::seed_from_u64(14);

        let questions = generate(
            &landmarks,
            Difficulty::Easy,
            6,
            LandmarkQuizType::ToCountry,
            Locale::En,
            &mut rng,
        )
        .unwrap();

        assert_eq!(questions.len(), 6);
        for q in &questions {
            assert_eq!(q.kind, QuestionKind::LandmarkToCountry);
            assert!(q.image.is_some());
            let CorrectAnswer::Single(answer) = &q.answer else {
                panic!();
            };
            assert!(answer.starts_with("Country "));
            assert!(q.options.iter().all(|o| o.starts_with("Country ")));
            let unique: HashSet<&String> = q.options.iter().collect();
            assert_eq!(unique.len(), q.options.len());
        }
    }

    #[test]
    fn to_name_questions_never_offer_the_landmark_twice() {
        let landmarks = world();
        let mut rng = ChaCha8Rng::seed_from_u64(15);

        let questions = generate(
            &landmarks,
            Difficulty::Hard,
            8,
            LandmarkQuizType::ToName,
            Locale::En,
            &mut rng,
        )
        .unwrap();

        for q in &questions {
            let CorrectAnswer::Single(answer) = &q.answer else {
                panic!();
            };
            assert_eq!(q.options.iter().filter(|o| *o == answer).count(), 1);
        }
    }

    #[test]
    fn short_tier_fills_from_other_difficulties() {
        let landmarks = world();
        // only four veryHard landmarks exist, ten questions are requested
        let mut rng = ChaCha8Rng::seed_from_u64(16);

        let questions = generate(
            &landmarks,
            Difficulty::VeryHard,
            10,
            LandmarkQuizType::ToName,
            Locale::En,
            &mut rng,
        )
        .unwrap();
        assert_eq!(questions.len(), 10);
    }

    #[test]
    fn fewer_than_four_landmarks_is_an_error() {
        let landmarks: Vec<Landmark> = world().into_iter().take(3).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(17);

        let err = generate(
            &landmarks,
            Difficulty::Easy,
            2,
            LandmarkQuizType::Mixed,
            Locale::En,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            QuizError::InsufficientData {
                what: "landmarks",
                ..
            }
        ));
    }
}
