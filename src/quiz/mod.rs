pub mod area_population;
pub mod capital;
pub mod flag;
pub mod landmark;
pub mod locale;
pub mod sampling;
pub mod score;

use std::collections::HashMap;

/// Every quiz family needs at least four entities to fill one
/// four-option question.
pub const MIN_POOL: usize = 4;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Which tiers to borrow from, nearest first, when the requested tier
    /// cannot fill a quiz on its own.
    pub fn fallback_order(self) -> [Difficulty; 3] {
        match self {
            Difficulty::Easy => [Difficulty::Medium, Difficulty::Hard, Difficulty::VeryHard],
            Difficulty::Medium => [Difficulty::Easy, Difficulty::Hard, Difficulty::VeryHard],
            Difficulty::Hard => [Difficulty::Medium, Difficulty::Easy, Difficulty::VeryHard],
            Difficulty::VeryHard => [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy],
        }
    }
}

/// Which dimension an area/population question measures.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Dimension {
    Area,
    Population,
}

/// The concrete question variant, after any mixed mode has been resolved
/// per question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum QuestionKind {
    Flag,
    CountryToCapital,
    CapitalToCountry,
    LandmarkToCountry,
    LandmarkToName,
    AreaPopulation(Dimension),
}

/// Single-choice questions have one correct option; ordered-selection
/// questions expect the full option list in the right order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CorrectAnswer {
    Single(String),
    Ordered(Vec<String>),
}

/// Raw numbers behind an option, kept around so a result screen can show
/// why an ordering was right or wrong.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountryFacts {
    pub area: Option<f64>,
    pub population: Option<u64>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeneratedQuestion {
    pub prompt: String,
    /// Flag png or landmark photo; the image carries the question for
    /// those families.
    pub image: Option<String>,
    pub options: Vec<String>,
    pub answer: CorrectAnswer,
    pub kind: QuestionKind,
    /// Only populated for area/population questions.
    pub details: HashMap<String, CountryFacts>,
}

impl GeneratedQuestion {
    /// True when `option` is (part of) the correct answer.
    pub fn is_correct_option(&self, option: &str) -> bool {
        match &self.answer {
            CorrectAnswer::Single(answer) => answer == option,
            CorrectAnswer::Ordered(answers) => answers.iter().any(|a| a == option),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("not enough {what} to build a quiz (need {needed}, have {available})")]
    InsufficientData {
        what: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("country {code} is missing {field}; reference data is incomplete")]
    IncompleteCountry { code: String, field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_order_starts_with_nearest_tier() {
        assert_eq!(
            Difficulty::VeryHard.fallback_order(),
            [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy]
        );
        assert_eq!(
            Difficulty::Easy.fallback_order(),
            [Difficulty::Medium, Difficulty::Hard, Difficulty::VeryHard]
        );
    }

    #[test]
    fn difficulty_uses_camel_case_tags() {
        assert_eq!(
            serde_json::to_string(&Difficulty::VeryHard).unwrap(),
            "\"veryHard\""
        );
        let parsed: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, Difficulty::Easy);
    }

    #[test]
    fn correct_option_check_covers_both_shapes() {
        let single = GeneratedQuestion {
            prompt: String::new(),
            image: None,
            options: vec!["France".to_string(), "Spain".to_string()],
            answer: CorrectAnswer::Single("France".to_string()),
            kind: QuestionKind::Flag,
            details: HashMap::new(),
        };
        assert!(single.is_correct_option("France"));
        assert!(!single.is_correct_option("Spain"));

        let ordered = GeneratedQuestion {
            answer: CorrectAnswer::Ordered(vec!["A".to_string(), "B".to_string()]),
            ..single
        };
        assert!(ordered.is_correct_option("B"));
        assert!(!ordered.is_correct_option("C"));
    }
}
