//! Locale-aware name resolution and the fixed question texts.
//!
//! Missing translations are never an error: every resolver falls back to
//! the canonical spelling.

use crate::data::{CapitalTranslations, Country, Landmark, LandmarkName};
use crate::quiz::Dimension;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Accepts two-letter tags and BCP-47-ish tags like "ko-KR".
    /// Anything unrecognized means the base locale.
    pub fn from_tag(tag: &str) -> Locale {
        match tag.split(['-', '_']).next().unwrap_or("") {
            "ko" => Locale::Ko,
            _ => Locale::En,
        }
    }

    /// The three-letter code the country translation maps are keyed by.
    pub fn api_code(self) -> &'static str {
        match self {
            Locale::En => "eng",
            Locale::Ko => "kor",
        }
    }
}

/// Display name of a country: translation-map hit wins, canonical name
/// otherwise.
pub fn country_name(country: &Country, locale: Locale) -> &str {
    country
        .translations
        .get(locale.api_code())
        .map(|t| t.common.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(&country.name.common)
}

/// Display name of a capital city. Cities unknown to the translation table
/// keep their canonical spelling.
pub fn capital_name<'a>(table: &'a CapitalTranslations, city: &'a str, locale: Locale) -> &'a str {
    table.get(city, locale).unwrap_or(city)
}

/// Display name of a landmark.
pub fn landmark_name(landmark: &Landmark, locale: Locale) -> &str {
    match (&landmark.name, locale) {
        (LandmarkName::Plain(name), _) => name,
        (LandmarkName::Localized { en, .. }, Locale::En) => en,
        (LandmarkName::Localized { ko, .. }, Locale::Ko) => ko,
    }
}

pub fn flag_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Which country does this flag belong to?",
        Locale::Ko => "이 국기는 어느 나라의 국기인가요?",
    }
}

pub fn landmark_country_prompt(locale: Locale, landmark: &str) -> String {
    match locale {
        Locale::En => format!("Which country is this landmark ({}) located in?", landmark),
        Locale::Ko => format!("이 명소({})는 어느 나라에 있나요?", landmark),
    }
}

pub fn landmark_name_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "What is the name of this landmark?",
        Locale::Ko => "이 명소의 이름은 무엇인가요?",
    }
}

/// Single-choice area/population phrasing for a rank in the descending
/// order: 0 = largest, 1 = second, 2 = third, 3 = smallest.
pub fn rank_prompt(locale: Locale, dimension: Dimension, rank: usize) -> &'static str {
    match (locale, dimension, rank) {
        (Locale::En, Dimension::Area, 0) => "Which country has the largest area?",
        (Locale::En, Dimension::Area, 1) => "Which country has the second largest area?",
        (Locale::En, Dimension::Area, 2) => "Which country has the third largest area?",
        (Locale::En, Dimension::Area, _) => "Which country has the smallest area?",
        (Locale::En, Dimension::Population, 0) => "Which country has the largest population?",
        (Locale::En, Dimension::Population, 1) => {
            "Which country has the second largest population?"
        }
        (Locale::En, Dimension::Population, 2) => {
            "Which country has the third largest population?"
        }
        (Locale::En, Dimension::Population, _) => "Which country has the smallest population?",
        (Locale::Ko, Dimension::Area, 0) => "어느 나라의 면적이 가장 넓은가요?",
        (Locale::Ko, Dimension::Area, 1) => "어느 나라의 면적이 두 번째로 넓은가요?",
        (Locale::Ko, Dimension::Area, 2) => "어느 나라의 면적이 세 번째로 넓은가요?",
        (Locale::Ko, Dimension::Area, _) => "어느 나라의 면적이 가장 좁은가요?",
        (Locale::Ko, Dimension::Population, 0) => "어느 나라의 인구가 가장 많은가요?",
        (Locale::Ko, Dimension::Population, 1) => "어느 나라의 인구가 두 번째로 많은가요?",
        (Locale::Ko, Dimension::Population, 2) => "어느 나라의 인구가 세 번째로 많은가요?",
        (Locale::Ko, Dimension::Population, _) => "어느 나라의 인구가 가장 적은가요?",
    }
}

pub fn order_prompt(locale: Locale, dimension: Dimension) -> &'static str {
    match (locale, dimension) {
        (Locale::En, Dimension::Area) => "Order the countries by area, largest first",
        (Locale::En, Dimension::Population) => "Order the countries by population, largest first",
        (Locale::Ko, Dimension::Area) => "면적이 넓은 순서대로 국가를 선택하세요",
        (Locale::Ko, Dimension::Population) => "인구가 많은 순서대로 국가를 선택하세요",
    }
}

/// End-of-quiz praise, bucketed the way the result screen does it.
pub fn result_feedback(locale: Locale, percent: u32) -> &'static str {
    match locale {
        Locale::En => {
            if percent >= 80 {
                "Excellent! A true geography expert!"
            } else if percent >= 50 {
                "Well done! Keep practicing!"
            } else {
                "Keep practicing and try again!"
            }
        }
        Locale::Ko => {
            if percent >= 80 {
                "훌륭합니다! 지리 전문가!"
            } else if percent >= 50 {
                "잘했습니다! 계속 연습하세요!"
            } else {
                "조금 더 연습해보세요!"
            }
        }
    }
}
