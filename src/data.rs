//! Reference data store: countries, landmarks, capital-name translations
//! and the difficulty tier index. Everything is loaded once at startup and
//! read-only afterwards.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::quiz::locale::Locale;
use crate::quiz::Difficulty;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TranslatedName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Flags {
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// One country record in the RestCountries v3.1 shape.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub cca3: String,
    #[serde(default)]
    pub cca2: String,
    pub flags: Flags,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub continents: Vec<String>,
    /// Keyed by three-letter API language code ("kor", "fra", ...).
    #[serde(default)]
    pub translations: HashMap<String, TranslatedName>,
}

impl Country {
    /// The capital used by quizzes. Some territories list none, some list
    /// an empty string.
    pub fn capital(&self) -> Option<&str> {
        self.capital
            .first()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }
}

/// Landmark names come either as a plain string or as an en/ko pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum LandmarkName {
    Plain(String),
    Localized { en: String, ko: String },
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LandmarkCountry {
    pub name: String,
    /// cca3 of the country the landmark belongs to.
    pub code: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub id: String,
    pub name: LandmarkName,
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    pub country: LandmarkCountry,
    #[serde(default)]
    pub continent: String,
    pub difficulty: Difficulty,
}

/// English/Korean spellings for one capital city.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CapitalEntry {
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ko: Option<String>,
}

/// Static capital-name translation table, keyed by the canonical (English)
/// spelling used in the country records.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CapitalTranslations(HashMap<String, CapitalEntry>);

impl CapitalTranslations {
    pub fn new(entries: HashMap<String, CapitalEntry>) -> Self {
        Self(entries)
    }

    pub fn get(&self, city: &str, locale: Locale) -> Option<&str> {
        let entry = self.0.get(city)?;
        let translated = match locale {
            Locale::En => entry.en.as_deref(),
            Locale::Ko => entry.ko.as_deref(),
        };
        translated.filter(|t| !t.is_empty())
    }
}

/// Authored difficulty tiers: each tier owns a set of cca3 codes.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierIndex {
    #[serde(default)]
    pub easy: HashSet<String>,
    #[serde(default)]
    pub medium: HashSet<String>,
    #[serde(default)]
    pub hard: HashSet<String>,
    #[serde(default)]
    pub very_hard: HashSet<String>,
}

impl TierIndex {
    pub fn codes(&self, tier: Difficulty) -> &HashSet<String> {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
            Difficulty::VeryHard => &self.very_hard,
        }
    }

    pub fn contains(&self, tier: Difficulty, code: &str) -> bool {
        self.codes(tier).contains(code)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the quiz engine reads. Immutable after `load`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub countries: Vec<Country>,
    pub landmarks: Vec<Landmark>,
    pub capital_names: CapitalTranslations,
    pub tiers: TierIndex,
}

impl ReferenceData {
    /// One-time startup load. Countries and landmarks are required files;
    /// the capital table and the tier index degrade to empty when absent.
    pub async fn load(dir: &Path) -> Result<Self, LoadError> {
        let countries = parse_records::<Country>(&read(dir.join("countries.json")).await?, "country");
        let landmarks = parse_records::<Landmark>(&read(dir.join("landmarks.json")).await?, "landmark");

        let capital_names = match optional_read(dir.join("capital_names.json")).await? {
            Some((path, text)) => serde_json::from_str(&text)
                .map_err(|source| LoadError::Parse { path, source })?,
            None => {
                warn!("no capital_names.json; capitals will keep their canonical spelling");
                CapitalTranslations::default()
            }
        };
        let tiers = match optional_read(dir.join("difficulty_levels.json")).await? {
            Some((path, text)) => serde_json::from_str(&text)
                .map_err(|source| LoadError::Parse { path, source })?,
            None => {
                warn!("no difficulty_levels.json; every quiz will sample from the full pool");
                TierIndex::default()
            }
        };

        info!(
            "reference data loaded: {} countries, {} landmarks",
            countries.len(),
            landmarks.len()
        );
        Ok(Self {
            countries,
            landmarks,
            capital_names,
            tiers,
        })
    }
}

async fn read(path: PathBuf) -> Result<(PathBuf, String), LoadError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok((path, text)),
        Err(source) => Err(LoadError::Io { path, source }),
    }
}

async fn optional_read(path: PathBuf) -> Result<Option<(PathBuf, String)>, LoadError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok(Some((path, text))),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LoadError::Io { path, source }),
    }
}

/// Parse a JSON array record by record, dropping the ones that do not fit
/// the schema instead of rejecting the whole file.
fn parse_records<T: serde::de::DeserializeOwned>(
    (path, text): &(PathBuf, String),
    what: &str,
) -> Vec<T> {
    let raw: Vec<serde_json::Value> = match serde_json::from_str(text) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("{} is not a JSON array ({}); treating as empty", path.display(), err);
            return Vec::new();
        }
    };

    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if records.len() < total {
        warn!(
            "dropped {} malformed {} records out of {}",
            total - records.len(),
            what,
            total
        );
    }
    records
}
