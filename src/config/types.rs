use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_value;
use crate::error::ValidationError;
use crate::profiles::{BotCategory, BotProfile};

/// Settings read from `botsim.toml` / `botsim.json`. Every field is optional;
/// values given on the command line take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    #[serde(alias = "requests")]
    pub count: Option<usize>,
    pub categories: Option<Vec<BotCategory>>,
    pub concurrency: Option<usize>,
    /// Seconds, fractional values allowed.
    pub delay: Option<f64>,
    pub timeout: Option<DurationValue>,
    pub seed: Option<u64>,
    pub insecure: Option<bool>,
    pub output: Option<String>,
    pub verbose: Option<bool>,
    /// Extra User-Agents appended to the built-in catalog.
    pub profiles: Option<Vec<ProfileConfig>>,
    /// File the settings were read from.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl ConfigFile {
    #[must_use]
    pub fn extra_profiles(&self) -> Vec<BotProfile> {
        self.profiles
            .iter()
            .flatten()
            .map(|profile| BotProfile::new(profile.category, profile.user_agent.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    pub category: BotCategory,
    #[serde(default)]
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_value(text),
        }
    }
}
