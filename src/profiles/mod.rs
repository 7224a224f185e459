//! Bot categories, their User-Agent catalog, and the profile pool sampled by
//! the dispatcher.
mod catalog;

#[cfg(test)]
mod tests;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Longest User-Agent shown verbatim in outcomes and console output.
pub const USER_AGENT_DISPLAY_LIMIT: usize = 50;
/// Marker appended to a truncated User-Agent.
const TRUNCATION_MARKER: &str = "...";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BotCategory {
    #[value(name = "search_engine")]
    SearchEngine,
    #[value(name = "scraping_framework")]
    ScrapingFramework,
    #[value(name = "http_library")]
    HttpLibrary,
    #[value(name = "ai_bot")]
    AiBot,
    #[value(name = "monitoring")]
    Monitoring,
    #[value(name = "social_media")]
    SocialMedia,
    #[value(name = "seo_tool")]
    SeoTool,
    #[value(name = "browser")]
    Browser,
    #[value(name = "malicious")]
    Malicious,
}

impl BotCategory {
    pub const ALL: [BotCategory; 9] = [
        BotCategory::SearchEngine,
        BotCategory::ScrapingFramework,
        BotCategory::HttpLibrary,
        BotCategory::AiBot,
        BotCategory::Monitoring,
        BotCategory::SocialMedia,
        BotCategory::SeoTool,
        BotCategory::Browser,
        BotCategory::Malicious,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BotCategory::SearchEngine => "search_engine",
            BotCategory::ScrapingFramework => "scraping_framework",
            BotCategory::HttpLibrary => "http_library",
            BotCategory::AiBot => "ai_bot",
            BotCategory::Monitoring => "monitoring",
            BotCategory::SocialMedia => "social_media",
            BotCategory::SeoTool => "seo_tool",
            BotCategory::Browser => "browser",
            BotCategory::Malicious => "malicious",
        }
    }

    /// Built-in User-Agent strings for this category.
    #[must_use]
    pub const fn user_agents(self) -> &'static [&'static str] {
        catalog::user_agents(self)
    }
}

impl fmt::Display for BotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client identity to impersonate: a category and the User-Agent it sends.
///
/// An empty `user_agent` means the request carries no User-Agent header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotProfile {
    category: BotCategory,
    user_agent: String,
}

impl BotProfile {
    pub fn new(category: BotCategory, user_agent: impl Into<String>) -> Self {
        Self {
            category,
            user_agent: user_agent.into(),
        }
    }

    #[must_use]
    pub const fn category(&self) -> BotCategory {
        self.category
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The header value to send, or `None` when the header must be omitted.
    #[must_use]
    pub fn header_value(&self) -> Option<&str> {
        if self.user_agent.is_empty() {
            None
        } else {
            Some(&self.user_agent)
        }
    }

    #[must_use]
    pub fn display_user_agent(&self) -> String {
        display_user_agent(&self.user_agent)
    }
}

/// Shortens a User-Agent to [`USER_AGENT_DISPLAY_LIMIT`] characters plus `...`.
#[must_use]
pub fn display_user_agent(user_agent: &str) -> String {
    user_agent
        .char_indices()
        .nth(USER_AGENT_DISPLAY_LIMIT)
        .map_or_else(
            || user_agent.to_owned(),
            |(cut, _)| {
                let mut shortened =
                    String::with_capacity(cut.saturating_add(TRUNCATION_MARKER.len()));
                shortened.push_str(user_agent.get(..cut).unwrap_or(user_agent));
                shortened.push_str(TRUNCATION_MARKER);
                shortened
            },
        )
}

/// The set of profiles a run samples from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePool {
    profiles: Vec<BotProfile>,
}

impl ProfilePool {
    /// Builds a pool from the built-in catalog. Categories repeated in
    /// `categories` contribute their User-Agents only once.
    #[must_use]
    pub fn from_categories(categories: &[BotCategory]) -> Self {
        let mut seen = Vec::with_capacity(categories.len());
        let mut profiles = Vec::new();
        for category in categories {
            if seen.contains(category) {
                continue;
            }
            seen.push(*category);
            profiles.extend(
                category
                    .user_agents()
                    .iter()
                    .map(|user_agent| BotProfile::new(*category, *user_agent)),
            );
        }
        Self { profiles }
    }

    /// Appends extra profiles whose category is among `selected`.
    #[must_use]
    pub fn with_extra<I>(mut self, extra: I, selected: &[BotCategory]) -> Self
    where
        I: IntoIterator<Item = BotProfile>,
    {
        self.profiles.extend(
            extra
                .into_iter()
                .filter(|profile| selected.contains(&profile.category())),
        );
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BotProfile] {
        &self.profiles
    }
}

impl From<Vec<BotProfile>> for ProfilePool {
    fn from(profiles: Vec<BotProfile>) -> Self {
        Self { profiles }
    }
}
