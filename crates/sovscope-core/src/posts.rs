//! Collected post model shared by the collection layer and the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Feed a post was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// X (formerly Twitter) live search.
    X,
    Reddit,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::X => write!(f, "x"),
            Platform::Reddit => write!(f, "reddit"),
        }
    }
}

/// One record as emitted by the scraping layer, before cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub text: String,
    /// Engagement descriptor as scraped, e.g. `"5 replies, 20 likes"` or `"1.5K"`.
    #[serde(default, alias = "metrics_raw")]
    pub metrics: Option<String>,
    pub platform: Platform,
    #[serde(default)]
    pub url: Option<String>,
}

/// One observed unit of content, deduplicated by exact text within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedPost {
    pub text: String,
    pub raw_metrics: String,
    pub source: Platform,
    pub url: Option<String>,
}

impl CollectedPost {
    #[must_use]
    pub fn new(text: impl Into<String>, raw_metrics: impl Into<String>, source: Platform) -> Self {
        Self {
            text: text.into(),
            raw_metrics: raw_metrics.into(),
            source,
            url: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
