use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// On-disk shape of the brand set file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandsFile {
    /// Optional topic phrase used when building the live-search query.
    #[serde(default)]
    pub topic: Option<String>,
    pub target: String,
    #[serde(default)]
    pub competitors: Vec<String>,
}

/// Validated, lowercased brand configuration passed into the classifier.
///
/// Competitor order is the order given in the file and is the order the
/// classifier walks when several competitors are mentioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSet {
    topic: Option<String>,
    target: String,
    competitors: Vec<String>,
}

impl BrandSet {
    /// Build a brand set from raw names, trimming and lowercasing each one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for empty names, duplicate
    /// competitors, a target listed as its own competitor, or no competitors.
    pub fn new<I, S>(target: &str, competitors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let file = BrandsFile {
            topic: None,
            target: target.to_string(),
            competitors: competitors
                .into_iter()
                .map(|c| c.as_ref().to_string())
                .collect(),
        };
        Self::try_from(file)
    }

    /// Attach a search topic (e.g. `smart fan`).
    #[must_use]
    pub fn with_topic(mut self, topic: &str) -> Self {
        let topic = topic.trim();
        self.topic = (!topic.is_empty()).then(|| topic.to_string());
        self
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn competitors(&self) -> &[String] {
        &self.competitors
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Live-search query for the collection layer.
    ///
    /// `"smart fan" (atomberg OR orient OR havells)`, or just the
    /// parenthesised alternation when no topic is set.
    #[must_use]
    pub fn search_query(&self) -> String {
        let alternation = std::iter::once(self.target.as_str())
            .chain(self.competitors.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" OR ");
        match &self.topic {
            Some(topic) => format!("\"{topic}\" ({alternation})"),
            None => format!("({alternation})"),
        }
    }
}

impl TryFrom<BrandsFile> for BrandSet {
    type Error = ConfigError;

    fn try_from(file: BrandsFile) -> Result<Self, Self::Error> {
        let target = file.target.trim().to_lowercase();
        if target.is_empty() {
            return Err(ConfigError::Validation("target brand name must be non-empty".to_string()));
        }

        let mut seen = HashSet::new();
        let mut competitors = Vec::with_capacity(file.competitors.len());
        for raw in &file.competitors {
            let name = raw.trim().to_lowercase();
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "competitor names must be non-empty".to_string(),
                ));
            }
            if name == target {
                return Err(ConfigError::Validation(format!(
                    "target brand '{target}' is also listed as a competitor"
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigError::Validation(format!("duplicate competitor: '{raw}'")));
            }
            competitors.push(name);
        }

        if competitors.is_empty() {
            return Err(ConfigError::Validation("at least one competitor is required".to_string()));
        }

        let topic = file
            .topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Self {
            topic,
            target,
            competitors,
        })
    }
}

/// Load and validate the brand set from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brand_set(path: &Path) -> Result<BrandSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_brand_set(&content)
}

/// Parse and validate brand set YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_brand_set(content: &str) -> Result<BrandSet, ConfigError> {
    let file: BrandsFile = serde_yaml::from_str(content)?;
    BrandSet::try_from(file)
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
