use std::collections::BTreeMap;

use serde::Serialize;
use sovscope_core::{CollectedPost, Platform};

/// Who a post is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entity {
    Target,
    Competitor,
    Irrelevant,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Target => write!(f, "target"),
            Entity::Competitor => write!(f, "competitor"),
            Entity::Irrelevant => write!(f, "irrelevant"),
        }
    }
}

/// Where a post's polarity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentSource {
    Local,
    Remote,
    /// Remote strategy was selected but failed for this post.
    LocalFallback,
}

/// Parsed `CATEGORY|SENTIMENT|INSIGHT` answer from the external classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteVerdict {
    pub category: String,
    /// Always within `[-1.0, 1.0]`.
    pub polarity: f64,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentOutcome {
    /// Within `[-1.0, 1.0]`.
    pub polarity: f64,
    pub source: SentimentSource,
    pub verdict: Option<RemoteVerdict>,
}

impl SentimentOutcome {
    #[must_use]
    pub fn local(polarity: f64) -> Self {
        Self {
            polarity,
            source: SentimentSource::Local,
            verdict: None,
        }
    }

    #[must_use]
    pub fn fallback(polarity: f64) -> Self {
        Self {
            polarity,
            source: SentimentSource::LocalFallback,
            verdict: None,
        }
    }

    #[must_use]
    pub fn remote(verdict: RemoteVerdict) -> Self {
        Self {
            polarity: verdict.polarity,
            source: SentimentSource::Remote,
            verdict: Some(verdict),
        }
    }
}

/// A collected post with every derived score attached. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPost {
    #[serde(flatten)]
    pub post: CollectedPost,
    pub normalized_metric: u64,
    pub entity: Entity,
    pub sentiment: SentimentOutcome,
    pub sentiment_weight: f64,
    pub impact_score: f64,
}

/// Virality-concentration flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// A high-impact relevant post worth opening by hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepDiveEntry {
    pub entity: Entity,
    pub platform: Platform,
    pub impact_score: f64,
    pub url: String,
    pub text: String,
    /// Classifier insight, when the remote strategy produced one.
    pub insight: Option<String>,
}

/// Share-of-voice summary over one batch of scored posts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_scanned: usize,
    pub relevant_count: usize,
    pub target_count: usize,
    pub competitor_count: usize,
    pub target_impact: f64,
    pub competitor_impact: f64,
    /// Target share of relevant impact, in percent. `0.0` when nothing relevant was found.
    pub share_of_voice: f64,
    /// Scanned posts per platform, irrelevant ones included.
    pub platform_breakdown: BTreeMap<Platform, usize>,
    pub risk: RiskLevel,
    /// Posts scored locally because the remote classifier failed.
    pub sentiment_fallbacks: usize,
    pub top_posts: Vec<DeepDiveEntry>,
}
