//! Sentiment strategy selection.

use sovscope_core::{AppConfig, SentimentMode};

use crate::error::ScoringError;
use crate::remote::RemoteSentiment;
use crate::scorer::lexicon_score;
use crate::types::SentimentOutcome;

/// How polarity is obtained for each post.
#[derive(Debug, Clone)]
pub enum SentimentStrategy {
    /// Lexicon only.
    Local,
    /// External classifier, with the lexicon as per-post fallback.
    Remote(RemoteSentiment),
}

impl SentimentStrategy {
    /// Pick the strategy named by the configuration's capability flag.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::MissingLlmConfig`] if the remote strategy is
    /// selected without LLM settings, or [`ScoringError::Http`] if the remote
    /// HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScoringError> {
        match (config.sentiment_mode, &config.llm) {
            (SentimentMode::Remote, Some(llm)) => Ok(Self::Remote(RemoteSentiment::new(llm)?)),
            (SentimentMode::Remote, None) => Err(ScoringError::MissingLlmConfig),
            (SentimentMode::Local, _) => Ok(Self::Local),
        }
    }

    #[must_use]
    pub fn mode(&self) -> SentimentMode {
        match self {
            Self::Local => SentimentMode::Local,
            Self::Remote(_) => SentimentMode::Remote,
        }
    }

    /// Score one post's text. Never fails.
    ///
    /// With the remote strategy, any classifier failure is logged and the
    /// post is scored by the lexicon instead. Blank text never leaves the
    /// process.
    pub async fn score(&self, text: &str) -> SentimentOutcome {
        let Self::Remote(remote) = self else {
            return SentimentOutcome::local(lexicon_score(text));
        };
        if text.trim().is_empty() {
            return SentimentOutcome::local(0.0);
        }

        match remote.classify(text).await {
            Ok(verdict) => SentimentOutcome::remote(verdict),
            Err(e) => {
                tracing::warn!(error = %e, "remote sentiment failed; falling back to lexicon");
                SentimentOutcome::fallback(lexicon_score(text))
            }
        }
    }
}
