//! Share-of-voice scoring for collected social posts.
//!
//! Normalizes scraped engagement counts, attributes each post to the target
//! brand or a competitor, scores sentiment with a local lexicon or an
//! external classifier, and aggregates impact into a share-of-voice report.

pub mod aggregate;
pub mod classify;
pub mod collect;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod remote;
pub mod scorer;
pub mod strategy;
pub mod types;

pub use aggregate::{aggregate, aggregate_with_top, impact_score, DEFAULT_TOP_POSTS};
pub use classify::classify;
pub use collect::{ingest_round, merge_all, merge_rounds};
pub use error::ScoringError;
pub use normalize::normalize_metric;
pub use pipeline::{score_batch, score_batch_local, score_post};
pub use remote::RemoteSentiment;
pub use scorer::{lexicon_score, sentiment_weight, LEXICON_VERSION};
pub use strategy::SentimentStrategy;
pub use types::{
    DeepDiveEntry, Entity, RemoteVerdict, Report, RiskLevel, ScoredPost, SentimentOutcome,
    SentimentSource,
};
