//! Batch scoring: normalize, classify and score every collected post.

use futures::stream::{self, StreamExt};
use sovscope_core::{BrandSet, CollectedPost};

use crate::aggregate::impact_score;
use crate::classify::classify;
use crate::normalize::normalize_metric;
use crate::scorer::{lexicon_score, sentiment_weight};
use crate::strategy::SentimentStrategy;
use crate::types::{ScoredPost, SentimentOutcome, SentimentSource};

/// Combine a post with its sentiment outcome into a [`ScoredPost`].
#[must_use]
pub fn score_post(
    post: CollectedPost,
    brands: &BrandSet,
    sentiment: SentimentOutcome,
) -> ScoredPost {
    let normalized_metric = normalize_metric(&post.raw_metrics);
    let entity = classify(&post.text, brands);
    let weight = sentiment_weight(sentiment.polarity);
    ScoredPost {
        post,
        normalized_metric,
        entity,
        sentiment,
        sentiment_weight: weight,
        impact_score: impact_score(normalized_metric, weight),
    }
}

/// Score a batch with the lexicon only. Synchronous and deterministic.
#[must_use]
pub fn score_batch_local(posts: Vec<CollectedPost>, brands: &BrandSet) -> Vec<ScoredPost> {
    posts
        .into_iter()
        .map(|post| {
            let outcome = SentimentOutcome::local(lexicon_score(&post.text));
            score_post(post, brands, outcome)
        })
        .collect()
}

/// Score a batch with the given strategy.
///
/// At most `concurrency` posts are in flight at once. Output order matches
/// input order, and a failing post never affects its neighbours: remote
/// failures degrade to the lexicon inside [`SentimentStrategy::score`].
pub async fn score_batch(
    posts: Vec<CollectedPost>,
    brands: &BrandSet,
    strategy: &SentimentStrategy,
    concurrency: usize,
) -> Vec<ScoredPost> {
    let total = posts.len();

    let scored: Vec<ScoredPost> = stream::iter(posts)
        .map(|post| async move {
            let outcome = strategy.score(&post.text).await;
            score_post(post, brands, outcome)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let fallbacks = scored
        .iter()
        .filter(|p| p.sentiment.source == SentimentSource::LocalFallback)
        .count();
    tracing::debug!(
        total,
        fallbacks,
        mode = %strategy.mode(),
        "scored post batch"
    );

    scored
}
