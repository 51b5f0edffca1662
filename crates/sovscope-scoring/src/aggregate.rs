//! Impact scoring and share-of-voice aggregation.

use std::collections::BTreeMap;

use crate::types::{DeepDiveEntry, Entity, Report, RiskLevel, ScoredPost, SentimentSource};

/// Number of deep-dive posts carried by [`aggregate`].
pub const DEFAULT_TOP_POSTS: usize = 5;

/// A single post holding more than this share of the batch's engagement is a risk.
const RISK_SHARE_NUM: u128 = 4;
const RISK_SHARE_DEN: u128 = 10;

/// `ln(1 + engagement) * weight`. Finite and non-negative for every input.
#[must_use]
pub fn impact_score(normalized_metric: u64, sentiment_weight: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let engagement = normalized_metric as f64;
    engagement.ln_1p() * sentiment_weight
}

/// Aggregate a batch into a [`Report`] with [`DEFAULT_TOP_POSTS`] deep-dive entries.
#[must_use]
pub fn aggregate(posts: &[ScoredPost]) -> Report {
    aggregate_with_top(posts, DEFAULT_TOP_POSTS)
}

/// Aggregate a batch into a [`Report`].
///
/// Irrelevant posts count toward `total_scanned` and the platform breakdown
/// but not toward share of voice. Every ratio has an explicit zero case: no
/// relevant impact gives a share of `0.0`, and no engagement gives
/// [`RiskLevel::Low`].
#[must_use]
pub fn aggregate_with_top(posts: &[ScoredPost], top_n: usize) -> Report {
    let mut target_count = 0;
    let mut competitor_count = 0;
    let mut target_impact = 0.0_f64;
    let mut competitor_impact = 0.0_f64;
    let mut platform_breakdown = BTreeMap::new();
    let mut sentiment_fallbacks = 0;

    for scored in posts {
        *platform_breakdown.entry(scored.post.source).or_insert(0) += 1;
        if scored.sentiment.source == SentimentSource::LocalFallback {
            sentiment_fallbacks += 1;
        }
        match scored.entity {
            Entity::Target => {
                target_count += 1;
                target_impact += scored.impact_score;
            }
            Entity::Competitor => {
                competitor_count += 1;
                competitor_impact += scored.impact_score;
            }
            Entity::Irrelevant => {}
        }
    }

    let relevant_impact = target_impact + competitor_impact;
    let share_of_voice = if relevant_impact > 0.0 {
        target_impact / relevant_impact * 100.0
    } else {
        0.0
    };

    let report = Report {
        total_scanned: posts.len(),
        relevant_count: target_count + competitor_count,
        target_count,
        competitor_count,
        target_impact,
        competitor_impact,
        share_of_voice,
        platform_breakdown,
        risk: concentration_risk(posts),
        sentiment_fallbacks,
        top_posts: deep_dive(posts, top_n),
    };

    tracing::info!(
        total = report.total_scanned,
        relevant = report.relevant_count,
        share_of_voice = report.share_of_voice,
        risk = %report.risk,
        "aggregated share of voice"
    );

    report
}

/// `High` when one post holds more than 40% of the batch's summed engagement.
#[must_use]
pub fn concentration_risk(posts: &[ScoredPost]) -> RiskLevel {
    let total: u128 = posts.iter().map(|p| u128::from(p.normalized_metric)).sum();
    if total == 0 {
        return RiskLevel::Low;
    }
    let peak = posts
        .iter()
        .map(|p| u128::from(p.normalized_metric))
        .max()
        .unwrap_or(0);
    if peak * RISK_SHARE_DEN > total * RISK_SHARE_NUM {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// The `top_n` highest-impact relevant posts that link somewhere.
///
/// Ties keep input order.
#[must_use]
pub fn deep_dive(posts: &[ScoredPost], top_n: usize) -> Vec<DeepDiveEntry> {
    let mut candidates: Vec<&ScoredPost> = posts
        .iter()
        .filter(|p| p.entity != Entity::Irrelevant && p.post.url.is_some())
        .collect();
    candidates.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));

    candidates
        .into_iter()
        .take(top_n)
        .filter_map(|p| {
            Some(DeepDiveEntry {
                entity: p.entity,
                platform: p.post.source,
                impact_score: p.impact_score,
                url: p.post.url.clone()?,
                text: p.post.text.clone(),
                insight: p.sentiment.verdict.as_ref().map(|v| v.insight.clone()),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
