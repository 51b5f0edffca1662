//! Engagement-count parsing.
//!
//! Scraped metric descriptors come in several shapes: bare shorthand
//! (`"1.5K"`), aria-label sentences (`"5 replies, 20 reposts, 1.2K likes"`),
//! or nothing at all. Every count in the string is scaled by its unit suffix
//! and the results are summed. Summing replies, reposts and likes together
//! conflates units; scoring only ever compares posts relative to each other,
//! so the approximation is kept.

use std::sync::LazyLock;

use regex::Regex;

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+\.?[0-9]*)([KkMm]?)").expect("valid count regex"));

/// Sum every count found in `raw`, honouring `k`/`m` suffixes.
///
/// Returns `0` for empty or number-free input; never fails. Fractional
/// totals are truncated toward zero.
#[must_use]
pub fn normalize_metric(raw: &str) -> u64 {
    let total: f64 = COUNT_RE
        .captures_iter(raw)
        .filter_map(|cap| {
            let value: f64 = cap.get(1)?.as_str().parse().ok()?;
            let scale = match cap.get(2).map(|m| m.as_str()) {
                Some("k" | "K") => 1_000.0,
                Some("m" | "M") => 1_000_000.0,
                _ => 1.0,
            };
            Some(value * scale)
        })
        .sum();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let truncated = total as u64;
    truncated
}
