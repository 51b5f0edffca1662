//! Turning scraped scroll rounds into one deduplicated post sequence.
//!
//! Each scroll round is ingested into its own vector; rounds are then
//! merged by concatenation, keeping the first post seen for any exact text.

use std::collections::HashSet;

use sovscope_core::{CollectedPost, RawRecord};

/// Metric descriptor used when the scraper found none.
const MISSING_METRICS: &str = "0";

/// Flatten multi-line post text onto one line.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert one scroll round of raw records into posts, deduplicated within the round.
#[must_use]
pub fn ingest_round(records: Vec<RawRecord>) -> Vec<CollectedPost> {
    let posts = records
        .into_iter()
        .map(|record| CollectedPost {
            text: clean_text(&record.text),
            raw_metrics: record
                .metrics
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| MISSING_METRICS.to_string()),
            source: record.platform,
            url: record.url.filter(|u| !u.trim().is_empty()),
        })
        .collect();
    merge_rounds(Vec::new(), posts)
}

/// Append `round` to `acc`, dropping posts whose text is already present.
#[must_use]
pub fn merge_rounds(acc: Vec<CollectedPost>, round: Vec<CollectedPost>) -> Vec<CollectedPost> {
    let mut seen: HashSet<String> = acc.iter().map(|p| p.text.clone()).collect();
    let mut merged = acc;
    merged.extend(round.into_iter().filter(|p| seen.insert(p.text.clone())));
    merged
}

/// Fold any number of rounds into one deduplicated sequence.
#[must_use]
pub fn merge_all<I>(rounds: I) -> Vec<CollectedPost>
where
    I: IntoIterator<Item = Vec<CollectedPost>>,
{
    rounds.into_iter().fold(Vec::new(), merge_rounds)
}

#[cfg(test)]
mod tests {
    use sovscope_core::Platform;

    use super::*;

    fn record(text: &str, metrics: Option<&str>) -> RawRecord {
        RawRecord {
            text: text.to_string(),
            metrics: metrics.map(str::to_string),
            platform: Platform::X,
            url: None,
        }
    }

    fn post(text: &str, metrics: &str) -> CollectedPost {
        CollectedPost::new(text, metrics, Platform::X)
    }

    #[test]
    fn clean_text_joins_lines() {
        assert_eq!(
            clean_text("atomberg\n  renesa fan \r\n\nis quiet"),
            "atomberg renesa fan is quiet"
        );
    }

    #[test]
    fn ingest_defaults_missing_metrics() {
        let posts = ingest_round(vec![record("a", None), record("b", Some("  "))]);
        assert_eq!(posts[0].raw_metrics, "0");
        assert_eq!(posts[1].raw_metrics, "0");
    }

    #[test]
    fn ingest_dedups_within_round() {
        let posts = ingest_round(vec![
            record("same text", Some("1 like")),
            record("same\ntext", Some("9 likes")),
            record("other", None),
        ]);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].raw_metrics, "1 like");
    }

    #[test]
    fn ingest_keeps_one_empty_text_post() {
        let posts = ingest_round(vec![record("", None), record("  ", None)]);
        assert_eq!(posts.len(), 1);
        assert!(posts[0].text.is_empty());
    }

    #[test]
    fn ingest_drops_blank_url() {
        let mut r = record("a", None);
        r.url = Some(String::new());
        assert!(ingest_round(vec![r])[0].url.is_none());
    }

    #[test]
    fn merge_keeps_first_occurrence_and_order() {
        let first = vec![post("a", "1"), post("b", "2")];
        let second = vec![post("b", "99"), post("c", "3")];
        let merged = merge_rounds(first, second);
        let texts: Vec<&str> = merged.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(merged[1].raw_metrics, "2");
    }

    #[test]
    fn merge_is_exact_match_only() {
        let merged = merge_rounds(vec![post("Atomberg", "1")], vec![post("atomberg", "1")]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_all_folds_rounds() {
        let merged = merge_all(vec![
            vec![post("a", "1")],
            vec![post("a", "1"), post("b", "1")],
            vec![],
            vec![post("c", "1"), post("b", "1")],
        ]);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn merge_all_empty() {
        assert!(merge_all(Vec::<Vec<CollectedPost>>::new()).is_empty());
    }
}
