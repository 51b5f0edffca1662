//! Console and Markdown rendering of a share-of-voice report.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use sovscope_core::BrandSet;
use sovscope_scoring::Report;

const RULE: &str = "========================================";

/// Longest post excerpt shown in the deep-dive table.
const EXCERPT_CHARS: usize = 80;

/// Plain-text summary block for a terminal.
///
/// # Errors
///
/// Returns `fmt::Error` only if writing to the buffer fails.
pub(crate) fn render_console(
    report: &Report,
    brands: &BrandSet,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{RULE}")?;
    writeln!(out, "SHARE OF VOICE: {}", brands.target().to_uppercase())?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total Conversations Scanned: {}", report.total_scanned)?;
    writeln!(out, "Relevant Conversations:      {}", report.relevant_count)?;
    writeln!(out, "Target Impact Score:         {:.2}", report.target_impact)?;
    writeln!(out, "Competitor Impact Score:     {:.2}", report.competitor_impact)?;
    writeln!(out, "Virality Risk:               {}", report.risk)?;
    if report.sentiment_fallbacks > 0 {
        writeln!(out, "Sentiment Fallbacks:         {}", report.sentiment_fallbacks)?;
    }
    writeln!(out, "------------------------------")?;
    writeln!(out, "Share of Voice:              {:.2}%", report.share_of_voice)?;
    writeln!(out, "{RULE}")?;

    if !report.platform_breakdown.is_empty() {
        let platforms = report
            .platform_breakdown
            .iter()
            .map(|(platform, count)| format!("{platform}={count}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "Platforms: {platforms}")?;
    }

    for (rank, entry) in report.top_posts.iter().enumerate() {
        writeln!(
            out,
            "#{} [{}] {:.2} {}",
            rank + 1,
            entry.entity,
            entry.impact_score,
            entry.url
        )?;
    }

    Ok(out.trim_end().to_string())
}

/// Markdown document suitable for sharing.
///
/// # Errors
///
/// Returns `fmt::Error` only if writing to the buffer fails.
pub(crate) fn render_markdown(
    report: &Report,
    brands: &BrandSet,
    generated_at: DateTime<Utc>,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let now = generated_at.format("%Y-%m-%d %H:%M UTC");

    writeln!(out, "# Share of Voice Report: {}", brands.target())?;
    writeln!(out)?;
    writeln!(out, "**Generated**: {now}")?;
    writeln!(out, "**Competitors**: {}", brands.competitors().join(", "))?;
    writeln!(out, "**Query**: `{}`", brands.search_query())?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "## Summary")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Value |")?;
    writeln!(out, "|--------|-------|")?;
    writeln!(out, "| Conversations scanned | {} |", report.total_scanned)?;
    writeln!(out, "| Relevant conversations | {} |", report.relevant_count)?;
    writeln!(
        out,
        "| Target mentions | {} (impact {:.2}) |",
        report.target_count, report.target_impact
    )?;
    writeln!(
        out,
        "| Competitor mentions | {} (impact {:.2}) |",
        report.competitor_count, report.competitor_impact
    )?;
    writeln!(out, "| **Share of voice** | **{:.2}%** |", report.share_of_voice)?;
    writeln!(out, "| Virality risk | {} |", report.risk)?;
    writeln!(out, "| Sentiment fallbacks | {} |", report.sentiment_fallbacks)?;

    if !report.platform_breakdown.is_empty() {
        writeln!(out)?;
        writeln!(out, "## Platforms")?;
        writeln!(out)?;
        writeln!(out, "| Platform | Posts |")?;
        writeln!(out, "|----------|-------|")?;
        for (platform, count) in &report.platform_breakdown {
            writeln!(out, "| {platform} | {count} |")?;
        }
    }

    if !report.top_posts.is_empty() {
        writeln!(out)?;
        writeln!(out, "## Deep Dive")?;
        writeln!(out)?;
        writeln!(out, "| # | Entity | Platform | Impact | Post | Insight |")?;
        writeln!(out, "|---|--------|----------|--------|------|---------|")?;
        for (rank, entry) in report.top_posts.iter().enumerate() {
            writeln!(
                out,
                "| {} | {} | {} | {:.2} | [{}]({}) | {} |",
                rank + 1,
                entry.entity,
                entry.platform,
                entry.impact_score,
                table_cell(&excerpt(&entry.text)),
                entry.url,
                table_cell(entry.insight.as_deref().unwrap_or("-")),
            )?;
        }
    }

    Ok(out.trim_end().to_string())
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_CHARS - 1).collect();
    format!("{}…", cut.trim_end())
}

/// Escape characters that would break a Markdown table row or link label.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace('[', "\\[")
        .replace(']', "\\]")
}
