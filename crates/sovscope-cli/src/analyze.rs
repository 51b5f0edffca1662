//! `analyze` command: load collection rounds, score, aggregate, print.

use std::path::{Path, PathBuf};

use chrono::Utc;
use sovscope_core::{AppConfig, CollectedPost, RawRecord, SentimentMode};
use sovscope_scoring::{
    aggregate_with_top, ingest_round, merge_all, score_batch, SentimentStrategy,
};

use crate::report;
use crate::OutputFormat;

pub(crate) struct AnalyzeArgs {
    pub inputs: Vec<PathBuf>,
    pub brands_path: PathBuf,
    pub format: OutputFormat,
    pub strategy: Option<SentimentMode>,
    pub top: usize,
}

/// Parse one collection round from the scraper's JSON output.
///
/// # Errors
///
/// Returns an error if the content is not a JSON array of records.
pub(crate) fn parse_round(content: &str) -> anyhow::Result<Vec<CollectedPost>> {
    let records: Vec<RawRecord> = serde_json::from_str(content)?;
    Ok(ingest_round(records))
}

fn load_round(path: &Path) -> anyhow::Result<Vec<CollectedPost>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let posts = parse_round(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), count = posts.len(), "loaded collection round");
    Ok(posts)
}

/// Resolve the sentiment strategy, honouring a command-line override.
///
/// # Errors
///
/// Returns an error if `remote` is selected without `SOV_LLM_API_KEY`, or
/// the HTTP client cannot be built.
pub(crate) fn select_strategy(
    config: &AppConfig,
    strategy_override: Option<SentimentMode>,
) -> anyhow::Result<SentimentStrategy> {
    let mut config = config.clone();
    if let Some(mode) = strategy_override {
        config.sentiment_mode = mode;
    }
    Ok(SentimentStrategy::from_config(&config)?)
}

/// Run the full pipeline over the given collection rounds and print the report.
///
/// An empty input is not an error; it prints the all-zero report.
///
/// # Errors
///
/// Returns an error if the brand set or any input file cannot be loaded, or
/// the sentiment strategy cannot be set up. Per-post scoring never fails.
pub(crate) async fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let brands = sovscope_core::load_brand_set(&args.brands_path)?;

    let rounds = args
        .inputs
        .iter()
        .map(|path| load_round(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let posts = merge_all(rounds);

    if posts.is_empty() {
        tracing::warn!("no posts found in input; report will be empty");
    }

    let strategy = select_strategy(config, args.strategy)?;
    tracing::info!(
        posts = posts.len(),
        rounds = args.inputs.len(),
        strategy = %strategy.mode(),
        brand = brands.target(),
        "scoring collected posts"
    );

    let scored = score_batch(posts, &brands, &strategy, config.scoring_concurrency).await;
    let report = aggregate_with_top(&scored, args.top);

    if report.sentiment_fallbacks > 0 {
        tracing::warn!(
            fallbacks = report.sentiment_fallbacks,
            "some posts were scored by the lexicon after remote failures"
        );
    }

    let rendered = match args.format {
        OutputFormat::Console => report::render_console(&report, &brands)?,
        OutputFormat::Markdown => report::render_markdown(&report, &brands, Utc::now())?,
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{rendered}");

    Ok(())
}
