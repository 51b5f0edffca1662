mod analyze;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sovscope_core::SentimentMode;
use sovscope_scoring::DEFAULT_TOP_POSTS;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sovscope")]
#[command(about = "Share-of-voice scoring for collected social posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score collected posts and print a share-of-voice report
    Analyze {
        /// JSON file holding one collection round; repeat to merge rounds in order
        #[arg(long = "input", required = true)]
        inputs: Vec<PathBuf>,

        /// Brand set YAML (defaults to `SOV_BRANDS_PATH`)
        #[arg(long)]
        brands: Option<PathBuf>,

        /// Report output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,

        /// Sentiment strategy override: `local` or `remote`
        #[arg(long)]
        strategy: Option<SentimentMode>,

        /// Number of high-impact posts listed for deep dive
        #[arg(long, default_value_t = DEFAULT_TOP_POSTS)]
        top: usize,
    },
    /// Print the live-search query for the brand set
    Query {
        /// Brand set YAML (defaults to `SOV_BRANDS_PATH`)
        #[arg(long)]
        brands: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Console,
    Markdown,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = sovscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        strategy = %config.sentiment_mode,
        brands = %config.brands_path.display(),
        "configuration loaded"
    );

    match cli.command {
        Some(Commands::Analyze {
            inputs,
            brands,
            format,
            strategy,
            top,
        }) => {
            let brands_path = brands.unwrap_or_else(|| config.brands_path.clone());
            analyze::run_analyze(
                &config,
                &analyze::AnalyzeArgs {
                    inputs,
                    brands_path,
                    format,
                    strategy,
                    top,
                },
            )
            .await?;
        }
        Some(Commands::Query { brands }) => {
            let brands_path = brands.unwrap_or_else(|| config.brands_path.clone());
            let brand_set = sovscope_core::load_brand_set(&brands_path)?;
            println!("{}", brand_set.search_query());
        }
        None => println!("sovscope: run `sovscope --help` for commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
