use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which sentiment strategy the scoring pipeline runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentMode {
    /// Lexicon scoring only; no network access.
    Local,
    /// External classifier first, lexicon fallback per item.
    Remote,
}

impl std::fmt::Display for SentimentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentMode::Local => write!(f, "local"),
            SentimentMode::Remote => write!(f, "remote"),
        }
    }
}

impl std::str::FromStr for SentimentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(SentimentMode::Local),
            "remote" => Ok(SentimentMode::Remote),
            other => Err(format!(
                "unknown sentiment strategy '{other}'; expected local or remote"
            )),
        }
    }
}

/// Connection settings for the external text classifier.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub brands_path: PathBuf,
    pub sentiment_mode: SentimentMode,
    /// Present whenever `SOV_LLM_API_KEY` is set, whatever the mode.
    pub llm: Option<LlmConfig>,
    pub scoring_concurrency: usize,
}
