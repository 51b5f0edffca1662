use thiserror::Error;

/// Failures of the external sentiment classifier.
///
/// Apart from [`ScoringError::MissingLlmConfig`], raised while the strategy
/// is built, these never leave the sentiment strategy: each one routes the
/// affected post to the local lexicon instead.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("remote sentiment requires SOV_LLM_API_KEY to be set")]
    MissingLlmConfig,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier did not answer within {secs}s")]
    Timeout { secs: u64 },

    #[error("classifier returned status {status}")]
    RemoteStatus { status: u16 },

    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),
}
