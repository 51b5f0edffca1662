//! External text classifier over an OpenAI-compatible chat completions API.

use std::time::Duration;

use serde_json::{json, Value};
use sovscope_core::LlmConfig;

use crate::error::ScoringError;
use crate::types::RemoteVerdict;

const SYSTEM_PROMPT: &str = "You classify social media posts about consumer brands. \
Reply with exactly one line of the form CATEGORY|SENTIMENT|INSIGHT where CATEGORY is a \
short label (for example Praise, Complaint, Question, Comparison, News), SENTIMENT is a \
decimal between -1.0 and 1.0, and INSIGHT is a phrase of at most twelve words. \
Do not add any other text.";

/// Posts longer than this are cut before being sent.
const MAX_INPUT_CHARS: usize = 2_000;

/// HTTP client for the external classifier.
#[derive(Debug, Clone)]
pub struct RemoteSentiment {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl RemoteSentiment {
    /// Build a client from the LLM settings.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &LlmConfig) -> Result<Self, ScoringError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout,
        })
    }

    /// Override the per-call deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Classify one post, bounded by the configured deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError`] on transport failure, timeout, non-success
    /// status, or a reply that is not `CATEGORY|SENTIMENT|INSIGHT`.
    pub async fn classify(&self, text: &str) -> Result<RemoteVerdict, ScoringError> {
        match tokio::time::timeout(self.timeout, self.request(text)).await {
            Ok(result) => result,
            Err(_) => Err(ScoringError::Timeout {
                secs: self.timeout.as_secs(),
            }),
        }
    }

    async fn request(&self, text: &str) -> Result<RemoteVerdict, ScoringError> {
        let excerpt: String = text.chars().take(MAX_INPUT_CHARS).collect();
        let req_body = json!({
            "model": self.model,
            "temperature": 0,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": excerpt }
            ]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScoringError::RemoteStatus {
                status: response.status().as_u16(),
            });
        }

        let body: Value = response.json().await?;
        let content = body
            .get("choices")
            .and_then(Value::as_array)
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(Value::as_str)
            .ok_or_else(|| ScoringError::MalformedResponse("no message content".to_string()))?;

        parse_verdict(content)
    }
}

/// Parse a `CATEGORY|SENTIMENT|INSIGHT` reply.
///
/// Exactly three fields are required, the category must be non-empty, and
/// the sentiment must be a finite decimal within `[-1.0, 1.0]`.
///
/// # Errors
///
/// Returns [`ScoringError::MalformedResponse`] for any other shape.
pub fn parse_verdict(content: &str) -> Result<RemoteVerdict, ScoringError> {
    let fields: Vec<&str> = content.trim().split('|').map(str::trim).collect();
    let [category, sentiment, insight] = fields.as_slice() else {
        return Err(ScoringError::MalformedResponse(format!(
            "expected 3 fields, got {}",
            fields.len()
        )));
    };

    if category.is_empty() {
        return Err(ScoringError::MalformedResponse("empty category".to_string()));
    }

    let polarity: f64 = sentiment.parse().map_err(|_| {
        ScoringError::MalformedResponse(format!("non-numeric sentiment '{sentiment}'"))
    })?;
    if !polarity.is_finite() || !(-1.0..=1.0).contains(&polarity) {
        return Err(ScoringError::MalformedResponse(format!(
            "sentiment {polarity} outside [-1, 1]"
        )));
    }

    Ok(RemoteVerdict {
        category: (*category).to_string(),
        polarity,
        insight: (*insight).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_reply() {
        let verdict = parse_verdict("Praise|0.8|likes the low power draw").unwrap();
        assert_eq!(verdict.category, "Praise");
        assert!((verdict.polarity - 0.8).abs() < f64::EPSILON);
        assert_eq!(verdict.insight, "likes the low power draw");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let verdict = parse_verdict("  Complaint | -0.6 | motor hum at night \n").unwrap();
        assert_eq!(verdict.category, "Complaint");
        assert!((verdict.polarity + 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_insight_is_allowed() {
        let verdict = parse_verdict("News|0|").unwrap();
        assert_eq!(verdict.insight, "");
    }

    #[test]
    fn rejects_two_fields() {
        let err = parse_verdict("Praise|0.8").unwrap_err();
        assert!(matches!(err, ScoringError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_four_fields() {
        assert!(parse_verdict("Praise|0.8|quiet|extra").is_err());
    }

    #[test]
    fn rejects_non_numeric_sentiment() {
        let err = parse_verdict("Praise|positive|quiet").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn rejects_out_of_range_sentiment() {
        assert!(parse_verdict("Praise|1.5|quiet").is_err());
        assert!(parse_verdict("Praise|NaN|quiet").is_err());
    }

    #[test]
    fn rejects_empty_category() {
        assert!(parse_verdict("|0.2|quiet").is_err());
    }

    #[test]
    fn rejects_prose_reply() {
        assert!(parse_verdict("Sure! The sentiment is positive.").is_err());
    }
}
