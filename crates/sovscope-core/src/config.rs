use crate::app_config::{AppConfig, Environment, LlmConfig, SentimentMode};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_positive = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if value == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("SOV_ENV", "development"))?;
    let log_level = or_default("SOV_LOG_LEVEL", "info");
    let brands_path = PathBuf::from(or_default("SOV_BRANDS_PATH", "./config/brands.yaml"));

    let sentiment_mode = or_default("SOV_SENTIMENT_STRATEGY", "local")
        .parse::<SentimentMode>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "SOV_SENTIMENT_STRATEGY".to_string(),
            reason,
        })?;

    let scoring_concurrency = usize::try_from(parse_positive("SOV_SCORING_CONCURRENCY", "4")?)
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "SOV_SCORING_CONCURRENCY".to_string(),
            reason: e.to_string(),
        })?;

    let api_key = lookup("SOV_LLM_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());

    let llm = match api_key {
        Some(api_key) => Some(LlmConfig {
            api_key,
            base_url: or_default("SOV_LLM_BASE_URL", "https://api.openai.com/v1")
                .trim_end_matches('/')
                .to_string(),
            model: or_default("SOV_LLM_MODEL", "gpt-4o-mini"),
            timeout_secs: parse_positive("SOV_LLM_TIMEOUT_SECS", "15")?,
        }),
        None => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        brands_path,
        sentiment_mode,
        llm,
        scoring_concurrency,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SOV_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
