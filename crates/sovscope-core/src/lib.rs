//! Shared model and configuration for the sovscope share-of-voice pipeline.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod posts;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, LlmConfig, SentimentMode};
pub use brands::{load_brand_set, BrandSet, BrandsFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use posts::{CollectedPost, Platform, RawRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brand set validation failed: {0}")]
    Validation(String),
}
