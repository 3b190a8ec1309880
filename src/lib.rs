//! Award-Harvest: a polite USASpending.gov award harvester
//!
//! This crate collects award records from the federal spending search API,
//! optionally enriches each one with its detail endpoint payload, and writes
//! the results as an organized JSON directory tree.

pub mod client;
pub mod config;
pub mod harvest;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API client error: {0}")]
    Client(#[from] ClientError),

    #[error("Partition {partition} exceeded the cap of {cap} pages")]
    PageCap { partition: String, cap: u32 },

    #[error("No partitions to harvest for years {start}..={end}")]
    EmptyPlan { start: i32, end: i32 },

    #[error("Worker task failed: {0}")]
    Worker(String),

    #[error("Run cancelled")]
    Cancelled,

    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised by the spending API client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to construct HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for API client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

// Re-export commonly used types
pub use config::{AwardCategory, CategoryCatalog, Config};
pub use harvest::{HarvestMode, Orchestrator};
pub use model::{Award, AwardDetail, EnrichedAward};
pub use output::HarvestSummary;
