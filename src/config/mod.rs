//! Configuration module for Award-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and carries the immutable award-category catalog.
//!
//! # Example
//!
//! ```no_run
//! use award_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Harvesting with {} workers", config.harvester.concurrency);
//! ```

mod catalog;
mod parser;
mod types;
mod validation;

// Re-export types
pub use catalog::{AwardCategory, CategoryCatalog, CategorySpec};
pub use types::{ApiConfig, Config, HarvesterConfig, OutputConfig, PlaceEntry, QueryConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
