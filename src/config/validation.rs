use crate::config::types::{ApiConfig, Config, HarvesterConfig, OutputConfig, QueryConfig};
use crate::ConfigError;
use chrono::NaiveDate;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_harvester_config(&config.harvester)?;
    validate_api_config(&config.api)?;
    validate_query_config(&config.query)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates harvester configuration
fn validate_harvester_config(config: &HarvesterConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 || config.concurrency > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 100, got {}",
            config.concurrency
        )));
    }

    if config.request_interval_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "request_interval_ms must be >= 100ms, got {}ms",
            config.request_interval_ms
        )));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be between 1 and 300, got {}",
            config.request_timeout_secs
        )));
    }

    if config.page_limit < 1 || config.page_limit > 100 {
        return Err(ConfigError::Validation(format!(
            "page_limit must be between 1 and 100, got {}",
            config.page_limit
        )));
    }

    if config.max_pages_per_partition < 1 {
        return Err(ConfigError::Validation(format!(
            "max_pages_per_partition must be >= 1, got {}",
            config.max_pages_per_partition
        )));
    }

    if config.start_year < 2000 {
        return Err(ConfigError::Validation(format!(
            "start_year must be >= 2000, got {}",
            config.start_year
        )));
    }

    if let Some(end_year) = config.end_year {
        if end_year < config.start_year {
            return Err(ConfigError::Validation(format!(
                "end_year {} is before start_year {}",
                end_year, config.start_year
            )));
        }
    }

    Ok(())
}

/// Validates API endpoint configuration
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    validate_endpoint_url("search-url", &config.search_url)?;
    validate_endpoint_url("awards-url", &config.awards_url)?;

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if !config
        .user_agent
        .chars()
        .all(|c| c.is_ascii_graphic() || c == ' ')
    {
        return Err(ConfigError::Validation(format!(
            "user_agent must contain only printable ASCII, got '{}'",
            config.user_agent
        )));
    }

    Ok(())
}

/// Validates a single endpoint URL
fn validate_endpoint_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {}: {}", name, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            name,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates query filter configuration
fn validate_query_config(config: &QueryConfig) -> Result<(), ConfigError> {
    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "query must have at least one keyword".to_string(),
        ));
    }

    for keyword in &config.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keywords cannot be blank".to_string(),
            ));
        }
    }

    for name in &config.recipient_types {
        if name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "recipient-types entries cannot be blank".to_string(),
            ));
        }
    }

    for place in &config.place_of_performance {
        if place.country.trim().is_empty() || place.state.trim().is_empty() {
            return Err(ConfigError::Validation(
                "place-of-performance entries must have a country and a state".to_string(),
            ));
        }
    }

    let start = validate_date("start-date", &config.start_date)?;
    let end = validate_date("end-date", &config.end_date)?;

    if end < start {
        return Err(ConfigError::Validation(format!(
            "end-date {} is before start-date {}",
            config.end_date, config.start_date
        )));
    }

    Ok(())
}

/// Validates a YYYY-MM-DD date string
fn validate_date(name: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        ConfigError::Validation(format!("{} '{}' is not a YYYY-MM-DD date: {}", name, value, e))
    })
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.base_dir.is_empty() {
        return Err(ConfigError::Validation(
            "base_dir cannot be empty".to_string(),
        ));
    }

    if config.batch_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "batch_prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}
