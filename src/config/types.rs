use serde::Deserialize;

/// Main configuration structure for Award-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub harvester: HarvesterConfig,
    pub api: ApiConfig,
    pub query: QueryConfig,
    pub output: OutputConfig,
}

/// Harvester behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HarvesterConfig {
    /// Number of concurrent partition workers
    pub concurrency: u32,

    /// Minimum time between any two outbound requests (milliseconds),
    /// shared across all workers
    #[serde(rename = "request-interval-ms")]
    pub request_interval_ms: u64,

    /// Per-request HTTP timeout (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Records requested per page
    #[serde(rename = "page-limit")]
    pub page_limit: u32,

    /// Safety valve: a partition that pages past this count is failed
    #[serde(rename = "max-pages-per-partition")]
    pub max_pages_per_partition: u32,

    /// First fiscal year of the partitioned sweep
    #[serde(rename = "start-year")]
    pub start_year: i32,

    /// Last fiscal year of the partitioned sweep (current calendar year
    /// when omitted)
    #[serde(rename = "end-year", default)]
    pub end_year: Option<i32>,
}

/// Upstream API endpoints and client identity
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Spending-by-award search endpoint (POST)
    #[serde(rename = "search-url")]
    pub search_url: String,

    /// Award detail endpoint base (GET <awards-url><id>/)
    #[serde(rename = "awards-url")]
    pub awards_url: String,

    /// Descriptive User-Agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

/// Static query filters applied to every search request
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Search keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Upstream recipient-type filter names
    #[serde(rename = "recipient-types", default)]
    pub recipient_types: Vec<String>,

    /// Place-of-performance (country, state) filters
    #[serde(rename = "place-of-performance", default)]
    pub place_of_performance: Vec<PlaceEntry>,

    /// Static window start for single-pass mode (YYYY-MM-DD)
    #[serde(rename = "start-date")]
    pub start_date: String,

    /// Static window end for single-pass mode (YYYY-MM-DD)
    #[serde(rename = "end-date")]
    pub end_date: String,
}

/// One place-of-performance filter entry
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceEntry {
    pub country: String,
    pub state: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Root of the output tree; category directories are created beneath it
    #[serde(rename = "base-dir")]
    pub base_dir: String,

    /// Filename prefix for single-pass batch files
    #[serde(rename = "batch-prefix")]
    pub batch_prefix: String,
}
