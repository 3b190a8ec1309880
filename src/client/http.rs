use crate::config::Config;
use crate::model::{AwardDetail, SearchRequest, SearchResponse};
use crate::{ClientError, ClientResult};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The loaded configuration (user agent and timeout)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.api.user_agent.clone())
        .timeout(Duration::from_secs(config.harvester.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Typed client for the spending search and award detail endpoints
#[derive(Debug, Clone)]
pub struct SpendingClient {
    client: Client,
    search_url: String,
    awards_url: String,
}

impl SpendingClient {
    /// Creates a client from the configuration
    pub fn new(config: &Config) -> ClientResult<Self> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config))
    }

    /// Creates a client around an already-built `reqwest::Client`
    pub fn with_client(client: Client, config: &Config) -> Self {
        // Detail URLs are <awards-url><id>/, so the base must end in a slash
        let mut awards_url = config.api.awards_url.clone();
        if !awards_url.ends_with('/') {
            awards_url.push('/');
        }

        Self {
            client,
            search_url: config.api.search_url.clone(),
            awards_url,
        }
    }

    /// Issues one search request and decodes the page response
    ///
    /// # Arguments
    ///
    /// * `request` - The page request body
    ///
    /// # Returns
    ///
    /// * `Ok(SearchResponse)` - The decoded page
    /// * `Err(ClientError)` - Transport, timeout, status, or decode failure
    pub async fn search(&self, request: &SearchRequest) -> ClientResult<SearchResponse> {
        tracing::trace!(
            "POST {} (page {}, codes {:?})",
            self.search_url,
            request.page,
            request.filters.award_type_codes
        );

        let response = self
            .client
            .post(&self.search_url)
            .json(request)
            .send()
            .await
            .map_err(|e| classify_send_error(&self.search_url, e))?;

        decode_response(&self.search_url, response).await
    }

    /// Fetches the detail payload for one award
    ///
    /// # Arguments
    ///
    /// * `generated_id` - The award's generated internal id
    pub async fn award_detail(&self, generated_id: &str) -> ClientResult<AwardDetail> {
        let url = format!("{}{}/", self.awards_url, generated_id);
        tracing::trace!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| classify_send_error(&url, e))?;

        decode_response(&url, response).await
    }
}

/// Classifies a reqwest send error into the client taxonomy
fn classify_send_error(url: &str, error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout {
            url: url.to_string(),
        }
    } else {
        ClientError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Checks the status and decodes the body as `T`
///
/// The body is read as text first so a failed status can carry its body for
/// diagnostics and a malformed payload surfaces as a decode error rather
/// than a transport error.
async fn decode_response<T: DeserializeOwned>(url: &str, response: Response) -> ClientResult<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| classify_send_error(url, e))?;

    serde_json::from_str(&body).map_err(|e| ClientError::Decode {
        url: url.to_string(),
        source: e,
    })
}
