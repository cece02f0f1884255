//! An HTTP client for the expense API.
//!
//! Every failure, whether the request could not be sent, the server answered
//! with an error status, or the body was not the expected envelope, is
//! reported through the single [FetchError] type so that callers only need to
//! display one message.

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;

use crate::{month::MonthKey, row::Row};

/// How long to wait for the API before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shown when the API reports a failure without a message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "failed to fetch data";

/// The errors that may occur while fetching expenses.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FetchError {
    /// The API answered with a non-success status code.
    #[error("HTTP error! status: {status}")]
    Transport {
        /// The status code of the response.
        status: StatusCode,
    },

    /// The request could not be sent or the response could not be received.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered but reported that the request failed.
    #[error("{0}")]
    Application(String),

    /// The response body was not the expected JSON envelope.
    #[error("could not read the response: {0}")]
    Decode(String),
}

/// The JSON envelope the expense endpoints respond with.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Row>>,
    #[serde(default)]
    error: Option<String>,
}

/// Fetches expenses from the API at a fixed base URL, e.g. "http://127.0.0.1:3001/api".
#[derive(Debug, Clone)]
pub struct ExpenseClient {
    base_url: String,
    client: reqwest::Client,
}

impl ExpenseClient {
    /// Create a client for the API at `base_url`. A trailing slash is ignored.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .no_proxy()
            .build()
            .unwrap_or_else(|error| {
                tracing::warn!("Could not configure the HTTP client, using the defaults: {error}");
                reqwest::Client::new()
            });

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every expense.
    ///
    /// # Errors
    /// Returns a [FetchError] if the request fails or the API reports an error.
    pub async fn fetch_all_expenses(&self) -> Result<Vec<Row>, FetchError> {
        let request = self.client.get(self.url("/expenses"));

        fetch_rows(request).await
    }

    /// Fetch the expenses paid in `month`.
    ///
    /// # Errors
    /// Returns a [FetchError] if the request fails or the API reports an error.
    pub async fn fetch_monthly_expenses(&self, month: &MonthKey) -> Result<Vec<Row>, FetchError> {
        let request = self
            .client
            .get(self.url("/monthly-expenses"))
            .query(&[("monthKey", month.to_string())]);

        fetch_rows(request).await
    }

    /// Whether the API answers its health check.
    pub async fn check_health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(error) => {
                tracing::warn!("Health check failed: {error}");
                false
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn fetch_rows(request: RequestBuilder) -> Result<Vec<Row>, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|error| FetchError::Network(error.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Transport { status });
    }

    let envelope: Envelope = response
        .json()
        .await
        .map_err(|error| FetchError::Decode(error.to_string()))?;

    if !envelope.success {
        let message = envelope
            .error
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned());

        return Err(FetchError::Application(message));
    }

    Ok(envelope.data.unwrap_or_default())
}
