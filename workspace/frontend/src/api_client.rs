pub mod history;
pub mod prediction;

use common::ErrorResponse;
use reqwest::Response;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, trace, warn};

use crate::settings::AppSettings;

pub use history::HistoryProvider;
pub use prediction::PredictionProvider;

/// Failures talking to the price API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}{}", status_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

fn status_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// The `error` field the backend put in its error body, if any.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// HTTP client for the history and prediction endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    settings: AppSettings,
}

impl ApiClient {
    pub fn new(settings: AppSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!("API client configured for {}", settings.api_base_url);
        Ok(Self { client, settings })
    }

    /// Uses a pre-built `reqwest::Client` (proxy or TLS setup done by the caller).
    pub fn with_client(client: reqwest::Client, settings: AppSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Common GET request handler
    pub(crate) async fn get<T>(&self, url: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("GET request to: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", url, e);
            ApiError::Request(e)
        })?;

        read_json("GET", url, response).await
    }

    /// Common POST request handler
    pub(crate) async fn post<T, B>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("POST request to: {}", url);

        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            error!("POST {} - Request failed: {}", url, e);
            ApiError::Request(e)
        })?;

        read_json("POST", url, response).await
    }
}

async fn read_json<T>(method: &str, url: &str, response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        warn!("{} {} - Non-OK response: {}", method, url, status);
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => {
                error!("{} {} - API error: {}", method, url, err.error);
                Some(err.error)
            }
            Err(_) => None,
        };
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    trace!("{} {} - Response received, parsing JSON", method, url);
    let body = response.bytes().await?;
    let parsed = serde_json::from_slice(&body).map_err(|e| {
        error!("{} {} - Failed to parse response: {}", method, url, e);
        ApiError::Decode(e.to_string())
    })?;

    info!("{} {} - Success", method, url);
    Ok(parsed)
}
