use crate::error::AppError;
use crate::ui::logger::{render_json, Logger};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::error::Category;
use std::time::Duration;

const PUBLIC_KEY_RESOURCE: &str = "publickey";

/// Body of `GET /publickey`. `pem` is mandatory.
#[derive(Deserialize, Debug)]
struct PublicKeyResponse {
    pem: Vec<String>,
}

/// Lists the public keys a running agent publishes over its HTTP API.
pub struct RemoteKeyLister {
    client: Client,
    api_url: String,
}

impl RemoteKeyLister {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.api_url, PUBLIC_KEY_RESOURCE)
    }

    pub fn fetch_public_keys(&self, logger: &Logger) -> Result<Vec<String>, AppError> {
        let url = self.endpoint();
        logger.debug(&format!("GET {}", url), Some("🌐"));

        let response = self.client.get(url.as_str()).send()?.error_for_status()?;
        if response.status() != StatusCode::OK {
            return Err(AppError::RemoteContract(format!(
                "{} answered {} instead of 200",
                url,
                response.status()
            )));
        }
        let body = response.text()?;
        decode_public_keys(&body)
    }

    /// Fetches the published keys and renders them as an indented JSON array.
    pub fn list_remote(&self, logger: &Logger) -> Result<String, AppError> {
        let keys = self.fetch_public_keys(logger)?;
        render_json(&keys)
    }
}

/// Strictly decodes a `/publickey` body. Anything without a `pem` string
/// array is rejected.
pub fn decode_public_keys(body: &str) -> Result<Vec<String>, AppError> {
    serde_json::from_str::<PublicKeyResponse>(body)
        .map(|response| response.pem)
        .map_err(|e| match e.classify() {
            Category::Data => AppError::RemoteContract(format!(
                "publickey output did not include a valid 'pem' key: {}",
                e
            )),
            Category::Io | Category::Syntax | Category::Eof => {
                AppError::RemoteContract(format!("publickey output is not valid JSON: {}", e))
            }
        })
}
