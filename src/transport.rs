// src/transport.rs
use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use crate::error::{Error, Result};
use crate::models::response::error_message;

/// Authenticated GET requests against a fixed host. The underlying
/// `reqwest::Client` is built once and reused, so connections are pooled
/// across calls.
#[derive(Debug, Clone)]
pub struct Transport {
    client: reqwest::Client,
    host: String,
}

impl Transport {
    pub fn new(token: &str, host: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.host, path.trim_start_matches('/'))
    }

    /// Issues a single GET and returns the decoded body untouched.
    pub async fn request(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                return Err(Error::Transport(e));
            }
        };

        let status = response.status();
        let text = response.text().await?;
        debug!("{} answered {} with {} bytes", url, status, text.len());

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or(text);
            error!("{} returned {}: {}", url, status, message);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&text) {
            Ok(body) => Ok(body),
            Err(e) => {
                error!("Failed to parse response from {}: {}", url, e);
                Err(Error::Decode(e))
            }
        }
    }
}
