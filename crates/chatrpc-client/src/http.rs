//! HTTP client for REST endpoints.

use tracing::debug;

use crate::error::ClientError;

/// Raw HTTP response: status plus body bytes.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// HTTP client for the server's REST surface.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Server root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the server is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking health");

        let response = self.inner.get(&url).send().await.map_err(connect_error)?;
        Ok(response.status().is_success())
    }

    /// GET `path` with query parameters.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<RawResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(connect_error)?;
        read(response).await
    }

    /// POST a JSON body to `path`.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RawResponse, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(connect_error)?;
        read(response).await
    }
}

async fn read(response: reqwest::Response) -> Result<RawResponse, ClientError> {
    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();
    Ok(RawResponse { status, body })
}

fn connect_error(err: reqwest::Error) -> ClientError {
    if err.is_connect() {
        ClientError::Connection(err.to_string())
    } else {
        ClientError::Http(err)
    }
}
