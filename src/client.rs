//! Resource fetch client: one HTTP GET per call, typed errors, nothing else.
//!
//! No retry, no timeout, no caching. Anything beyond a single request per
//! invocation belongs to the transport or to the caller.

use std::env;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::DEFAULT_ADDR;
use crate::coordinator::ResourceLoader;
use crate::error::FetchError;
use crate::resource::ResourceKey;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client rooted at `base_url` (no trailing slash), e.g.
    /// `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from `BANKDASH_BASE_URL`, defaulting to the local server.
    pub fn from_env() -> Self {
        let base_url =
            env::var("BANKDASH_BASE_URL").unwrap_or_else(|_| format!("http://{}", DEFAULT_ADDR));
        Self::new(base_url)
    }

    /// GET the resource's conventional path and return the parsed body
    /// verbatim. No schema validation happens here; the coordinator stores
    /// whatever JSON the endpoint produced.
    pub async fn fetch(&self, key: ResourceKey) -> Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, key.path());
        log::debug!("fetching {} from {}", key, url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                resource: key,
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                resource: key,
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(|source| FetchError::Network {
            resource: key,
            source,
        })
    }
}

#[async_trait]
impl ResourceLoader for ApiClient {
    async fn fetch(&self, key: ResourceKey) -> Result<Value, FetchError> {
        ApiClient::fetch(self, key).await
    }
}
