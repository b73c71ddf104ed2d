//! Data-store access layer.
//!
//! The ledger lives in an external PostgREST-style data store; this module
//! is the crate's only path to it. [`StoreClient`] owns the HTTP client and
//! base URL, and the per-table modules expose free functions that take a
//! client reference. Non-success responses surface as [`Error::Store`] with
//! the endpoint, status, and body attached.

/// Category persistence
pub mod categories;
/// Expense persistence
pub mod expenses;
/// User persistence
pub mod users;

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Settings;
use crate::errors::{Error, Result};

/// Client for the external REST data store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Creates a client from the application settings.
    ///
    /// When an API key is configured it is attached to every request as
    /// both the `apikey` header and a bearer token, which is what the
    /// store's REST gateway expects.
    ///
    /// # Errors
    /// [`Error::Config`] when the store URL or API key is malformed, or
    /// [`Error::Http`] when the underlying client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self> {
        let base_url = Url::parse(&settings.store_url).map_err(|error| Error::Config {
            message: format!("STORE_URL is not a valid URL: {error}"),
        })?;

        let mut headers = HeaderMap::new();
        if let Some(key) = &settings.store_api_key {
            let api_key = HeaderValue::from_str(key).map_err(|_| Error::Config {
                message: "STORE_API_KEY contains characters not valid in a header".to_string(),
            })?;
            let bearer =
                HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| Error::Config {
                    message: "STORE_API_KEY contains characters not valid in a header".to_string(),
                })?;
            headers.insert("apikey", api_key);
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/{table}", self.base_url)
        } else {
            format!("{}/{table}?{query}", self.base_url)
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<T> {
        let url = self.endpoint(table, query);
        let response = self.http.get(&url).send().await?;
        let response = check_status(response, table).await?;
        Ok(response.json().await?)
    }

    /// POSTs a payload and returns the stored representation rows.
    pub(crate) async fn post_returning<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(table, "");
        let response = self
            .http
            .post(&url)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let response = check_status(response, table).await?;
        Ok(response.json().await?)
    }

    /// PATCHes the rows selected by `query` and returns the updated
    /// representation rows.
    pub(crate) async fn patch_returning<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(table, query);
        let response = self
            .http
            .patch(&url)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let response = check_status(response, table).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, table: &str, query: &str) -> Result<()> {
        let url = self.endpoint(table, query);
        let response = self.http.delete(&url).send().await?;
        check_status(response, table).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response, endpoint: &str) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
    Err(Error::Store {
        endpoint: endpoint.to_string(),
        status,
        body,
    })
}
