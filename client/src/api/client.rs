//! HTTP client for the records API.

use async_trait::async_trait;
use mediashelf::{Record, RecordId};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde_json::Value;
use std::time::Duration;

use super::types::{error_message, records_from_value};
use super::RecordStore;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};

const JSON: &str = "application/json";

/// Records API client
#[derive(Debug, Clone)]
pub struct RecordsApi {
    http: reqwest::Client,
    base: Url,
}

impl RecordsApi {
    pub fn new(base: Url, timeout: Duration) -> ApiResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.api_base.clone(), config.timeout)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/api/records[/{id}]`, with the id percent-encoded.
    fn url(&self, id: Option<&RecordId>) -> ApiResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty().extend(["api", "records"]);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Send one request and return the decoded body.
    ///
    /// The body is JSON when the response says so, otherwise plain text.
    /// Unreadable bodies become `null` rather than failing the call.
    async fn send(&self, method: Method, url: Url, body: Option<&Record>) -> ApiResult<Value> {
        log::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON));
        if let Some(record) = body {
            request = request.body(serde_json::to_vec(record)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains(JSON));

        let data = match response.text().await {
            Ok(text) if is_json => serde_json::from_str(&text).unwrap_or(Value::Null),
            Ok(text) => Value::String(text),
            Err(_) => Value::Null,
        };

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                message: error_message(&data, status.as_u16()),
            });
        }

        Ok(data)
    }
}

#[async_trait]
impl RecordStore for RecordsApi {
    async fn list(&self) -> ApiResult<Vec<Record>> {
        let data = self.send(Method::GET, self.url(None)?, None).await?;
        Ok(records_from_value(data)?)
    }

    async fn create(&self, record: &Record) -> ApiResult<()> {
        self.send(Method::POST, self.url(None)?, Some(record)).await?;
        Ok(())
    }

    async fn update(&self, id: &RecordId, record: &Record) -> ApiResult<()> {
        self.send(Method::PUT, self.url(Some(id))?, Some(record)).await?;
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        self.send(Method::DELETE, self.url(Some(id))?, None).await?;
        Ok(())
    }
}
