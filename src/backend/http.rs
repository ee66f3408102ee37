//! HTTP implementation of [`SearchBackend`] over reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use super::wire::{self, SearchRequest, SearchResponse, StatusResponse, UploadResponse};
use super::{BackendError, SearchBackend, SearchOutcome, UploadFile, UploadOutcome};
use crate::models::{DataSource, DatasetStatus};

/// Talks to a BuscadorDoc server. The server keeps the uploaded dataset in
/// its session cookie, so the client keeps a cookie store for the run.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // Error statuses still carry a JSON body with an `error` field, so the
    // body is read regardless of the status code.
    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, BackendError> {
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            log::debug!("HTTP {} with {} byte body", status, body.len());
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl SearchBackend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn status(&self) -> Result<DatasetStatus, BackendError> {
        let response = self.client.get(self.url("status")).send().await?;
        let body = Self::read_body(response).await?;
        let status: StatusResponse = wire::parse(&body)?;
        Ok(status.into())
    }

    async fn upload(&self, file: UploadFile) -> Result<UploadOutcome, BackendError> {
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = Form::new().part("file", part);

        let response = self.client.post(self.url("upload")).multipart(form).send().await?;
        let body = Self::read_body(response).await?;
        wire::parse::<UploadResponse>(&body)?.into_outcome()
    }

    async fn clear(&self) -> Result<(), BackendError> {
        let response = self.client.post(self.url("clear")).send().await?;
        log::debug!("Clear answered with HTTP {}", response.status());
        Ok(())
    }

    async fn search(&self, query: &str, source: DataSource) -> Result<SearchOutcome, BackendError> {
        let request = SearchRequest {
            query,
            data_source: source,
        };
        let response = self.client.post(self.url("search")).json(&request).send().await?;
        let body = Self::read_body(response).await?;
        wire::parse::<SearchResponse>(&body)?.into_outcome()
    }
}
