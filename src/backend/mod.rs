//! Backend abstraction over the BuscadorDoc server.
//!
//! This module defines the interface the client uses to talk to the server,
//! along with the typed outcomes and error handling shared by implementations.

use async_trait::async_trait;
use std::path::Path;

use crate::models::{DataSource, DatasetStatus, SearchResult};

pub mod http;
pub mod wire;

pub use http::HttpBackend;

/// Transport-class failures. Anything that prevents a well-formed reply.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("File error: {0}")]
    File(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::InvalidData(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

/// A spreadsheet selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub async fn read(path: &Path) -> Result<Self, BackendError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| BackendError::File(format!("not a file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| BackendError::File(format!("{}: {}", path.display(), e)))?;
        Ok(Self { file_name, bytes })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted { filename: Option<String>, records: Option<u64> },
    /// The server answered with an explicit error message.
    Rejected(String),
    /// Neither success nor an error message; nothing to report.
    Declined,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    /// The server answered with an explicit error message.
    Rejected(String),
}

/// Operations the client needs from the search server.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Short identifier used in logs.
    fn backend_type(&self) -> &str;

    async fn status(&self) -> Result<DatasetStatus, BackendError>;

    async fn upload(&self, file: UploadFile) -> Result<UploadOutcome, BackendError>;

    /// Reset the uploaded dataset. The reply body is not inspected.
    async fn clear(&self) -> Result<(), BackendError>;

    async fn search(&self, query: &str, source: DataSource) -> Result<SearchOutcome, BackendError>;
}
