//! JSON shapes exchanged with the server, validated at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{BackendError, SearchOutcome, UploadOutcome};
use crate::cards::CardSchema;
use crate::models::{DataSource, DatasetStatus, Record, SearchResult};

#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub has_excel_data: bool,
    #[serde(default)]
    pub records: u64,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub sample_records: Option<u64>,
}

impl From<StatusResponse> for DatasetStatus {
    fn from(response: StatusResponse) -> Self {
        DatasetStatus {
            has_data: response.has_excel_data,
            record_count: response.records,
            filename: response.filename.filter(|name| !name.is_empty()),
            internal_records: response.sample_records,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub records: Option<u64>,
}

impl UploadResponse {
    pub fn into_outcome(self) -> Result<UploadOutcome, BackendError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Ok(UploadOutcome::Rejected(message));
        }
        match self.success {
            Some(true) => Ok(UploadOutcome::Accepted {
                filename: self.filename,
                records: self.records,
            }),
            Some(false) => Ok(UploadOutcome::Declined),
            None => Err(BackendError::InvalidData(
                "upload reply has neither success nor error".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    #[serde(rename = "dataSource")]
    pub data_source: DataSource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub total_records: Option<u64>,
    #[serde(default)]
    pub schema: Option<CardSchema>,
}

impl SearchResponse {
    pub fn into_outcome(self) -> Result<SearchOutcome, BackendError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Ok(SearchOutcome::Rejected(message));
        }
        let results = self
            .results
            .ok_or_else(|| BackendError::InvalidData("search reply has no results".to_string()))?;

        let records = results
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::Object(fields) => Ok(Record::new(fields)),
                other => Err(BackendError::InvalidData(format!(
                    "result {} is not an object: {}",
                    i, other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchOutcome::Found(SearchResult {
            records,
            total_records: self.total_records,
            schema: self.schema,
        }))
    }
}

/// Parse a raw body into one of the response types.
pub fn parse<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|e| BackendError::InvalidData(e.to_string()))
}
