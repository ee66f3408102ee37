//! In-process stand-in for the search server

use async_trait::async_trait;
use buscadoc::backend::{BackendError, SearchBackend, SearchOutcome, UploadFile, UploadOutcome};
use buscadoc::models::{DataSource, DatasetStatus, Record, SearchResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub struct FakeBackend {
    pub status: Mutex<Result<DatasetStatus, String>>,
    pub upload: Mutex<Result<UploadOutcome, String>>,
    pub clear_error: Mutex<Option<String>>,
    /// Per query: reply delay and outcome
    pub searches: Mutex<HashMap<String, (Duration, Result<SearchOutcome, String>)>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            status: Mutex::new(Ok(DatasetStatus::default())),
            upload: Mutex::new(Err("no upload reply configured".to_string())),
            clear_error: Mutex::new(None),
            searches: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_status(self, status: DatasetStatus) -> Self {
        *self.status.lock().unwrap() = Ok(status);
        self
    }

    pub fn with_upload(self, outcome: Result<UploadOutcome, String>) -> Self {
        *self.upload.lock().unwrap() = outcome;
        self
    }

    pub fn with_search(self, query: &str, delay: Duration, outcome: Result<SearchOutcome, String>) -> Self {
        self.searches.lock().unwrap().insert(query.to_string(), (delay, outcome));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    fn backend_type(&self) -> &str {
        "fake"
    }

    async fn status(&self) -> Result<DatasetStatus, BackendError> {
        self.record_call("status".to_string());
        self.status.lock().unwrap().clone().map_err(BackendError::Network)
    }

    async fn upload(&self, file: UploadFile) -> Result<UploadOutcome, BackendError> {
        self.record_call(format!("upload {}", file.file_name));
        self.upload.lock().unwrap().clone().map_err(BackendError::Network)
    }

    async fn clear(&self) -> Result<(), BackendError> {
        self.record_call("clear".to_string());
        match self.clear_error.lock().unwrap().clone() {
            Some(error) => Err(BackendError::Network(error)),
            None => Ok(()),
        }
    }

    async fn search(&self, query: &str, source: DataSource) -> Result<SearchOutcome, BackendError> {
        self.record_call(format!("search {} {}", source, query));
        let reply = self.searches.lock().unwrap().get(query).cloned();
        match reply {
            Some((delay, outcome)) => {
                tokio::time::sleep(delay).await;
                outcome.map_err(BackendError::Network)
            }
            None => Ok(SearchOutcome::Found(SearchResult::default())),
        }
    }
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(fields) => Record::new(fields),
        other => panic!("not an object: {}", other),
    }
}

pub fn result_of(records: Vec<Record>) -> SearchResult {
    SearchResult {
        records,
        ..Default::default()
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
