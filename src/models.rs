//! Core data types shared by the backend, the state machine and the UI.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Which corpus a search targets. Doubles as the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    #[default]
    Internal,
    Excel,
}

impl DataSource {
    pub const ALL: [DataSource; 2] = [DataSource::Internal, DataSource::Excel];

    /// Wire name sent as `dataSource`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Internal => "internal",
            DataSource::Excel => "excel",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Session-lifetime view state, mutated only by explicit user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_tab: DataSource,
    pub theme_mode: ThemeMode,
}

/// Mirror of the server-held uploaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatasetStatus {
    pub has_data: bool,
    pub record_count: u64,
    pub filename: Option<String>,
    /// Size of the built-in corpus, when the server reports it.
    pub internal_records: Option<u64>,
}

/// One result row. Field order is the order the server sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Display text for a field; `None` when the field is absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(value_to_text)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Render a JSON value the way a spreadsheet cell reads.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Falsy in the sense the title fallback needs: missing, null, "", false or zero.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// The records produced by one query, consumed once by the renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult {
    pub records: Vec<Record>,
    /// Size of the searched corpus, when reported.
    pub total_records: Option<u64>,
    /// Role mapping supplied alongside the result set, if any.
    pub schema: Option<crate::cards::CardSchema>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
