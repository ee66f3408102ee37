use crate::models::{DataSource, DatasetStatus, SearchResult};
use std::path::PathBuf;

/// Which part of the main screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchInput,
    Results,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Tabs and theme
    SwitchTab(DataSource),
    ToggleTheme,

    // Search
    SubmitSearch {
        query: String,
        source: DataSource,
    },
    SearchCompleted {
        token: u64,
        source: DataSource,
        result: SearchResult,
    },
    SearchRejected {
        token: u64,
        message: String,
    },
    SearchFailed {
        token: u64,
        error: String,
    },

    // Dataset status
    RefreshStatus,
    StatusLoaded(DatasetStatus),
    StatusFailed(String),

    // Upload and clear
    UploadFile(PathBuf),
    UploadAccepted {
        filename: Option<String>,
        records: Option<u64>,
    },
    UploadRejected(String),
    UploadFailed(String),
    /// The server neither accepted nor rejected the file
    UploadDeclined,
    ClearDataset,
    ClearCompleted,
    ClearFailed(String),

    // Results grid
    FlipCard(usize),
    SetFocus(Focus),

    // Welcome curtain
    CurtainTransitionEnd,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    /// Path input standing in for the file picker
    Upload,
    /// Blocking message; must be dismissed
    Alert(String),
    Help,
    Logs,
}

/// Side effects requested by a state transition, carried out by the
/// application component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RefreshStatus,
    Upload {
        path: PathBuf,
    },
    Clear,
    Search {
        token: u64,
        query: String,
        source: DataSource,
    },
    ShowAlert(String),
    /// Empty the upload path so the same file can be chosen again
    ResetFilePicker,
}
