//! Session state and its transitions.
//!
//! [`AppState::apply`] is the single place where view state, dataset status,
//! the result area and the busy indicator change. It does no I/O: requests
//! come back as [`Effect`]s and their completions re-enter as actions.

use super::actions::{Action, Effect, Focus};
use crate::cards::{build_cards, Card};
use crate::config::SchemasConfig;
use crate::constants::{
    ALERT_CLEAR_FAILED, ALERT_UPLOAD_PREFIX, BANNER_NO_RESULTS, BANNER_SEARCH_CONNECTION, BANNER_SEARCH_ERROR_PREFIX,
    STATUS_CONNECTION_ERROR, STATUS_UPLOAD_PROMPT,
};
use crate::models::{DataSource, DatasetStatus, ThemeMode, ViewState};

/// What the result area currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultsView {
    /// Nothing rendered, no banner
    #[default]
    Idle,
    /// The fixed empty-state banner
    NoResults,
    /// An inline error banner
    Error(String),
    Cards {
        cards: Vec<Card>,
        total_records: Option<u64>,
    },
}

impl ResultsView {
    pub fn banner(&self) -> Option<&str> {
        match self {
            ResultsView::NoResults => Some(BANNER_NO_RESULTS),
            ResultsView::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            ResultsView::Cards { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ResultsView::Idle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: ViewState,
    pub dataset: DatasetStatus,
    pub status_text: String,
    /// Uploaded file name, shown only while the server holds a dataset
    pub file_info: Option<String>,
    pub server_unreachable: bool,
    pub results: ResultsView,
    pub focus: Focus,
    in_flight: usize,
    search_seq: u64,
    schemas: SchemasConfig,
}

impl AppState {
    pub fn new(theme_mode: ThemeMode, schemas: SchemasConfig) -> Self {
        Self {
            view: ViewState {
                active_tab: DataSource::Internal,
                theme_mode,
            },
            schemas,
            ..Default::default()
        }
    }

    pub fn active_tab(&self) -> DataSource {
        self.view.active_tab
    }

    /// Busy indicator: visible while any upload, clear or search is pending
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Token of the most recently issued search
    pub fn latest_search_token(&self) -> u64 {
        self.search_seq
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::SwitchTab(target) => self.switch_tab(target),
            Action::ToggleTheme => {
                self.view.theme_mode = self.view.theme_mode.toggled();
                Vec::new()
            }

            Action::SubmitSearch { query, source } => self.search(&query, source),
            Action::SearchCompleted { token, source, result } => {
                self.release();
                if self.is_stale(token) {
                    return Vec::new();
                }
                self.results = if result.is_empty() {
                    ResultsView::NoResults
                } else {
                    ResultsView::Cards {
                        cards: build_cards(&result, self.schemas.for_source(source)),
                        total_records: result.total_records,
                    }
                };
                Vec::new()
            }
            Action::SearchRejected { token, message } => {
                self.release();
                if !self.is_stale(token) {
                    self.results = ResultsView::Error(format!("{}: {}", BANNER_SEARCH_ERROR_PREFIX, message));
                }
                Vec::new()
            }
            Action::SearchFailed { token, error } => {
                self.release();
                if !self.is_stale(token) {
                    log::warn!("Search failed: {}", error);
                    self.results =
                        ResultsView::Error(format!("{}: {}", BANNER_SEARCH_ERROR_PREFIX, BANNER_SEARCH_CONNECTION));
                }
                Vec::new()
            }

            Action::RefreshStatus => vec![Effect::RefreshStatus],
            Action::StatusLoaded(status) => {
                self.apply_status(status);
                Vec::new()
            }
            Action::StatusFailed(error) => {
                log::warn!("Status refresh failed: {}", error);
                self.status_text = STATUS_CONNECTION_ERROR.to_string();
                self.server_unreachable = true;
                Vec::new()
            }

            Action::UploadFile(path) => {
                if path.as_os_str().is_empty() {
                    return Vec::new();
                }
                self.in_flight += 1;
                vec![Effect::Upload { path }]
            }
            Action::UploadAccepted { filename, records } => {
                self.release();
                log::info!("Upload accepted: {:?} ({:?} records)", filename, records);
                let mut effects = vec![Effect::ResetFilePicker];
                effects.extend(self.switch_tab(DataSource::Excel));
                effects
            }
            Action::UploadDeclined => {
                self.release();
                log::info!("Upload declined without a message");
                vec![Effect::ResetFilePicker]
            }
            Action::UploadRejected(message) | Action::UploadFailed(message) => {
                self.release();
                vec![
                    Effect::ShowAlert(format!("{}: {}", ALERT_UPLOAD_PREFIX, message)),
                    Effect::ResetFilePicker,
                ]
            }
            Action::ClearDataset => {
                self.in_flight += 1;
                vec![Effect::Clear]
            }
            Action::ClearCompleted => {
                self.release();
                self.switch_tab(DataSource::Internal)
            }
            Action::ClearFailed(error) => {
                self.release();
                log::warn!("Clear failed: {}", error);
                vec![Effect::ShowAlert(ALERT_CLEAR_FAILED.to_string())]
            }

            Action::FlipCard(index) => {
                if let ResultsView::Cards { cards, .. } = &mut self.results {
                    if let Some(card) = cards.get_mut(index) {
                        card.flip();
                    }
                }
                Vec::new()
            }
            Action::SetFocus(focus) => {
                self.focus = focus;
                Vec::new()
            }

            _ => Vec::new(),
        }
    }

    /// Activate a tab. Always clears results and refreshes status, even when
    /// the tab is already active.
    fn switch_tab(&mut self, target: DataSource) -> Vec<Effect> {
        self.view.active_tab = target;
        self.clear_results();
        vec![Effect::RefreshStatus]
    }

    fn search(&mut self, query: &str, source: DataSource) -> Vec<Effect> {
        let query = query.trim();
        self.clear_results();
        if query.is_empty() {
            return Vec::new();
        }

        self.in_flight += 1;
        vec![Effect::Search {
            token: self.search_seq,
            query: query.to_string(),
            source,
        }]
    }

    /// Empty the result area and invalidate any search still in flight.
    fn clear_results(&mut self) {
        self.results = ResultsView::Idle;
        self.search_seq += 1;
    }

    fn is_stale(&self, token: u64) -> bool {
        if token != self.search_seq {
            log::debug!("Discarding stale search response {} (latest {})", token, self.search_seq);
            return true;
        }
        false
    }

    fn release(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn apply_status(&mut self, status: DatasetStatus) {
        self.server_unreachable = false;
        if self.view.active_tab == DataSource::Excel {
            self.status_text = if status.has_data {
                format!(
                    "{} registros cargados de {}",
                    status.record_count,
                    status.filename.as_deref().unwrap_or_default()
                )
            } else {
                STATUS_UPLOAD_PROMPT.to_string()
            };
        }
        self.file_info = if status.has_data {
            Some(status.filename.clone().unwrap_or_default())
        } else {
            None
        };
        self.dataset = status;
    }
}
