//! Modal dialog component.
//!
//! Hosts the upload path input, blocking alerts, the help screen and the logs
//! viewer. While a dialog is open it receives every key.

use crate::ui::components::dialogs::{system_dialogs, DialogScroll};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::theme::{Palette, DARK};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::VecDeque;
use std::path::PathBuf;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    /// Alerts raised while another alert is still waiting for acknowledgement
    pending_alerts: VecDeque<String>,
    /// Dialog covered by the current alert, restored once the alerts are gone
    underneath: Option<DialogType>,
    /// Upload path. Kept after submission until [`Self::reset_upload_input`].
    pub input_buffer: String,
    pub logs: Vec<String>,
    pub palette: &'static Palette,
    scroll: DialogScroll,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            pending_alerts: VecDeque::new(),
            underneath: None,
            input_buffer: String::new(),
            logs: Vec::new(),
            palette: &DARK,
            scroll: DialogScroll::default(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn set_palette(&mut self, palette: &'static Palette) {
        self.palette = palette;
    }

    /// Snapshot of the log lines shown by the logs dialog
    pub fn update_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    /// Forget the chosen path so the same file can be picked again
    pub fn reset_upload_input(&mut self) {
        self.input_buffer.clear();
    }

    /// Raise a blocking alert. Alerts never replace one another: a second
    /// alert waits until the first is acknowledged.
    pub fn push_alert(&mut self, message: String) {
        match self.dialog_type.take() {
            Some(DialogType::Alert(current)) => {
                self.dialog_type = Some(DialogType::Alert(current));
                self.pending_alerts.push_back(message);
            }
            covered => {
                if covered.is_some() {
                    self.underneath = covered;
                }
                self.scroll.reset();
                self.dialog_type = Some(DialogType::Alert(message));
            }
        }
    }

    pub fn pending_alert_count(&self) -> usize {
        self.pending_alerts.len()
    }

    fn close(&mut self) {
        self.scroll.reset();
        if !matches!(self.dialog_type, Some(DialogType::Alert(_))) {
            self.dialog_type = None;
            return;
        }
        self.dialog_type = match self.pending_alerts.pop_front() {
            Some(next) => Some(DialogType::Alert(next)),
            None => self.underneath.take(),
        };
    }

    fn handle_upload_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                let path = self.input_buffer.trim();
                if path.is_empty() {
                    return Action::None;
                }
                let path = PathBuf::from(path);
                self.close();
                Action::UploadFile(path)
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.input_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if self.dialog_type == Some(DialogType::Help) => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll.up();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll.down();
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll.page_up();
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                Action::None
            }
            KeyCode::Home => {
                self.scroll.top();
                Action::None
            }
            KeyCode::End => {
                self.scroll.bottom();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Upload) => self.handle_upload_keys(key),
            // Alerts only go away when acknowledged
            Some(DialogType::Alert(_)) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Help) | Some(DialogType::Logs) => self.handle_scroll_keys(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(DialogType::Alert(message)) => {
                self.push_alert(message);
                Action::None
            }
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.close();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.palette;
        match &self.dialog_type {
            None => {}
            Some(DialogType::Upload) => system_dialogs::render_upload_dialog(f, rect, &self.input_buffer, palette),
            Some(DialogType::Alert(message)) => system_dialogs::render_alert_dialog(f, rect, message, palette),
            Some(DialogType::Help) => system_dialogs::render_help_dialog(f, rect, &mut self.scroll, palette),
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(f, rect, &self.logs, &mut self.scroll, palette)
            }
        }
    }
}
