//! Status bar component

use crate::models::DataSource;
use crate::ui::core::{Action, Component};
use crate::ui::theme::{Palette, DARK};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: &str = "F2/F3 pestaña • F4 tema • Ctrl+U subir • ?: ayuda";

/// One-line status bar: dataset status on the left, busy indicator and
/// shortcuts on the right.
pub struct StatusBarComponent {
    pub status_text: String,
    pub file_info: Option<String>,
    pub active_tab: DataSource,
    pub server_unreachable: bool,
    pub busy: bool,
    pub palette: &'static Palette,
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            status_text: String::new(),
            file_info: None,
            active_tab: DataSource::Internal,
            server_unreachable: false,
            busy: false,
            palette: &DARK,
        }
    }

    pub fn update_data(
        &mut self,
        status_text: &str,
        file_info: Option<&str>,
        active_tab: DataSource,
        server_unreachable: bool,
        busy: bool,
        palette: &'static Palette,
    ) {
        self.status_text = status_text.to_string();
        self.file_info = file_info.map(str::to_string);
        self.active_tab = active_tab;
        self.server_unreachable = server_unreachable;
        self.busy = busy;
        self.palette = palette;
    }

    fn status_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();
        // The status text belongs to the excel tab, except for connection errors
        if self.active_tab == DataSource::Excel || self.server_unreachable {
            let style = if self.server_unreachable {
                self.palette.error
            } else {
                self.palette.base
            };
            spans.push(Span::styled(self.status_text.as_str(), style));
        }
        if let Some(file) = &self.file_info {
            if !spans.is_empty() {
                spans.push(Span::styled(" │ ", self.palette.muted));
            }
            spans.push(Span::styled(format!("📄 {}", file), self.palette.accent));
            spans.push(Span::styled(" (Ctrl+L limpiar)", self.palette.muted));
        }
        spans
    }
}

impl Component for StatusBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [left, right] = Layout::horizontal([Constraint::Min(0), Constraint::Length(HINTS.chars().count() as u16 + 14)])
            .areas(rect);

        f.render_widget(Paragraph::new(Line::from(self.status_spans())).style(self.palette.base), left);

        let mut spans = Vec::new();
        if self.busy {
            spans.push(Span::styled("⏳ Procesando... ", self.palette.busy));
        }
        spans.push(Span::styled(HINTS, self.palette.muted));
        f.render_widget(
            Paragraph::new(Line::from(spans).right_aligned()).style(self.palette.base),
            right,
        );
    }
}
