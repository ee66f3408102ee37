use crate::constants::{TAB_EXCEL, TAB_INTERNAL};
use crate::models::DataSource;
use crate::ui::core::{Action, Component, Focus};
use crate::ui::theme::{Palette, DARK};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Query input. Enter submits against the active tab's data source.
pub struct SearchBarComponent {
    pub input: String,
    /// Cursor position in chars
    pub cursor: usize,
    pub source: DataSource,
    pub focused: bool,
    pub busy: bool,
    pub palette: &'static Palette,
    spinner_frame: usize,
}

impl Default for SearchBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBarComponent {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            source: DataSource::Internal,
            focused: true,
            busy: false,
            palette: &DARK,
            spinner_frame: 0,
        }
    }

    pub fn update_data(&mut self, source: DataSource, focused: bool, busy: bool, palette: &'static Palette) {
        self.source = source;
        self.focused = focused;
        self.busy = busy;
        self.palette = palette;
    }

    pub fn on_tick(&mut self) {
        if self.busy {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn insert_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.input.remove(index);
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.input.chars().count() {
            let index = self.byte_index();
            self.input.remove(index);
        }
    }
}

impl Component for SearchBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitSearch {
                query: self.input.clone(),
                source: self.source,
            },
            KeyCode::Esc => Action::SetFocus(Focus::Results),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.delete_before_cursor();
                Action::None
            }
            KeyCode::Delete => {
                self.delete_at_cursor();
                Action::None
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let target = match self.source {
            DataSource::Internal => TAB_INTERNAL,
            DataSource::Excel => TAB_EXCEL,
        };
        let border_style = if self.focused {
            self.palette.accent
        } else {
            self.palette.muted
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Buscar en {} ", target))
            .border_style(border_style)
            .style(self.palette.base);
        if self.busy {
            block = block.title(
                Line::from(Span::styled(
                    format!(" {} Buscando... ", SPINNER[self.spinner_frame]),
                    self.palette.busy,
                ))
                .alignment(Alignment::Right),
            );
        }

        let line = if self.focused {
            let split = self.byte_index();
            let (before, after) = self.input.split_at(split);
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled("█", self.palette.accent),
                Span::raw(after.to_string()),
            ])
        } else if self.input.is_empty() {
            Line::from(Span::styled("/ para escribir una búsqueda", self.palette.muted))
        } else {
            Line::from(self.input.clone())
        };

        f.render_widget(Paragraph::new(line).block(block), rect);
    }
}
