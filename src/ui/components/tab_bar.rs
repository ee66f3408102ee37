use crate::constants::{TAB_EXCEL, TAB_INTERNAL, WELCOME_TITLE};
use crate::models::DataSource;
use crate::ui::core::{Action, Component};
use crate::ui::layout::contains;
use crate::ui::theme::{Palette, DARK};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The two data-source tabs. Exactly one is active at a time.
pub struct TabBarComponent {
    pub active: DataSource,
    pub internal_records: Option<u64>,
    pub palette: &'static Palette,
    tab_areas: [Rect; 2],
}

impl Default for TabBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TabBarComponent {
    pub fn new() -> Self {
        Self {
            active: DataSource::Internal,
            internal_records: None,
            palette: &DARK,
            tab_areas: [Rect::default(); 2],
        }
    }

    pub fn update_data(&mut self, active: DataSource, internal_records: Option<u64>, palette: &'static Palette) {
        self.active = active;
        self.internal_records = internal_records;
        self.palette = palette;
    }

    pub fn label(&self, source: DataSource) -> String {
        match source {
            DataSource::Internal => match self.internal_records {
                Some(count) => format!("{} ({})", TAB_INTERNAL, count),
                None => TAB_INTERNAL.to_string(),
            },
            DataSource::Excel => TAB_EXCEL.to_string(),
        }
    }
}

impl Component for TabBarComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Tabs are switched with global keys
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        DataSource::ALL
            .iter()
            .zip(self.tab_areas.iter())
            .find(|(_, area)| contains(**area, mouse.column, mouse.row))
            .map(|(source, _)| Action::SwitchTab(*source))
            .unwrap_or(Action::None)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", WELCOME_TITLE))
            .title_style(self.palette.accent)
            .style(self.palette.base);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let halves = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(inner);

        for (i, source) in DataSource::ALL.iter().enumerate() {
            self.tab_areas[i] = halves[i];
            let key = if *source == DataSource::Internal { "F2" } else { "F3" };
            let style = if *source == self.active {
                self.palette.accent.add_modifier(Modifier::REVERSED)
            } else {
                self.palette.muted
            };
            let tab = Paragraph::new(format!("{} {}", key, self.label(*source)))
                .alignment(Alignment::Center)
                .style(style);
            f.render_widget(tab, halves[i]);
        }
    }
}
