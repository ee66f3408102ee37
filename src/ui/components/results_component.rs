//! Result area: a grid of flip cards, or a banner.
//!
//! Flip state lives in the cards themselves (see [`crate::cards::Card`]); this
//! component only tracks which card is selected and how far the grid is
//! scrolled.

use crate::cards::Card;
use crate::ui::core::{Action, Component, Focus, ResultsView};
use crate::ui::layout::{contains, LayoutManager, CARD_HEIGHT};
use crate::ui::theme::{Palette, DARK};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct ResultsComponent {
    pub view: ResultsView,
    pub selected: usize,
    pub first_row: usize,
    pub focused: bool,
    pub scroll_locked: bool,
    pub palette: &'static Palette,
    columns: usize,
    visible_rows: usize,
    card_areas: Vec<(usize, Rect)>,
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self {
            view: ResultsView::Idle,
            selected: 0,
            first_row: 0,
            focused: false,
            scroll_locked: false,
            palette: &DARK,
            columns: 1,
            visible_rows: 1,
            card_areas: Vec::new(),
        }
    }

    pub fn update_data(&mut self, view: ResultsView, focused: bool, scroll_locked: bool, palette: &'static Palette) {
        let card_count = view.cards().len();
        if card_count == 0 {
            self.selected = 0;
            self.first_row = 0;
        } else if self.selected >= card_count {
            self.selected = card_count - 1;
        }
        self.view = view;
        self.focused = focused;
        self.scroll_locked = scroll_locked;
        self.palette = palette;
    }

    fn card_count(&self) -> usize {
        self.view.cards().len()
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }

    fn scroll_rows(&mut self, delta: isize) {
        if self.scroll_locked {
            return;
        }
        let total_rows = self.card_count().div_ceil(self.columns.max(1));
        let max_first = total_rows.saturating_sub(self.visible_rows);
        self.first_row = (self.first_row as isize + delta).clamp(0, max_first as isize) as usize;
    }

    /// Keep the selected card inside the visible rows
    fn ensure_selected_visible(&mut self) {
        let row = self.selected / self.columns.max(1);
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + self.visible_rows {
            self.first_row = row + 1 - self.visible_rows;
        }
    }

    fn card_widget<'a>(&self, index: usize, card: &'a Card) -> Paragraph<'a> {
        let palette = self.palette;
        let selected = self.focused && index == self.selected;
        let border_style = if selected { palette.accent } else { palette.muted };

        let (face, lines) = if card.flipped {
            let lines: Vec<Line> = card
                .back
                .iter()
                .map(|field| {
                    let value_style = if field.highlighted {
                        palette.highlight
                    } else {
                        palette.card_back
                    };
                    Line::from(vec![
                        Span::styled(format!("{} ", field.label), palette.muted),
                        Span::styled(field.value.as_str(), value_style),
                    ])
                })
                .collect();
            ("reverso", lines)
        } else {
            let mut lines = vec![Line::from(Span::styled(
                card.title.as_str(),
                palette.card_front.add_modifier(Modifier::BOLD),
            ))];
            for subtitle in [&card.subtitle_1, &card.subtitle_2].into_iter().flatten() {
                lines.push(Line::from(Span::styled(subtitle.as_str(), palette.muted)));
            }
            ("", lines)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style);
        if !face.is_empty() {
            block = block.title(Line::from(Span::styled(format!(" {} ", face), palette.muted)).alignment(Alignment::Right));
        }

        Paragraph::new(lines)
            .block(block)
            .style(if card.flipped { palette.card_back } else { palette.card_front })
            .wrap(Wrap { trim: true })
    }
}

impl Component for ResultsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let columns = self.columns.max(1) as isize;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-columns),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(columns),
            KeyCode::PageUp => self.scroll_rows(-(self.visible_rows as isize)),
            KeyCode::PageDown => self.scroll_rows(self.visible_rows as isize),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.card_count() > 0 {
                    return Action::FlipCard(self.selected);
                }
            }
            KeyCode::Char('/') | KeyCode::Char('i') => return Action::SetFocus(Focus::SearchInput),
            _ => {}
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .card_areas
                    .iter()
                    .find(|(_, area)| contains(*area, mouse.column, mouse.row))
                    .map(|(index, _)| *index);
                if let Some(index) = hit {
                    self.selected = index;
                    return Action::FlipCard(index);
                }
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_rows(1);
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.scroll_rows(-1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = match &self.view {
            ResultsView::Cards {
                cards,
                total_records: Some(total),
            } => format!(" Resultados: {} de {} registros ", cards.len(), total),
            ResultsView::Cards { cards, .. } => format!(" Resultados: {} ", cards.len()),
            _ => " Resultados ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if self.focused { self.palette.accent } else { self.palette.muted })
            .style(self.palette.base);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        self.card_areas.clear();

        if let Some(banner) = self.view.banner() {
            let style = if matches!(self.view, ResultsView::Error(_)) {
                self.palette.error
            } else {
                self.palette.muted
            };
            let paragraph = Paragraph::new(banner)
                .style(style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 2));
            return;
        }

        let count = self.card_count();
        if count == 0 {
            return;
        }

        self.columns = LayoutManager::card_columns(inner.width) as usize;
        self.visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
        self.ensure_selected_visible();

        let areas = LayoutManager::card_grid(inner, count, self.first_row);
        let first = self.first_row * self.columns;
        let cards = self.view.cards();
        for (offset, area) in areas.into_iter().enumerate() {
            let index = first + offset;
            if let Some(card) = cards.get(index) {
                f.render_widget(self.card_widget(index, card), area);
                self.card_areas.push((index, area));
            }
        }
    }
}
