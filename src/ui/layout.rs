//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Card box height in rows, borders included
pub const CARD_HEIGHT: u16 = 7;
/// Narrowest card before the grid drops a column
pub const CARD_MIN_WIDTH: u16 = 28;
pub const CARD_MAX_COLUMNS: u16 = 4;

/// Screen areas of the main shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellAreas {
    pub tabs: Rect,
    pub search: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Tabs on top, then the search field, the results grid and a one-line status bar
    #[must_use]
    pub fn shell_layout(area: Rect) -> ShellAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        ShellAreas {
            tabs: chunks[0],
            search: chunks[1],
            results: chunks[2],
            status: chunks[3],
        }
    }

    /// Number of card columns that fit in `width`
    #[must_use]
    pub fn card_columns(width: u16) -> u16 {
        (width / CARD_MIN_WIDTH).clamp(1, CARD_MAX_COLUMNS)
    }

    /// Rectangles for the visible cards, starting at card row `first_row`.
    /// Entry `i` belongs to card `first_row * columns + i`.
    #[must_use]
    pub fn card_grid(area: Rect, card_count: usize, first_row: usize) -> Vec<Rect> {
        let columns = Self::card_columns(area.width) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let card_width = area.width / columns as u16;

        let first = first_row * columns;
        let last = card_count.min(first + visible_rows * columns);

        (first..last)
            .map(|index| {
                let slot = index - first;
                let row = (slot / columns) as u16;
                let column = (slot % columns) as u16;
                Rect::new(
                    area.x + column * card_width,
                    area.y + row * CARD_HEIGHT,
                    card_width,
                    CARD_HEIGHT.min(area.height.saturating_sub(row * CARD_HEIGHT)),
                )
            })
            .collect()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

/// True when the point lies inside the rectangle
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
