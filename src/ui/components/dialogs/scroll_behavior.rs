use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

/// Scroll position of a dialog's text body. The renderer clamps the offset
/// to the content, so scrolling past the end is harmless.
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl DialogScroll {
    pub fn up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE_LINES));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE_LINES));
    }

    pub fn top(&mut self) {
        self.set(0);
    }

    pub fn bottom(&mut self) {
        self.set(usize::MAX);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }
}
