//! Full-screen welcome curtain.
//!
//! Wraps a [`WelcomeSequencer`] and plays its dismissal as a short slide. The
//! sequencer is told the curtain is gone only when the slide has played its
//! last frame, through [`Action::CurtainTransitionEnd`].

use crate::constants::{CURTAIN_DISMISS_FRAMES, WELCOME_TITLE};
use crate::ui::core::{Action, Component};
use crate::ui::theme::{Palette, DARK};
use crate::welcome::{split_leading_clause, CurtainPhase, WelcomeSequencer};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

pub struct WelcomeCurtainComponent {
    sequencer: WelcomeSequencer,
    dismiss_frame: u16,
    pub palette: &'static Palette,
}

impl WelcomeCurtainComponent {
    pub fn new(sequencer: WelcomeSequencer) -> Self {
        Self {
            sequencer,
            dismiss_frame: 0,
            palette: &DARK,
        }
    }

    pub fn sequencer(&self) -> &WelcomeSequencer {
        &self.sequencer
    }

    pub fn is_visible(&self) -> bool {
        self.sequencer.overlay_visible()
    }

    /// Advance the hold timer or the dismissal slide. Returns
    /// [`Action::CurtainTransitionEnd`] on the slide's last frame.
    pub fn on_tick(&mut self, elapsed: Duration) -> Action {
        match self.sequencer.phase() {
            CurtainPhase::Showing => {
                self.sequencer.tick(elapsed);
                Action::None
            }
            CurtainPhase::Dismissing if self.dismiss_frame < CURTAIN_DISMISS_FRAMES => {
                self.dismiss_frame += 1;
                if self.dismiss_frame == CURTAIN_DISMISS_FRAMES {
                    Action::CurtainTransitionEnd
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    /// Rows the curtain has slid up by
    fn slide_offset(&self, height: u16) -> u16 {
        if self.sequencer.phase() != CurtainPhase::Dismissing {
            return 0;
        }
        (u32::from(height) * u32::from(self.dismiss_frame) / u32::from(CURTAIN_DISMISS_FRAMES)) as u16
    }
}

impl Component for WelcomeCurtainComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Input is swallowed while the curtain is up
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::CurtainTransitionEnd => {
                self.sequencer.on_transition_end();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let height = rect.height.saturating_sub(self.slide_offset(rect.height));
        if height == 0 {
            return;
        }
        let area = Rect::new(rect.x, rect.y, rect.width, height);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(self.palette.accent)
            .style(self.palette.base);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (lead, rest) = split_leading_clause(self.sequencer.band().message());
        let text = vec![
            Line::from(Span::styled(WELCOME_TITLE, self.palette.accent.add_modifier(Modifier::BOLD))),
            Line::default(),
            Line::from(vec![
                Span::styled(lead, self.palette.base.add_modifier(Modifier::BOLD)),
                Span::styled(rest, self.palette.muted),
            ]),
        ];

        let [_, body, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(6), Constraint::Fill(1)]).areas(inner);
        let [_, body, _] = Layout::horizontal([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .areas(body);

        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            body,
        );
    }
}
