//! Welcome curtain sequencing.
//!
//! The curtain is a one-shot overlay: it shows a greeting chosen by the local
//! hour, holds for [`WELCOME_CURTAIN_DURATION`], then starts a dismissal
//! transition. It only disappears once the transition reports completion.

use crate::constants::{
    AFTERNOON_FROM_HOUR, EVENING_FROM_HOUR, GREETING_AFTERNOON, GREETING_DEFAULT, GREETING_EVENING,
    WELCOME_CURTAIN_DURATION,
};
use chrono::Timelike;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingBand {
    Default,
    Afternoon,
    Evening,
}

impl GreetingBand {
    pub fn for_hour(hour: u32) -> Self {
        if hour >= EVENING_FROM_HOUR {
            GreetingBand::Evening
        } else if hour >= AFTERNOON_FROM_HOUR {
            GreetingBand::Afternoon
        } else {
            GreetingBand::Default
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GreetingBand::Default => GREETING_DEFAULT,
            GreetingBand::Afternoon => GREETING_AFTERNOON,
            GreetingBand::Evening => GREETING_EVENING,
        }
    }
}

/// Split a message after its leading clause: up to and including the first
/// comma or period, whichever comes first. With neither, the whole message
/// is the leading clause.
pub fn split_leading_clause(message: &str) -> (&str, &str) {
    match message.find([',', '.']) {
        // Both delimiters are one byte, so idx + 1 is a char boundary.
        Some(idx) => message.split_at(idx + 1),
        None => (message, ""),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurtainPhase {
    /// Never shown: the session arrived from authentication.
    Skipped,
    Showing,
    Dismissing,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct WelcomeSequencer {
    phase: CurtainPhase,
    band: GreetingBand,
    shown_for: Duration,
}

impl WelcomeSequencer {
    pub fn new(local_hour: u32, arrived_from_login: bool) -> Self {
        let phase = if arrived_from_login {
            CurtainPhase::Skipped
        } else {
            CurtainPhase::Showing
        };
        Self {
            phase,
            band: GreetingBand::for_hour(local_hour),
            shown_for: Duration::ZERO,
        }
    }

    /// Sequencer for the current local time.
    pub fn start(arrived_from_login: bool) -> Self {
        Self::new(chrono::Local::now().hour(), arrived_from_login)
    }

    /// Advance the hold timer. Returns true on the tick the dismissal begins.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.phase != CurtainPhase::Showing {
            return false;
        }
        self.shown_for += elapsed;
        if self.shown_for >= WELCOME_CURTAIN_DURATION {
            log::debug!("Welcome: hold elapsed, starting dismissal");
            self.phase = CurtainPhase::Dismissing;
            return true;
        }
        false
    }

    /// The dismissal transition finished. Ignored in any other phase.
    pub fn on_transition_end(&mut self) {
        if self.phase == CurtainPhase::Dismissing {
            log::debug!("Welcome: transition ended, revealing shell");
            self.phase = CurtainPhase::Hidden;
        }
    }

    pub fn phase(&self) -> CurtainPhase {
        self.phase
    }

    pub fn band(&self) -> GreetingBand {
        self.band
    }

    pub fn overlay_visible(&self) -> bool {
        matches!(self.phase, CurtainPhase::Showing | CurtainPhase::Dismissing)
    }

    /// Scrolling and input stay locked while the overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.overlay_visible()
    }

    pub fn shell_revealed(&self) -> bool {
        matches!(self.phase, CurtainPhase::Skipped | CurtainPhase::Hidden)
    }
}
