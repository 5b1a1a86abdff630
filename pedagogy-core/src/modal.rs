//! Detail view lifecycle.
//!
//! The modal moves through `Closed → Opening → Open → Closing → Closed`. The
//! `Opening → Open` and `Closing → Closed` edges are driven by presentation
//! timers that cannot be cancelled, so every transition bumps a generation
//! counter and the timer carries the [`Ticket`] it was started with. A timer
//! whose ticket is no longer current is ignored.

use crate::strategy::Strategy;

/// Delay before an opening modal is shown at full scale.
pub const OPEN_SETTLE_MS: u32 = 10;
/// Delay before a closing modal is removed and its media torn down.
pub const CLOSE_SETTLE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl ModalPhase {
    /// CSS modifier for the panel animation.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Closed => "is-closed",
            Self::Opening => "is-opening",
            Self::Open => "is-open",
            Self::Closing => "is-closing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Strategy currently shown plus the note being edited for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContext {
    pub strategy: Strategy,
    pub note: String,
}

impl ModalContext {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.strategy.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.strategy.title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalMachine {
    phase: ModalPhase,
    generation: u64,
    context: Option<ModalContext>,
}

impl ModalMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[must_use]
    pub const fn context(&self) -> Option<&ModalContext> {
        self.context.as_ref()
    }

    /// Ticket of the most recent transition.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    fn advance(&mut self, phase: ModalPhase) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = phase;
        self.ticket()
    }

    /// Show `strategy` with its previously saved `note`.
    ///
    /// Valid from every phase; an already visible modal is repopulated in place.
    pub fn open(&mut self, strategy: Strategy, note: String) -> Ticket {
        self.context = Some(ModalContext { strategy, note });
        self.advance(ModalPhase::Opening)
    }

    /// Finish the opening animation if `ticket` is still current.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.phase == ModalPhase::Opening && ticket == self.ticket() {
            self.phase = ModalPhase::Open;
            true
        } else {
            false
        }
    }

    /// Start closing. No-op when already closed or closing.
    pub fn close(&mut self) -> Option<Ticket> {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => Some(self.advance(ModalPhase::Closing)),
            ModalPhase::Closed | ModalPhase::Closing => None,
        }
    }

    /// Complete a close started with `ticket`, dropping the context.
    pub fn finish_close(&mut self, ticket: Ticket) -> bool {
        if self.phase == ModalPhase::Closing && ticket == self.ticket() {
            self.phase = ModalPhase::Closed;
            self.context = None;
            true
        } else {
            false
        }
    }

    /// Replace the note text; returns the id it belongs to so the caller can persist it.
    pub fn edit_note(&mut self, text: String) -> Option<&str> {
        let ctx = self.context.as_mut()?;
        ctx.note = text;
        Some(ctx.strategy.id.as_str())
    }
}
