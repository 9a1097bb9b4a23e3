//! Transient acknowledgment pulse ("my temp stored").
//!
//! Visible from [`AckPulse::trigger`] until `duration_ms` of
//! [`AckPulse::advance`] time has elapsed.  Triggering again while visible
//! restarts the countdown.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AckPulse {
    duration_ms: u32,
    remaining_ms: Option<u32>,
}

impl AckPulse {
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            remaining_ms: None,
        }
    }

    /// Show (or restart) the pulse.  Returns `true` if it was hidden
    /// before.
    pub fn trigger(&mut self) -> bool {
        let was_hidden = self.remaining_ms.is_none();
        self.remaining_ms = Some(self.duration_ms);
        was_hidden
    }

    /// Advance by `elapsed_ms`.  Returns `true` exactly once, on the call
    /// that expires the pulse.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(left) if left <= elapsed_ms => {
                self.remaining_ms = None;
                true
            }
            Some(left) => {
                self.remaining_ms = Some(left - elapsed_ms);
                false
            }
            None => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.remaining_ms.is_some()
    }
}
