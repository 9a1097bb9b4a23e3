//! Function-pointer navigation state machine (front / rear panel).
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │  StateTable                                           │
//! │  ┌───────┬───────────┬──────────┬──────────────────┐  │
//! │  │StateId│ on_enter  │ on_exit  │ on_toggle        │  │
//! │  ├───────┼───────────┼──────────┼──────────────────┤  │
//! │  │ Front │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->StateId │  │
//! │  │ Rear  │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->StateId │  │
//! │  └───────┴───────────┴──────────┴──────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! [`Fsm::toggle`] asks the current state's `on_toggle` for the next
//! state, then runs `on_exit` for the current state and `on_enter` for the
//! next.  The machine is bi-stable: there is no terminal state.
//!
//! Help-mode gating lives in the controller, not here; the machine itself
//! has no guard beyond the current state.

pub mod context;
pub mod states;

use context::NavContext;
use log::info;
use serde::Serialize;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Which climate sub-panel is visible.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum StateId {
    Front = 0,
    Rear = 1,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 2;

    /// Convert an index back to `StateId`.  Out-of-range falls back to
    /// `Front` (debug builds assert).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Front,
            1 => Self::Rear,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Front
            }
        }
    }

    /// Short lowercase name used in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Rear => "rear",
        }
    }

    /// Name of this state in the navigation host's router.
    pub const fn host_name(self) -> &'static str {
        match self {
            Self::Front => "climate.front",
            Self::Rear => "climate.rear",
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
pub type StateActionFn = fn(&mut NavContext);

/// Signature for the toggle handler: returns the state to move to.
pub type StateToggleFn = fn(&NavContext) -> StateId;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_toggle: StateToggleFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    /// Index of the currently visible state.
    current: usize,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
        }
    }

    /// Run the initial `on_enter`.  Call once after construction.
    pub fn start(&mut self, ctx: &mut NavContext) {
        let state = self.descriptor();
        info!("Navigation starting in state: {}", state.name);
        if let Some(enter) = state.on_enter {
            enter(ctx);
        }
    }

    /// Move to whatever the current state's toggle handler selects.
    /// Returns `(from, to)`.
    pub fn toggle(&mut self, ctx: &mut NavContext) -> (StateId, StateId) {
        let from = self.current_state();
        let next = (self.descriptor().on_toggle)(ctx);
        self.force_transition(next, ctx);
        (from, next)
    }

    /// Jump straight to `next` (no-op if already there).
    pub fn force_transition(&mut self, next: StateId, ctx: &mut NavContext) {
        if next as usize != self.current {
            self.transition(next, ctx);
        }
    }

    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    fn descriptor(&self) -> &StateDescriptor {
        &self.table[self.current]
    }

    fn transition(&mut self, next_id: StateId, ctx: &mut NavContext) {
        let next_idx = next_id as usize;

        info!(
            "Navigation: {} -> {}",
            self.descriptor().name,
            self.table[next_idx].name
        );

        if let Some(exit) = self.descriptor().on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        ctx.transitions = ctx.transitions.wrapping_add(1);

        if let Some(enter) = self.descriptor().on_enter {
            enter(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_fsm() -> (Fsm, NavContext) {
        let mut fsm = Fsm::new(states::build_state_table(), StateId::Front);
        let mut ctx = NavContext::new();
        fsm.start(&mut ctx);
        (fsm, ctx)
    }

    #[test]
    fn starts_in_front() {
        let (fsm, ctx) = make_fsm();
        assert_eq!(fsm.current_state(), StateId::Front);
        assert!(!ctx.hide_front);
        assert!(ctx.hide_rear);
    }

    #[test]
    fn toggle_from_front_goes_rear() {
        let (mut fsm, mut ctx) = make_fsm();
        assert_eq!(fsm.toggle(&mut ctx), (StateId::Front, StateId::Rear));
        assert_eq!(fsm.current_state(), StateId::Rear);
        assert!(ctx.hide_front);
        assert!(!ctx.hide_rear);
    }

    #[test]
    fn two_toggles_return_to_front() {
        let (mut fsm, mut ctx) = make_fsm();
        fsm.toggle(&mut ctx);
        assert_eq!(fsm.toggle(&mut ctx), (StateId::Rear, StateId::Front));
        assert_eq!(fsm.current_state(), StateId::Front);
        assert_eq!(ctx.transitions, 2);
    }

    #[test]
    fn force_transition_to_current_is_noop() {
        let (mut fsm, mut ctx) = make_fsm();
        fsm.force_transition(StateId::Front, &mut ctx);
        assert_eq!(ctx.transitions, 0);
    }

    #[test]
    fn state_id_from_index_roundtrip() {
        for i in 0..StateId::COUNT {
            assert_eq!(StateId::from_index(i) as usize, i);
        }
    }

    #[test]
    fn host_names() {
        assert_eq!(StateId::Front.host_name(), "climate.front");
        assert_eq!(StateId::Rear.host_name(), "climate.rear");
    }

    #[test]
    fn short_names_match_state_table() {
        for (i, row) in states::build_state_table().iter().enumerate() {
            assert_eq!(StateId::from_index(i).name(), row.name);
        }
    }
}
