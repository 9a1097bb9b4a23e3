//! Concrete navigation handlers and table builder.
//!
//! ```text
//!   FRONT ──[toggle]──▶ REAR
//!     ▲                   │
//!     └─────[toggle]──────┘
//! ```

use super::context::NavContext;
use super::{StateDescriptor, StateId};
use log::debug;

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Front
        StateDescriptor {
            id: StateId::Front,
            name: "front",
            on_enter: Some(front_enter),
            on_exit: Some(front_exit),
            on_toggle: front_toggle,
        },
        // Index 1: Rear
        StateDescriptor {
            id: StateId::Rear,
            name: "rear",
            on_enter: Some(rear_enter),
            on_exit: Some(rear_exit),
            on_toggle: rear_toggle,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  FRONT
// ═══════════════════════════════════════════════════════════════════════════

fn front_enter(ctx: &mut NavContext) {
    ctx.hide_front = false;
    debug!("FRONT: front controls shown");
}

fn front_exit(ctx: &mut NavContext) {
    ctx.hide_front = true;
}

fn front_toggle(_ctx: &NavContext) -> StateId {
    StateId::Rear
}

// ═══════════════════════════════════════════════════════════════════════════
//  REAR
// ═══════════════════════════════════════════════════════════════════════════

fn rear_enter(ctx: &mut NavContext) {
    ctx.hide_rear = false;
    debug!("REAR: rear controls shown");
}

fn rear_exit(ctx: &mut NavContext) {
    ctx.hide_rear = true;
}

fn rear_toggle(_ctx: &NavContext) -> StateId {
    StateId::Front
}
