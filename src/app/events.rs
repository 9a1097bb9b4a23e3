//! Outbound panel events.
//!
//! The [`ClimateController`](super::service::ClimateController) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  The view layer
//! on the other side re-reads whatever the event names.

use serde::Serialize;

use crate::derived::FlagId;
use crate::fsm::StateId;
use crate::model::{ClimateState, FieldSet};

/// Structured events emitted by the climate core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The controller has started (carries initial navigation state).
    Started(StateId),

    /// The visible sub-panel changed.
    NavigationChanged { from: StateId, to: StateId },

    /// One or more model fields changed.
    ModelChanged(FieldSet),

    /// A derived flag flipped.
    FlagChanged { flag: FlagId, value: bool },

    /// Help mode diverted a command to this video topic.
    VideoRequested { topic: &'static str },

    /// "My temp stored" acknowledgment became visible.
    StoreAckShown,

    /// The acknowledgment pulse expired.
    StoreAckHidden,
}

/// Point-in-time view of everything the panel renders.
#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    pub navigation: StateId,
    pub hide_front: bool,
    pub hide_rear: bool,
    pub help_mode: bool,
    pub is_my_temp: bool,
    pub is_off: bool,
    pub is_rear_full_cooled: bool,
    pub is_rear_full_heated: bool,
    pub store_ack_visible: bool,
    pub climate: ClimateState,
}
