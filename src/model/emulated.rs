//! In-memory climate model (no vehicle bus attached).

use log::debug;

use super::{ClimateModel, ClimateState, FieldSet, ModelOp};

/// Emulated model: mutates in-memory state only.
#[derive(Debug, Clone, Default)]
pub struct EmulatedClimate {
    state: ClimateState,
}

impl EmulatedClimate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClimateModel for EmulatedClimate {
    fn state(&self) -> &ClimateState {
        &self.state
    }

    fn apply(&mut self, op: ModelOp) -> FieldSet {
        let changed = self.state.apply(op);
        debug!("emulated: {:?} changed 0x{:06x}", op, changed.bits());
        changed
    }
}
