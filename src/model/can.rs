//! Live-backend climate model.
//!
//! Applies every operation to the in-memory state first, then forwards one
//! [`BusWrite`] per changed field to the [`VehicleBusPort`].
//!
//! ```text
//!   apply(op) ──▶ ClimateState ──▶ changed fields ──▶ VehicleBusPort
//!                                                        │ Err
//!                                                        ▼
//!                                                  DiagnosticsPort
//! ```
//!
//! State is optimistic: a failed write is reported to diagnostics and
//! logged, never rolled back and never returned to the caller.

use log::{debug, warn};

use super::{ClimateModel, ClimateState, Field, FieldSet, ModelOp};
use crate::app::ports::{BusWrite, DiagnosticsPort, VehicleBusPort};

/// Base identifier of the climate signal block on the bus.
const SIGNAL_BASE_ID: u16 = 0x3A0;

/// Bus signal identifier for a model field.
pub const fn signal_id(field: Field) -> u16 {
    SIGNAL_BASE_ID + field as u16
}

/// Write-through model backed by a vehicle bus client.
pub struct CanClimate<B: VehicleBusPort, D: DiagnosticsPort> {
    state: ClimateState,
    bus: B,
    diagnostics: D,
    /// Sequence number of the next bus write (wraps).
    sequence: u32,
}

impl<B: VehicleBusPort, D: DiagnosticsPort> CanClimate<B, D> {
    pub fn new(bus: B, diagnostics: D) -> Self {
        Self {
            state: ClimateState::default(),
            bus,
            diagnostics,
            sequence: 0,
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Forward every changed field to the bus.
    fn write_through(&mut self, changed: FieldSet) {
        for field in changed.iter() {
            let frame = BusWrite {
                field,
                signal_id: signal_id(field),
                value: self.state.field_value(field),
                sequence: self.sequence,
            };
            self.sequence = self.sequence.wrapping_add(1);

            match self.bus.write(&frame) {
                Ok(()) => debug!(
                    "bus: 0x{:03x} <- {} (seq {})",
                    frame.signal_id, frame.value, frame.sequence
                ),
                Err(e) => {
                    warn!(
                        "bus write failed for {:?} (0x{:03x}): {}; keeping local state",
                        field, frame.signal_id, e
                    );
                    self.diagnostics.report_bus_failure(&frame, e);
                }
            }
        }
    }
}

impl<B: VehicleBusPort, D: DiagnosticsPort> ClimateModel for CanClimate<B, D> {
    fn state(&self) -> &ClimateState {
        &self.state
    }

    fn apply(&mut self, op: ModelOp) -> FieldSet {
        let changed = self.state.apply(op);
        self.write_through(changed);
        changed
    }
}
