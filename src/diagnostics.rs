//! Backend fault log and runtime metrics.
//!
//! Bus write failures from the live-backend model land here instead of in
//! the command path.  The last 8 failures are kept in a ring; older
//! entries are overwritten, but the lifetime total keeps counting.
//!
//! [`PanelMetrics`] is an on-demand snapshot for diagnostics output.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use serde::Serialize;

use crate::app::ports::{BusError, BusWrite, DiagnosticsPort};
use crate::model::Field;

const FAULT_RING_SLOTS: usize = 8;

/// One failed write-through frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault {
    pub field: Field,
    pub signal_id: u16,
    pub sequence: u32,
    pub error: BusError,
}

/// Ring buffer of recent bus faults.
#[derive(Debug, Default)]
pub struct FaultLog {
    entries: heapless::Deque<BusFault, FAULT_RING_SLOTS>,
    total: u64,
}

impl FaultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fault, evicting the oldest one when the ring is full.
    pub fn record(&mut self, fault: BusFault) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // room was made above
        let _ = self.entries.push_back(fault);
        self.total = self.total.wrapping_add(1);
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &BusFault> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&BusFault> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Faults recorded since startup, including evicted ones.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl DiagnosticsPort for FaultLog {
    fn report_bus_failure(&mut self, frame: &BusWrite, error: BusError) {
        debug!(
            "DIAG | bus write #{} ({:?}, signal 0x{:03X}) failed: {}",
            frame.sequence, frame.field, frame.signal_id, error
        );
        self.record(BusFault {
            field: frame.field,
            signal_id: frame.signal_id,
            sequence: frame.sequence,
            error,
        });
    }
}

/// Shared handle so the host can inspect the log after handing it to the
/// model.
impl DiagnosticsPort for Arc<Mutex<FaultLog>> {
    fn report_bus_failure(&mut self, frame: &BusWrite, error: BusError) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .report_bus_failure(frame, error);
    }
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Counters reported by the diagnostics output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PanelMetrics {
    /// Commands that reached dispatch (intercepted ones included).
    pub commands_handled: u64,
    /// Commands diverted to help videos.
    pub commands_intercepted: u64,
    /// Navigation transitions since startup.
    pub navigation_transitions: u64,
    /// Bus write failures since startup.
    pub bus_failures: u64,
}
