//! Loopback vehicle bus.
//!
//! Stands in for the climate ECU client on a bench or in the demo binary.
//! The bus itself is moved into the live model; a [`LoopbackLink`] handle
//! stays with the caller to take the link offline (exercising the
//! optimistic write-through path) and to count accepted frames.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use log::trace;

use crate::app::ports::{BusError, BusWrite, VehicleBusPort};

#[derive(Debug, Default)]
struct LinkState {
    offline: AtomicBool,
    accepted: AtomicU64,
}

/// Caller-side handle onto a [`LoopbackBus`].
#[derive(Debug, Clone)]
pub struct LoopbackLink(Arc<LinkState>);

impl LoopbackLink {
    pub fn set_offline(&self, offline: bool) {
        self.0.offline.store(offline, Ordering::Relaxed);
    }

    /// Frames the bus accepted since it was created.
    pub fn accepted(&self) -> u64 {
        self.0.accepted.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
pub struct LoopbackBus {
    link: Arc<LinkState>,
}

impl LoopbackBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(&self) -> LoopbackLink {
        LoopbackLink(Arc::clone(&self.link))
    }
}

impl VehicleBusPort for LoopbackBus {
    fn write(&mut self, frame: &BusWrite) -> Result<(), BusError> {
        if self.link.offline.load(Ordering::Relaxed) {
            return Err(BusError::Offline);
        }
        trace!("loopback: 0x{:03X} = {}", frame.signal_id, frame.value);
        self.link.accepted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
