//! Mock adapters for integration tests.
//!
//! Record every port call so tests can assert on the full history without
//! a view layer or a vehicle bus.

use std::cell::RefCell;
use std::rc::Rc;

use climate_core::app::events::PanelEvent;
use climate_core::app::ports::{
    BusError, BusWrite, EventSink, NavigationHostPort, VehicleBusPort, VideoPlayerPort,
};

// ── View host ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    StartTopic {
        topic: &'static str,
        target_state: Option<&'static str>,
    },
    GoToState(&'static str),
}

#[derive(Default)]
pub struct MockHost {
    pub calls: Vec<HostCall>,
}

#[allow(dead_code)]
impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn videos(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::StartTopic { topic, .. } => Some(*topic),
                HostCall::GoToState(_) => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<&'static str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::GoToState(state) => Some(*state),
                HostCall::StartTopic { .. } => None,
            })
            .collect()
    }
}

impl VideoPlayerPort for MockHost {
    fn start_topic(&mut self, topic: &'static str, target_state: Option<&'static str>) {
        self.calls.push(HostCall::StartTopic {
            topic,
            target_state,
        });
    }
}

impl NavigationHostPort for MockHost {
    fn go_to_state(&mut self, state_name: &'static str) {
        self.calls.push(HostCall::GoToState(state_name));
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<PanelEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&PanelEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &PanelEvent) {
        self.events.push(event.clone());
    }
}

// ── Vehicle bus ───────────────────────────────────────────────

/// Bus whose frames and link state stay visible to the test after the
/// model takes ownership.
#[derive(Clone, Default)]
pub struct SharedBus {
    pub frames: Rc<RefCell<Vec<BusWrite>>>,
    pub fail_with: Rc<RefCell<Option<BusError>>>,
}

#[allow(dead_code)]
impl SharedBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, error: Option<BusError>) {
        *self.fail_with.borrow_mut() = error;
    }

    pub fn frames(&self) -> Vec<BusWrite> {
        self.frames.borrow().clone()
    }
}

impl VehicleBusPort for SharedBus {
    fn write(&mut self, frame: &BusWrite) -> Result<(), BusError> {
        if let Some(e) = *self.fail_with.borrow() {
            return Err(e);
        }
        self.frames.borrow_mut().push(*frame);
        Ok(())
    }
}
