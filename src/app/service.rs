//! Climate controller, the hexagonal core.
//!
//! [`ClimateController`] owns the climate model, the navigation machine,
//! the derived flags, the seat contour store and the help-mode
//! interceptor.  All I/O flows through port traits injected at call sites,
//! so the whole controller is testable with recording mocks.
//!
//! ```text
//!  UI command ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │    ClimateController     │
//!  VideoPlayer ◀──│ Help · Model · Nav · Flags│──▶ NavigationHost
//!                 └──────────────────────────┘
//! ```
//!
//! Every command is handled to completion (mutation plus flag
//! recomputation) before the call returns.

use log::{debug, info};

use crate::config::PanelConfig;
use crate::derived::DerivedFlags;
use crate::diagnostics::{FaultLog, PanelMetrics};
use crate::fsm::context::NavContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::help::HelpInterceptor;
use crate::model::seat_contour::SeatContourStore;
use crate::model::{ClimateModel, ClimateState, FieldSet, ModelOp};
use crate::pulse::AckPulse;
use crate::queue::CommandQueue;

use super::commands::ClimateCommand;
use super::events::{PanelEvent, PanelSnapshot};
use super::ports::{EventSink, HelpModeSource, NavigationHostPort, VideoPlayerPort};

// ───────────────────────────────────────────────────────────────
// ClimateController
// ───────────────────────────────────────────────────────────────

pub struct ClimateController<M: ClimateModel, H: HelpModeSource> {
    model: M,
    fsm: Fsm,
    nav: NavContext,
    flags: DerivedFlags,
    help: HelpInterceptor<H>,
    seat_contour: SeatContourStore,
    store_ack: AckPulse,
    commands_handled: u64,
}

impl<M: ClimateModel, H: HelpModeSource> ClimateController<M, H> {
    /// Construct the controller around an already selected model.
    ///
    /// Does **not** start navigation; call [`start`](Self::start) next.
    pub fn new(model: M, help: H, config: &PanelConfig) -> Self {
        let flags = DerivedFlags::new(model.state());
        Self {
            model,
            fsm: Fsm::new(build_state_table(), StateId::Front),
            nav: NavContext::new(),
            flags,
            help: HelpInterceptor::new(help),
            seat_contour: SeatContourStore::new(),
            store_ack: AckPulse::new(config.store_ack_duration_ms),
            commands_handled: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.nav);
        sink.emit(&PanelEvent::Started(self.fsm.current_state()));
        info!("ClimateController started in {:?}", self.fsm.current_state());
    }

    // ── Command handling ──────────────────────────────────────

    /// Process one UI command.
    ///
    /// The `host` parameter satisfies **both** [`VideoPlayerPort`] and
    /// [`NavigationHostPort`]; in practice they are the same view layer.
    pub fn handle_command(
        &mut self,
        cmd: ClimateCommand,
        host: &mut (impl VideoPlayerPort + NavigationHostPort),
        sink: &mut impl EventSink,
    ) {
        self.commands_handled = self.commands_handled.wrapping_add(1);

        if let Some(topic) = self.help.intercept(cmd, self.fsm.current_state()) {
            host.start_topic(topic.key, topic.target_state);
            sink.emit(&PanelEvent::VideoRequested { topic: topic.key });
            return;
        }

        match cmd {
            ClimateCommand::ToggleRear => self.toggle_rear_view(host, sink),
            ClimateCommand::RearTempAction => {
                debug!("rear temp tap ignored outside help mode");
            }
            ClimateCommand::IncSeatContour { occupant, axis } => {
                if !self.seat_contour.increase(occupant, usize::from(axis)) {
                    debug!("contour {:?}[{}] unchanged", occupant, axis);
                }
            }
            ClimateCommand::DecSeatContour { occupant, axis } => {
                if !self.seat_contour.decrease(occupant, usize::from(axis)) {
                    debug!("contour {:?}[{}] unchanged", occupant, axis);
                }
            }
            ClimateCommand::StoreMyTemp => {
                self.apply(ModelOp::StoreMyTemp, sink);
                self.store_ack.trigger();
                sink.emit(&PanelEvent::StoreAckShown);
            }
            other => {
                if let Some(op) = other.model_op() {
                    self.apply(op, sink);
                }
            }
        }
    }

    /// Handle queued commands until the queue is empty.  Returns how many
    /// were processed.
    pub fn drain(
        &mut self,
        queue: &CommandQueue,
        host: &mut (impl VideoPlayerPort + NavigationHostPort),
        sink: &mut impl EventSink,
    ) -> usize {
        let mut handled = 0;
        while let Some(cmd) = queue.pop() {
            self.handle_command(cmd, host, sink);
            handled += 1;
        }
        handled
    }

    /// Advance the acknowledgment pulse by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32, sink: &mut impl EventSink) {
        if self.store_ack.advance(elapsed_ms) {
            sink.emit(&PanelEvent::StoreAckHidden);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn navigation(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn nav_context(&self) -> &NavContext {
        &self.nav
    }

    pub fn climate(&self) -> &ClimateState {
        self.model.state()
    }

    pub fn flags(&self) -> &DerivedFlags {
        &self.flags
    }

    pub fn seat_contour(&self) -> &SeatContourStore {
        &self.seat_contour
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn help_active(&self) -> bool {
        self.help.is_active()
    }

    pub fn store_ack_visible(&self) -> bool {
        self.store_ack.is_visible()
    }

    /// Counters for the diagnostics output.  `faults` supplies the bus
    /// failure total; pass an empty log for the emulated model.
    pub fn metrics(&self, faults: &FaultLog) -> PanelMetrics {
        PanelMetrics {
            commands_handled: self.commands_handled,
            commands_intercepted: self.help.intercepted(),
            navigation_transitions: self.nav.transitions,
            bus_failures: faults.total(),
        }
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            navigation: self.fsm.current_state(),
            hide_front: self.nav.hide_front,
            hide_rear: self.nav.hide_rear,
            help_mode: self.help.is_active(),
            is_my_temp: self.flags.is_my_temp(),
            is_off: self.flags.is_off(),
            is_rear_full_cooled: self.flags.is_rear_full_cooled(),
            is_rear_full_heated: self.flags.is_rear_full_heated(),
            store_ack_visible: self.store_ack.is_visible(),
            climate: self.model.state().clone(),
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn toggle_rear_view(
        &mut self,
        host: &mut impl NavigationHostPort,
        sink: &mut impl EventSink,
    ) {
        let (from, to) = self.fsm.toggle(&mut self.nav);
        host.go_to_state(to.host_name());
        sink.emit(&PanelEvent::NavigationChanged { from, to });
    }

    /// Mutate the model and recompute dependent flags in the same step.
    fn apply(&mut self, op: ModelOp, sink: &mut impl EventSink) -> FieldSet {
        let changed = self.model.apply(op);
        if changed.is_empty() {
            return changed;
        }
        sink.emit(&PanelEvent::ModelChanged(changed));
        for change in self.flags.on_fields_changed(self.model.state(), changed) {
            sink.emit(&PanelEvent::FlagChanged {
                flag: change.flag,
                value: change.value,
            });
        }
        changed
    }
}
