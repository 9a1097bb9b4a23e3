//! Port traits: the hexagonal boundary between the climate core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ClimateController (domain)
//! ```
//!
//! Driven adapters (vehicle bus, video player, navigation host, event
//! sinks, config storage) implement these traits.  The
//! [`ClimateController`](super::service::ClimateController) consumes them
//! via generics, so the domain core never touches a transport directly.

use crate::config::PanelConfig;
use crate::model::Field;

// ───────────────────────────────────────────────────────────────
// Vehicle bus port (driven adapter: domain → climate ECU)
// ───────────────────────────────────────────────────────────────

/// One write-through frame: the new value of a single model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusWrite {
    pub field: Field,
    pub signal_id: u16,
    pub value: i32,
    pub sequence: u32,
}

/// Write-side port used by the live-backend model.
pub trait VehicleBusPort {
    fn write(&mut self, frame: &BusWrite) -> Result<(), BusError>;
}

// ───────────────────────────────────────────────────────────────
// Diagnostics port (driven adapter: domain → fault collector)
// ───────────────────────────────────────────────────────────────

/// Receives failures that must never reach the command path.
pub trait DiagnosticsPort {
    fn report_bus_failure(&mut self, frame: &BusWrite, error: BusError);
}

// ───────────────────────────────────────────────────────────────
// Video player port (help-mode side channel)
// ───────────────────────────────────────────────────────────────

/// Fire-and-forget instructional video playback.
pub trait VideoPlayerPort {
    /// Start the video for `topic`.  `target_state` names the navigation
    /// state the host should show once playback ends.
    fn start_topic(&mut self, topic: &'static str, target_state: Option<&'static str>);
}

// ───────────────────────────────────────────────────────────────
// Navigation host port
// ───────────────────────────────────────────────────────────────

/// The view-layer router that actually swaps the visible sub-panel.
pub trait NavigationHostPort {
    fn go_to_state(&mut self, state_name: &'static str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → view / logging)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured
/// [`PanelEvent`](super::events::PanelEvent)s through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::PanelEvent);
}

// ───────────────────────────────────────────────────────────────
// Help-mode source (read-only view of an externally owned flag)
// ───────────────────────────────────────────────────────────────

pub trait HelpModeSource {
    fn is_active(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists panel configuration.
///
/// Implementations MUST validate before persisting and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping.
pub trait ConfigPort {
    /// Load configuration.  Returns [`PanelConfig::default()`] if nothing
    /// is stored.
    fn load(&self) -> Result<PanelConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &PanelConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`VehicleBusPort`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The bus client is not connected.
    Offline,
    /// The transmit queue is full.
    Busy,
    /// The ECU rejected the frame.
    Rejected,
    /// The write was not acknowledged in time.
    Timeout,
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Offline => write!(f, "bus offline"),
            Self::Busy => write!(f, "bus busy"),
            Self::Rejected => write!(f, "frame rejected"),
            Self::Timeout => write!(f, "write timed out"),
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
