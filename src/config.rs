//! Panel configuration parameters.
//!
//! Read once at startup.  Values can be overridden through the
//! [`ConfigPort`](crate::app::ports::ConfigPort) store.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Use the in-memory climate model instead of the live CAN backend
    pub emulate_can_climate: bool,
    /// How long the "my temp stored" acknowledgment stays visible (ms)
    pub store_ack_duration_ms: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            emulate_can_climate: true,
            store_ack_duration_ms: 2000,
        }
    }
}

impl PanelConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(100..=10_000).contains(&self.store_ack_duration_ms) {
            return Err(ConfigError::ValidationFailed(
                "store_ack_duration_ms must be 100–10000",
            ));
        }
        Ok(())
    }
}
