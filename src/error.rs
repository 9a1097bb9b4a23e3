//! Unified error type for the climate core.
//!
//! Domain arithmetic never fails and bus write failures are reported to
//! diagnostics instead of propagating, so configuration storage is the only
//! subsystem that reaches the crate boundary.  All variants are `Copy`.

use core::fmt;

use crate::app::ports::ConfigError;

/// Every fallible operation at the crate boundary funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid or could not be loaded/stored.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
