//! Climate panel core library.
//!
//! Domain state, command dispatch, derived display flags and front/rear
//! navigation for a head-unit climate panel.  All view-layer and
//! vehicle-bus interaction goes through the port traits in
//! [`app::ports`]; the adapters in [`adapters`] are host-side stand-ins.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod derived;
pub mod diagnostics;
pub mod error;
pub mod fsm;
pub mod help;
pub mod model;
pub mod pulse;
pub mod queue;
pub mod ranged;

pub use error::{Error, Result};
