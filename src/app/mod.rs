//! Application core: pure panel logic, zero I/O.
//!
//! This module contains the business rules of the climate panel: command
//! dispatch, help-mode interception and navigation orchestration.  All
//! interaction with the view layer and the vehicle bus happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a head unit.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
