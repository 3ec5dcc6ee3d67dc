//! Member account lifecycle: registration, activation, deactivation and profile updates.
//!
//! The [`domain`] holds the `Member` aggregate and its rules. [`commands`] orchestrates it
//! against the [`ports`], which [`adapters`] implement.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
