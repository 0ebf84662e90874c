//! Web Stories engine crate.
//!
//! This crate owns the platform-agnostic pieces used by the editor components:
//! geometry, the paint model, input event types, timing and persisted storage.

pub mod input;
pub mod time;
pub mod storage;

pub mod logging;
pub mod coords;
pub mod paint;
