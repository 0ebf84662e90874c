//! Time subsystem.
//!
//! Provides testable timing utilities without coupling to an event loop:
//! - [`Clock`] abstracts "now" so components can be driven by a manual clock
//! - [`Debouncer`] rate-limits emissions with leading-edge semantics

mod clock;
mod debounce;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
