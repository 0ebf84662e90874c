//! Input subsystem.
//!
//! Public API is platform-agnostic. Hosts translate their native keyboard and
//! pointer events into these types before routing them to components.

mod types;

pub use types::{Key, KeyEvent, Modifiers, PointerEvent, PointerKind};
