//! Coordinate and geometry types shared by the editor components.
//!
//! Canonical space:
//! - Logical (page) pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
