//! Keyboard focus movement inside a grid of items (swatch presets).
//!
//! Items are laid out row-major, `columns` per row. Arrow keys move focus by
//! one item horizontally or one row vertically; Home/End jump to the ends.
//! Movement is clamped to `[0, count - 1]` and never wraps.

use stories_engine::input::Key;

/// Focus index after pressing `key`, or `None` when `key` is not a
/// navigation key.
///
/// `count == 0` always yields `Some(0)` for navigation keys.
pub fn grid_step(index: usize, count: usize, columns: usize, key: Key) -> Option<usize> {
    let columns = columns.max(1) as isize;
    let delta = match key {
        Key::ArrowLeft => -1,
        Key::ArrowRight => 1,
        Key::ArrowUp => -columns,
        Key::ArrowDown => columns,
        Key::Home => return Some(0),
        Key::End => return Some(count.saturating_sub(1)),
        _ => return None,
    };
    Some(clamp_index(index as isize + delta, count))
}

/// Clamps a possibly out-of-range index into `[0, count - 1]`.
#[inline]
pub fn clamp_index(index: isize, count: usize) -> usize {
    let last = count.saturating_sub(1) as isize;
    index.clamp(0, last) as usize
}
