use std::time::Duration;

use stories_engine::time::Debouncer;

/// Tuning knobs for the gradient editor.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientEditorConfig {
    /// Quiet period of the `on_change` debouncer.
    pub debounce: Duration,
    /// Perpendicular drag distance (px) past which a dragged stop is deleted.
    pub delete_threshold_px: f32,
    /// Position change per arrow key press, in normalized line units.
    pub key_step: f32,
    /// Rotation added per clockwise rotation, in turns.
    pub rotation_step: f32,
    /// Horizontal distance (px) from a stop's centre that still hits it.
    pub stop_hit_radius_px: f32,
}

impl Default for GradientEditorConfig {
    fn default() -> Self {
        Self {
            debounce: Debouncer::<()>::FAST,
            delete_threshold_px: 30.0,
            key_step: 0.1,
            rotation_step: 0.25,
            stop_hit_radius_px: 8.0,
        }
    }
}
