//! Gradient stop editor.
//!
//! Data flows one way:
//!
//! 1. Host input reaches a widget ([`GradientLine`] for stops, [`SwatchGrid`]
//!    for presets) as a [`crate::event::UiEvent`].
//! 2. The widget answers with a [`ColorAction`].
//! 3. [`reduce`] applies the action to the [`GradientState`].
//! 4. [`ColorPicker`] turns the new state into a minimized
//!    [`stories_engine::paint::Pattern`] and pushes it through a leading-edge
//!    debouncer to `on_change`.

mod config;
mod keyboard;
mod line;
mod picker;
mod reducer;
mod state;
mod swatches;

pub use config::GradientEditorConfig;
pub use keyboard::{key_action, key_add_position};
pub use line::GradientLine;
pub use picker::{ColorPicker, PickerValue};
pub use reducer::{reduce, ColorAction};
pub use state::{GradientState, MIN_STOPS};
pub use swatches::{SwatchAction, SwatchGrid};
