//! Web Stories UI components on top of `stories-engine`.
//!
//! Two independent components live here:
//!
//! - [`color_picker`]: the gradient stop editor. A [`color_picker::GradientState`]
//!   is edited through [`color_picker::ColorAction`]s produced by pointer and
//!   keyboard input on the [`color_picker::GradientLine`]; the
//!   [`color_picker::ColorPicker`] owns the state and reports minimized
//!   patterns through a debounced `on_change` callback.
//! - [`help_center`]: the quick-tips navigator. A
//!   [`help_center::NavigationState`] is advanced by
//!   [`help_center::HelpCenterAction`]s and an ordered pipeline of pure effects;
//!   the [`help_center::HelpCenter`] provider adds persistence, hydration of read
//!   tips and analytics.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stories_ui::prelude::*;
//!
//! let mut picker = ColorPicker::new(&pattern)
//!     .on_change(|p| println!("{}", serde_json::to_string(p).unwrap()));
//!
//! // Route host input to the gradient line:
//! picker.handle_line_event(&UiEvent::Pointer(PointerEvent::down(x, y)), line_rect);
//! // Once per loop iteration, deliver trailing debounced changes:
//! picker.tick();
//! ```

pub mod color_picker;
pub mod event;
pub mod focus;
pub mod help_center;
pub mod widget;

/// Everything a host needs to embed the components.
pub mod prelude {
    pub use crate::color_picker::{
        ColorAction, ColorPicker, GradientEditorConfig, GradientLine, GradientState, SwatchGrid,
    };
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::help_center::{
        HelpCenter, HelpCenterAction, HelpCenterConfig, NavigationState, TipCatalog, Tracker,
        TrackingEvent, UserApi,
    };
    pub use crate::widget::{Response, Widget};

    pub use stories_engine::coords::{Rect, Vec2};
    pub use stories_engine::input::{Key, KeyEvent, Modifiers, PointerEvent, PointerKind};
    pub use stories_engine::paint::{GradientKind, GradientPattern, Pattern, Rgba, Stop};
}
