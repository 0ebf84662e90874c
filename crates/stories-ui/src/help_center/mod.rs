//! Quick-tips help center.
//!
//! [`NavigationState`] moves through three phases: the menu (index `-1`), a
//! tip, and the closing "done" entry of a dynamically built flow. Actions go
//! through [`reduce`], then through the ordered effects in [`effects`], which
//! recompute every derived field. [`HelpCenter`] owns the state and performs
//! persistence, hydration and analytics.

mod analytics;
mod api;
mod config;
pub mod effects;
mod persistence;
mod provider;
mod reducer;
mod state;
mod tips;

pub use analytics::{LogTracker, RecordingTracker, Tracker, TrackingEvent};
pub use api::{ApiError, CurrentUser, MemoryUserApi, Onboarding, StoreUserApi, UserApi};
pub use config::{HelpCenterConfig, DEFAULT_STORAGE_KEY};
pub use effects::EffectCtx;
pub use persistence::PersistedHelpCenter;
pub use provider::HelpCenter;
pub use reducer::{reduce, HelpCenterAction};
pub use state::{NavigationState, Phase, MENU_INDEX};
pub use tips::{Tip, TipCatalog, DONE_TIP_ENTRY};
