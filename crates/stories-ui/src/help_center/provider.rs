use std::fmt;

use stories_engine::storage::{merge_write, read_or_default, Store};

use super::analytics::{LogTracker, Tracker, TrackingEvent};
use super::api::{Onboarding, UserApi};
use super::config::HelpCenterConfig;
use super::effects::{self, EffectCtx};
use super::persistence::PersistedHelpCenter;
use super::reducer::{reduce, HelpCenterAction};
use super::state::{NavigationState, Phase};
use super::tips::{Tip, TipCatalog};

/// Owns the navigation state for one editing session.
///
/// Every action runs through the reducer and the effects pipeline; the
/// provider then performs the side effects of the transition:
/// - writes `{isOpen, unreadTipsCount}` to local storage when either changed
/// - reports analytics events
/// - pushes newly read tips to the user service once hydrated
pub struct HelpCenter {
    catalog: TipCatalog,
    tip_keys: Vec<String>,
    config: HelpCenterConfig,
    state: NavigationState,
    store: Box<dyn Store>,
    api: Box<dyn UserApi>,
    tracker: Box<dyn Tracker>,
}

impl HelpCenter {
    /// Builds the initial state from what `store` holds under the configured key.
    pub fn new(
        catalog: TipCatalog,
        config: HelpCenterConfig,
        store: Box<dyn Store>,
        api: Box<dyn UserApi>,
    ) -> Self {
        let tip_keys = catalog.keys();
        let persisted: PersistedHelpCenter = read_or_default(store.as_ref(), &config.storage_key);
        let ctx = EffectCtx { tip_keys: &tip_keys, disable_quick_tips: config.disable_quick_tips };
        let state = effects::initial_state(&ctx, &persisted);
        log::debug!(
            "help center: {} tips, persisted {persisted:?}, open={}",
            tip_keys.len(),
            state.is_open
        );
        Self {
            catalog,
            tip_keys,
            config,
            state,
            store,
            api,
            tracker: Box::new(LogTracker),
        }
    }

    pub fn with_tracker(mut self, tracker: impl Tracker + 'static) -> Self {
        self.tracker = Box::new(tracker);
        self
    }

    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[inline]
    pub fn catalog(&self) -> &TipCatalog {
        &self.catalog
    }

    #[inline]
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Tip shown at the current index, if any.
    pub fn current_tip(&self) -> Option<(&str, &Tip)> {
        match self.state.phase() {
            Phase::ViewingTip(key) => self.catalog.get(key).map(|tip| (key, tip)),
            Phase::Menu | Phase::Done => None,
        }
    }

    /// Fetches read tips from the user service.
    ///
    /// Failure sets `read_error` and leaves local state alone. Not retried.
    pub fn hydrate(&mut self) {
        match self.api.current_user() {
            Ok(user) => {
                self.dispatch(HelpCenterAction::HydrateReadTipsSuccess(user.onboarding));
            }
            Err(e) => {
                log::warn!("failed to fetch read tips: {e}");
                self.dispatch(HelpCenterAction::PersistingReadTipsError);
            }
        }
    }

    /// Applies `action`. Returns `false` when the action did not apply.
    pub fn dispatch(&mut self, action: HelpCenterAction) -> bool {
        let Some(proposed) = reduce(&self.state, &action) else {
            log::trace!("{action:?} ignored");
            return false;
        };
        let ctx = EffectCtx { tip_keys: &self.tip_keys, disable_quick_tips: self.config.disable_quick_tips };
        let next = effects::apply(&ctx, &self.state, proposed);
        let prev = std::mem::replace(&mut self.state, next);
        log::trace!("{action:?}: index {} -> {}", prev.navigation_index, self.state.navigation_index);

        self.persist_local(&prev);
        self.track(&action, &prev);
        self.sync_read_tips(&action, &prev);
        true
    }

    fn persist_local(&mut self, prev: &NavigationState) {
        if prev.is_open == self.state.is_open && prev.unread_tips_count == self.state.unread_tips_count {
            return;
        }
        let blob = PersistedHelpCenter {
            is_open: self.state.is_open,
            unread_tips_count: Some(self.state.unread_tips_count),
        };
        if let Err(e) = merge_write(self.store.as_mut(), &self.config.storage_key, &blob) {
            log::warn!("failed to persist help center state: {e}");
        }
    }

    fn track(&mut self, action: &HelpCenterAction, prev: &NavigationState) {
        if matches!(action, HelpCenterAction::Toggle | HelpCenterAction::Close) {
            let status = if self.state.is_open { "open" } else { "closed" };
            self.tracker.track(TrackingEvent::HelpCenterToggled { status });
        }
        if !matches!(action, HelpCenterAction::HydrateReadTipsSuccess(_)) {
            for name in newly_read(prev, &self.state).into_keys() {
                self.tracker.track(TrackingEvent::HelpCenterReadTip { name });
            }
        }
        if prev.navigation_index < 0 && self.state.navigation_index >= 0 {
            self.tracker.track(TrackingEvent::TutorialBegin);
        }
        if self.state.phase() == Phase::Done && prev.phase() != Phase::Done {
            self.tracker.track(TrackingEvent::TutorialComplete);
        }
    }

    /// Pushes read flags the user service does not have yet.
    fn sync_read_tips(&mut self, action: &HelpCenterAction, prev: &NavigationState) {
        if !self.state.is_hydrated {
            return;
        }
        let pending: Onboarding = match action {
            // Tips read before hydration finished.
            HelpCenterAction::HydrateReadTipsSuccess(fetched) => self
                .state
                .read_tips
                .iter()
                .filter(|(k, v)| **v && !fetched.get(*k).copied().unwrap_or(false))
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
            _ => newly_read(prev, &self.state),
        };
        if pending.is_empty() {
            return;
        }
        if let Err(e) = self.api.update_onboarding(&pending) {
            log::warn!("failed to persist read tips {:?}: {e}", pending.keys().collect::<Vec<_>>());
            self.dispatch(HelpCenterAction::PersistingReadTipsError);
        }
    }
}

impl fmt::Debug for HelpCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpCenter")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn newly_read(prev: &NavigationState, next: &NavigationState) -> Onboarding {
    next.read_tips
        .iter()
        .filter(|(k, v)| **v && !prev.is_read(k))
        .map(|(k, v)| (k.clone(), *v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help_center::analytics::RecordingTracker;
    use crate::help_center::api::MemoryUserApi;
    use crate::help_center::state::MENU_INDEX;
    use serde_json::json;
    use stories_engine::storage::MemoryStore;

    const KEY: &str = "web_stories_help_center";

    fn catalog() -> TipCatalog {
        TipCatalog::new()
            .with_tip("a", Tip::new("A", &["a"]))
            .with_tip("b", Tip::new("B", &["b"]))
            .with_tip("c", Tip::new("C", &["c"]))
    }

    fn config() -> HelpCenterConfig {
        HelpCenterConfig { storage_key: KEY.to_string(), disable_quick_tips: false }
    }

    fn center(store: MemoryStore, api: MemoryUserApi) -> (HelpCenter, RecordingTracker) {
        let tracker = RecordingTracker::new();
        let hc = HelpCenter::new(catalog(), config(), Box::new(store), Box::new(api)).with_tracker(tracker.clone());
        (hc, tracker)
    }

    fn hydrated() -> (HelpCenter, RecordingTracker, MemoryUserApi) {
        let api = MemoryUserApi::default();
        let (mut hc, tracker) = center(MemoryStore::new(), api.clone());
        hc.hydrate();
        tracker.clear();
        (hc, tracker, api)
    }

    fn assert_consistent(hc: &HelpCenter) {
        let s = hc.state();
        let unread = hc.catalog().keys().iter().filter(|k| !s.is_read(k)).count();
        assert_eq!(s.unread_tips_count, unread);
        assert!(s.navigation_index >= MENU_INDEX && s.navigation_index <= s.last_index());
        assert_eq!(s.is_prev_disabled, s.navigation_index <= 0);
        assert_eq!(s.is_next_disabled, s.navigation_index >= s.last_index());
    }

    #[test]
    fn persisted_open_state_is_restored() {
        let mut store = MemoryStore::new();
        store.set(KEY, json!({ "isOpen": true, "unreadTipsCount": 2 })).unwrap();
        let (hc, _) = center(store, MemoryUserApi::default());
        assert!(hc.state().is_open);
        assert_eq!(hc.state().unread_tips_count, 2);
    }

    #[test]
    fn malformed_persisted_state_falls_back() {
        let mut store = MemoryStore::new();
        store.set(KEY, json!("garbage")).unwrap();
        let (hc, _) = center(store, MemoryUserApi::default());
        assert!(!hc.state().is_open);
        assert_eq!(hc.state().unread_tips_count, 3);
    }

    #[test]
    fn toggle_persists_and_tracks() {
        let mut store = MemoryStore::new();
        store.set(KEY, json!({ "other": 1 })).unwrap();
        let (mut hc, tracker) = center(store, MemoryUserApi::default());

        hc.dispatch(HelpCenterAction::Toggle);
        let stored = hc.store().get(KEY).unwrap().unwrap();
        assert_eq!(stored["isOpen"], true);
        assert_eq!(stored["other"], 1);
        assert_eq!(tracker.events(), vec![TrackingEvent::HelpCenterToggled { status: "open" }]);

        hc.dispatch(HelpCenterAction::Close);
        assert_eq!(hc.store().get(KEY).unwrap().unwrap()["isOpen"], false);
        assert_eq!(tracker.events()[1], TrackingEvent::HelpCenterToggled { status: "closed" });
    }

    #[test]
    fn walking_the_tutorial_tracks_begin_reads_and_completion() {
        let (mut hc, tracker, api) = hydrated();
        hc.dispatch(HelpCenterAction::Toggle);
        hc.dispatch(HelpCenterAction::GoToTip("b".into()));
        assert_eq!(hc.current_tip().map(|(k, _)| k), Some("b"));
        // b, c, then the skipped unread a, then done.
        for _ in 0..10 {
            hc.dispatch(HelpCenterAction::GoToNext);
            assert_consistent(&hc);
        }
        assert_eq!(hc.state().phase(), Phase::Done);
        assert_eq!(
            tracker.names(),
            vec![
                "help_center_toggled",
                "help_center_read_tip",
                "tutorial_begin",
                "help_center_read_tip",
                "help_center_read_tip",
                "tutorial_complete",
            ]
        );
        assert_eq!(hc.state().unread_tips_count, 0);
        assert_eq!(api.onboarding().len(), 3);
        assert_eq!(hc.store().get(KEY).unwrap().unwrap()["unreadTipsCount"], 0);
    }

    #[test]
    fn navigation_keeps_derived_fields_consistent() {
        let (mut hc, _, _) = hydrated();
        let actions = [
            HelpCenterAction::GoToPrev,
            HelpCenterAction::GoToNext,
            HelpCenterAction::GoToNext,
            HelpCenterAction::GoToMenu,
            HelpCenterAction::GoToTip("c".into()),
            HelpCenterAction::GoToPrev,
            HelpCenterAction::GoToPrev,
            HelpCenterAction::GoToPrev,
            HelpCenterAction::GoToTip("missing".into()),
            HelpCenterAction::Toggle,
        ];
        for action in actions {
            hc.dispatch(action);
            assert_consistent(&hc);
        }
    }

    #[test]
    fn read_tips_are_never_lost() {
        let (mut hc, _, _) = hydrated();
        hc.dispatch(HelpCenterAction::GoToTip("b".into()));
        hc.dispatch(HelpCenterAction::GoToPrev);
        hc.dispatch(HelpCenterAction::GoToMenu);
        hc.dispatch(HelpCenterAction::GoToTip("missing".into()));
        hc.dispatch(HelpCenterAction::GoToNext);
        hc.dispatch(HelpCenterAction::HydrateReadTipsSuccess(
            [("b".to_string(), false)].into_iter().collect(),
        ));
        assert!(hc.state().is_read("a"));
        assert!(hc.state().is_read("b"));
    }

    #[test]
    fn open_to_read_tip_changes_nothing() {
        let (mut hc, tracker, _) = hydrated();
        hc.dispatch(HelpCenterAction::GoToTip("a".into()));
        hc.dispatch(HelpCenterAction::GoToMenu);
        let before = hc.state().clone();
        tracker.clear();

        assert!(!hc.dispatch(HelpCenterAction::OpenToUnreadTip("a".into())));
        assert_eq!(hc.state(), &before);
        assert!(tracker.events().is_empty());
    }

    #[test]
    fn open_to_unread_tip_skips_the_menu() {
        let (mut hc, _, _) = hydrated();
        assert!(hc.dispatch(HelpCenterAction::OpenToUnreadTip("c".into())));
        assert!(hc.state().is_open);
        assert_eq!(hc.current_tip().map(|(k, _)| k), Some("c"));
        assert!(hc.state().is_read("c"));
    }

    #[test]
    fn hydration_merges_and_reopens_for_new_tips() {
        let mut store = MemoryStore::new();
        store.set(KEY, json!({ "isOpen": false, "unreadTipsCount": 0 })).unwrap();
        let api = MemoryUserApi::new([("a".to_string(), true)].into_iter().collect());
        let (mut hc, _) = center(store, api);
        assert!(!hc.state().is_open);

        hc.hydrate();
        let s = hc.state();
        assert!(s.is_hydrated);
        assert_eq!(s.unread_tips_count, 2);
        assert!(s.is_open);
        assert_eq!(s.navigation_index, MENU_INDEX);
    }

    #[test]
    fn tips_read_before_hydration_are_pushed_after() {
        let api = MemoryUserApi::default();
        let (mut hc, _) = center(MemoryStore::new(), api.clone());
        hc.dispatch(HelpCenterAction::GoToTip("b".into()));
        assert!(api.onboarding().is_empty());

        hc.hydrate();
        assert_eq!(api.onboarding().get("b"), Some(&true));
    }

    #[test]
    fn hydration_failure_sets_read_error_only() {
        let api = MemoryUserApi::default();
        api.set_offline(true);
        let (mut hc, _) = center(MemoryStore::new(), api);
        hc.hydrate();
        assert!(hc.state().read_error);
        assert!(!hc.state().is_hydrated);

        hc.dispatch(HelpCenterAction::GoToNext);
        assert_eq!(hc.state().navigation_index, 0);
    }

    #[test]
    fn unread_count_follows_reads_while_offline() {
        let api = MemoryUserApi::default();
        api.set_offline(true);
        let mut store = MemoryStore::new();
        store.set(KEY, json!({ "isOpen": false, "unreadTipsCount": 3 })).unwrap();
        let (mut hc, _) = center(store, api);
        hc.hydrate();
        assert!(!hc.state().is_hydrated);
        assert_consistent(&hc);

        for key in ["a", "b", "c"] {
            hc.dispatch(HelpCenterAction::GoToTip(key.into()));
            assert_consistent(&hc);
        }
        assert_eq!(hc.state().unread_tips_count, 0);
        assert_eq!(hc.store().get(KEY).unwrap().unwrap()["unreadTipsCount"], 0);
    }

    #[test]
    fn failed_read_tip_update_keeps_local_state() {
        let (mut hc, _, api) = hydrated();
        api.set_offline(true);
        hc.dispatch(HelpCenterAction::GoToTip("a".into()));
        assert!(hc.state().read_error);
        assert!(hc.state().is_read("a"));
        assert_eq!(hc.current_tip().map(|(k, _)| k), Some("a"));
    }
}
