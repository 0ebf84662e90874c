use super::api::Onboarding;
use super::state::{NavigationState, MENU_INDEX};

/// Every transition the help center accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum HelpCenterAction {
    GoToNext,
    GoToPrev,
    GoToMenu,
    /// Unknown keys land on the menu.
    GoToTip(String),
    /// Opens straight to `key` unless it has been read already.
    OpenToUnreadTip(String),
    Toggle,
    Close,
    /// Read flags fetched from the user service. Local flags win on conflict.
    HydrateReadTipsSuccess(Onboarding),
    PersistingReadTipsError,
}

/// Proposed next state for `action`, before derived fields are recomputed.
///
/// `None` means the action does not apply and the state stays as it is.
pub fn reduce(state: &NavigationState, action: &HelpCenterAction) -> Option<NavigationState> {
    let mut next = state.clone();
    match action {
        HelpCenterAction::GoToNext => next.navigation_index = step(state, 1)?,
        HelpCenterAction::GoToPrev => next.navigation_index = step(state, -1)?,
        HelpCenterAction::GoToMenu => next.navigation_index = MENU_INDEX,
        HelpCenterAction::GoToTip(key) => next.navigation_index = state.flow_index_of(key),
        HelpCenterAction::OpenToUnreadTip(key) => {
            if state.is_read(key) {
                return None;
            }
            next.is_open = true;
            next.is_opening_to_tip = true;
            next.navigation_index = state.flow_index_of(key);
        }
        HelpCenterAction::Toggle => next.is_open = !state.is_open,
        HelpCenterAction::Close => next.is_open = false,
        HelpCenterAction::HydrateReadTipsSuccess(fetched) => {
            let mut read_tips = fetched.clone();
            read_tips.extend(state.read_tips.iter().map(|(k, v)| (k.clone(), *v)));
            next.read_tips = read_tips;
            next.is_hydrated = true;
        }
        HelpCenterAction::PersistingReadTipsError => next.read_error = true,
    }
    Some(next)
}

/// `navigation_index + delta` clamped to the flow; `None` for an empty flow.
fn step(state: &NavigationState, delta: i32) -> Option<i32> {
    let last = state.last_index();
    (last >= 0).then(|| (state.navigation_index + delta).clamp(0, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavigationState {
        let keys: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        NavigationState::new(&keys)
    }

    #[test]
    fn next_and_prev_clamp_to_flow() {
        let mut s = state();
        for _ in 0..5 {
            s = reduce(&s, &HelpCenterAction::GoToNext).unwrap();
            assert!(s.navigation_index <= s.last_index());
        }
        assert_eq!(s.navigation_index, 2);
        for _ in 0..5 {
            s = reduce(&s, &HelpCenterAction::GoToPrev).unwrap();
            assert!(s.navigation_index >= 0);
        }
        assert_eq!(s.navigation_index, 0);
    }

    #[test]
    fn prev_from_menu_enters_first_tip() {
        let s = reduce(&state(), &HelpCenterAction::GoToPrev).unwrap();
        assert_eq!(s.navigation_index, 0);
    }

    #[test]
    fn empty_flow_ignores_stepping() {
        let s = NavigationState::new(&[]);
        assert_eq!(reduce(&s, &HelpCenterAction::GoToNext), None);
        assert_eq!(reduce(&s, &HelpCenterAction::GoToPrev), None);
    }

    #[test]
    fn go_to_unknown_tip_is_menu() {
        let s = reduce(&state(), &HelpCenterAction::GoToTip("b".into())).unwrap();
        assert_eq!(s.navigation_index, 1);
        let s = reduce(&s, &HelpCenterAction::GoToTip("nope".into())).unwrap();
        assert_eq!(s.navigation_index, MENU_INDEX);
    }

    #[test]
    fn open_to_read_tip_is_noop() {
        let mut s = state();
        s.read_tips.insert("b".into(), true);
        assert_eq!(reduce(&s, &HelpCenterAction::OpenToUnreadTip("b".into())), None);

        let opened = reduce(&s, &HelpCenterAction::OpenToUnreadTip("c".into())).unwrap();
        assert!(opened.is_open && opened.is_opening_to_tip);
        assert_eq!(opened.navigation_index, 2);
    }

    #[test]
    fn hydration_keeps_local_flags() {
        let mut s = state();
        s.read_tips.insert("a".into(), true);
        let fetched: Onboarding = [("a".to_string(), false), ("b".to_string(), true)].into_iter().collect();
        let s = reduce(&s, &HelpCenterAction::HydrateReadTipsSuccess(fetched)).unwrap();
        assert!(s.is_read("a") && s.is_read("b"));
        assert!(s.is_hydrated);
    }

    #[test]
    fn toggle_and_close() {
        let s = reduce(&state(), &HelpCenterAction::Toggle).unwrap();
        assert!(s.is_open);
        let s = reduce(&s, &HelpCenterAction::Close).unwrap();
        assert!(!s.is_open);
        let s = reduce(&s, &HelpCenterAction::PersistingReadTipsError).unwrap();
        assert!(s.read_error);
    }
}
