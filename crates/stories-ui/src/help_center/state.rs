use std::collections::BTreeMap;

use serde::Serialize;

use super::tips::DONE_TIP_ENTRY;

/// Index value meaning "no tip selected, menu shown".
pub const MENU_INDEX: i32 = -1;

/// Help-center navigation state.
///
/// Invariants after every transition:
/// - `MENU_INDEX <= navigation_index < navigation_flow.len()`
/// - `is_prev_disabled == (navigation_index <= 0)`
/// - `is_next_disabled == (navigation_index >= navigation_flow.len() - 1)`
/// - `unread_tips_count` counts the tip keys not in `read_tips`
/// - a key in `read_tips` never leaves it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub is_open: bool,
    /// One-shot flag set by an explicit "open to this tip" request.
    pub is_opening_to_tip: bool,
    pub navigation_index: i32,
    pub navigation_flow: Vec<String>,
    pub is_left_to_right_transition: bool,
    pub has_bottom_navigation: bool,
    pub is_prev_disabled: bool,
    pub is_next_disabled: bool,
    pub read_tips: BTreeMap<String, bool>,
    pub unread_tips_count: usize,
    pub is_hydrated: bool,
    /// Sticky: set when reading or persisting read tips failed.
    pub read_error: bool,
}

/// Coarse position in the tip sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    Menu,
    ViewingTip(&'a str),
    Done,
}

impl NavigationState {
    /// Closed panel on the menu, with the default flow over `tip_keys`.
    pub fn new(tip_keys: &[String]) -> Self {
        Self {
            is_open: false,
            is_opening_to_tip: false,
            navigation_index: MENU_INDEX,
            navigation_flow: tip_keys.to_vec(),
            is_left_to_right_transition: true,
            has_bottom_navigation: false,
            is_prev_disabled: true,
            is_next_disabled: tip_keys.len() <= 1,
            read_tips: BTreeMap::new(),
            unread_tips_count: tip_keys.len(),
            is_hydrated: false,
            read_error: false,
        }
    }

    /// Flow entry at the current index, `None` on the menu.
    pub fn current_entry(&self) -> Option<&str> {
        usize::try_from(self.navigation_index)
            .ok()
            .and_then(|i| self.navigation_flow.get(i))
            .map(String::as_str)
    }

    pub fn phase(&self) -> Phase<'_> {
        match self.current_entry() {
            None => Phase::Menu,
            Some(DONE_TIP_ENTRY) => Phase::Done,
            Some(key) => Phase::ViewingTip(key),
        }
    }

    #[inline]
    pub fn is_read(&self, key: &str) -> bool {
        self.read_tips.get(key).copied().unwrap_or(false)
    }

    /// Position of `key` in the flow, or [`MENU_INDEX`] when absent.
    pub fn flow_index_of(&self, key: &str) -> i32 {
        self.navigation_flow
            .iter()
            .position(|k| k == key)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(MENU_INDEX)
    }

    /// Index of the last flow entry; `-1` for an empty flow.
    #[inline]
    pub fn last_index(&self) -> i32 {
        i32::try_from(self.navigation_flow.len()).unwrap_or(i32::MAX) - 1
    }
}
