//! Derived-state pipeline.
//!
//! Each effect is a pure function of the previous state and the proposed next
//! state. [`apply`] folds the proposal through [`EFFECTS`] in order, so every
//! effect sees the output of the one before it.

use super::persistence::PersistedHelpCenter;
use super::state::{NavigationState, MENU_INDEX};
use super::tips::DONE_TIP_ENTRY;

/// Inputs the effects need besides the two states.
#[derive(Debug, Clone, Copy)]
pub struct EffectCtx<'a> {
    /// All known tip keys, in catalog order.
    pub tip_keys: &'a [String],
    /// Suppresses auto-opening after hydration.
    pub disable_quick_tips: bool,
}

pub type Effect = fn(&EffectCtx<'_>, &NavigationState, NavigationState) -> NavigationState;

pub const EFFECTS: [Effect; 9] = [
    reset_navigation_index_on_open,
    create_dynamic_navigation_flow,
    derive_bottom_navigation,
    derive_transition_direction,
    derive_disabled_buttons,
    derive_read_tip,
    derive_unread_tips_count,
    derive_auto_open,
    reset_is_opening_to_tip,
];

pub fn apply(ctx: &EffectCtx<'_>, prev: &NavigationState, next: NavigationState) -> NavigationState {
    EFFECTS.iter().fold(next, |next, effect| effect(ctx, prev, next))
}

/// Builds the state a provider starts from, seeded with what was persisted.
pub fn initial_state(ctx: &EffectCtx<'_>, persisted: &PersistedHelpCenter) -> NavigationState {
    let state = NavigationState::new(ctx.tip_keys);
    let state = derive_initial_unread_tips_count(persisted, state);
    derive_initial_open(persisted, state)
}

/// Opening normally always lands on the menu.
pub fn reset_navigation_index_on_open(
    _: &EffectCtx<'_>,
    prev: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    if !prev.is_open && next.is_open && !next.is_opening_to_tip {
        next.navigation_index = MENU_INDEX;
    }
    next
}

/// Entering a tip from the menu rebuilds the flow: every tip, then the unread
/// tips before the entered one, then the done entry.
pub fn create_dynamic_navigation_flow(
    ctx: &EffectCtx<'_>,
    prev: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    if prev.navigation_index >= 0 || next.navigation_index < 0 {
        return next;
    }
    let entered = usize::try_from(next.navigation_index).unwrap_or(0).min(ctx.tip_keys.len());
    let skipped_unread = ctx.tip_keys[..entered].iter().filter(|k| !next.is_read(k)).cloned();

    let mut flow: Vec<String> = ctx.tip_keys.to_vec();
    flow.extend(skipped_unread);
    flow.push(DONE_TIP_ENTRY.to_string());
    log::trace!("navigation flow rebuilt: {flow:?}");
    next.navigation_flow = flow;
    next
}

pub fn derive_bottom_navigation(
    _: &EffectCtx<'_>,
    _: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    next.has_bottom_navigation = next.navigation_index >= 0;
    next
}

pub fn derive_transition_direction(
    _: &EffectCtx<'_>,
    prev: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    next.is_left_to_right_transition =
        next.navigation_index >= 0 && next.navigation_index - prev.navigation_index > 0;
    next
}

pub fn derive_disabled_buttons(
    _: &EffectCtx<'_>,
    _: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    next.is_prev_disabled = next.navigation_index <= 0;
    next.is_next_disabled = next.navigation_index >= next.last_index();
    next
}

/// Viewing a tip marks it read. Never un-reads.
pub fn derive_read_tip(
    ctx: &EffectCtx<'_>,
    _: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    let key = next
        .current_entry()
        .filter(|key| ctx.tip_keys.iter().any(|k| k.as_str() == *key))
        .map(str::to_string);
    if let Some(key) = key {
        next.read_tips.insert(key, true);
    }
    next
}

/// Recounts unread tips against the read tips known so far. Runs on every
/// transition, hydrated or not, so the count never drifts from `read_tips`.
pub fn derive_unread_tips_count(
    ctx: &EffectCtx<'_>,
    _: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    next.unread_tips_count = ctx.tip_keys.iter().filter(|k| !next.is_read(k)).count();
    next
}

/// Hydration revealing more unread tips than assumed opens the panel.
pub fn derive_auto_open(
    ctx: &EffectCtx<'_>,
    prev: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    if ctx.disable_quick_tips || prev.is_hydrated || !next.is_hydrated {
        return next;
    }
    if next.unread_tips_count > prev.unread_tips_count {
        log::debug!(
            "{} unread tips after hydration (was {}); opening",
            next.unread_tips_count,
            prev.unread_tips_count
        );
        next.is_open = true;
    }
    next
}

pub fn reset_is_opening_to_tip(
    _: &EffectCtx<'_>,
    prev: &NavigationState,
    mut next: NavigationState,
) -> NavigationState {
    if prev.is_opening_to_tip {
        next.is_opening_to_tip = false;
    }
    next
}

pub fn derive_initial_unread_tips_count(
    persisted: &PersistedHelpCenter,
    mut state: NavigationState,
) -> NavigationState {
    if let Some(count) = persisted.unread_tips_count {
        state.unread_tips_count = count;
    }
    state
}

/// A persisted open panel only reopens when something is left to read.
pub fn derive_initial_open(persisted: &PersistedHelpCenter, mut state: NavigationState) -> NavigationState {
    state.is_open = persisted.is_open && state.unread_tips_count > 0;
    state
}
