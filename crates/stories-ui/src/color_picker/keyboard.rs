//! Keyboard policy for a focused gradient stop.

use stories_engine::input::{Key, KeyEvent};

use super::config::GradientEditorConfig;
use super::reducer::ColorAction;
use super::state::GradientState;

/// Where Enter on the selected stop inserts a new stop.
///
/// - last stop short of the end: at the end (`1`)
/// - first stop past the start: at the start (`0`)
/// - otherwise halfway to the next stop, or to the previous one for the last stop
pub fn key_add_position(state: &GradientState) -> f32 {
    let index = state.current_stop_index;
    let stop = state.stops[index];

    if state.is_last(index) && stop.position < 1.0 {
        return 1.0;
    }
    if state.is_first(index) && stop.position > 0.0 {
        return 0.0;
    }
    let neighbour = if state.is_last(index) {
        state.stops[index - 1]
    } else {
        state.stops[index + 1]
    };
    (stop.position + neighbour.position) / 2.0
}

/// Translates a key press on the selected stop into an edit.
///
/// Arrow moves are clamped so the stop never leaves `[0, 1]`; a move that
/// would not change anything yields `None`.
pub fn key_action(state: &GradientState, event: &KeyEvent, config: &GradientEditorConfig) -> Option<ColorAction> {
    match event.key {
        Key::Enter => Some(ColorAction::AddStopAt(key_add_position(state))),
        key if key.is_delete() => Some(ColorAction::RemoveCurrentStop),
        Key::ArrowLeft => clamped_move(state, -config.key_step),
        Key::ArrowRight => clamped_move(state, config.key_step),
        _ => None,
    }
}

/// Move action for `delta`, shortened so the selected stop stays in `[0, 1]`.
pub(super) fn clamped_move(state: &GradientState, delta: f32) -> Option<ColorAction> {
    let position = state.current_stop().position;
    let delta = (position + delta).clamp(0.0, 1.0) - position;
    (delta != 0.0).then_some(ColorAction::MoveCurrentStopBy(delta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stories_engine::paint::{GradientKind, Rgba, Stop};

    fn red() -> Rgba { Rgba::rgb(255, 0, 0) }
    fn green() -> Rgba { Rgba::rgb(0, 255, 0) }
    fn blue() -> Rgba { Rgba::rgb(0, 0, 255) }

    fn state(positions: &[f32], current: usize) -> GradientState {
        let colors = [red(), green(), blue(), Rgba::white()];
        let stops = positions.iter().zip(colors).map(|(p, c)| Stop::new(*p, c)).collect();
        let mut s = GradientState::new(GradientKind::Linear, stops);
        s.select_stop(current);
        s
    }

    // ── key_add_position ──────────────────────────────────────────────────

    #[test]
    fn middle_stop_adds_halfway_to_next() {
        let s = state(&[0.0, 0.2, 1.0], 1);
        assert!((key_add_position(&s) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn enter_on_middle_stop_inserts_interpolated_stop() {
        let s = state(&[0.0, 0.2, 1.0], 1);
        let action = key_action(&s, &KeyEvent::new(Key::Enter), &GradientEditorConfig::default()).unwrap();
        let next = super::super::reduce(&s, &action);
        assert_eq!(next.current_stop_index, 2);
        assert_eq!(next.current_stop().position, 0.6);
        let c = next.current_stop().color;
        assert_eq!(c.r, 0);
        assert!((127..=128).contains(&c.g) && (127..=128).contains(&c.b), "{c:?}");
    }

    #[test]
    fn first_stop_past_start_adds_at_zero() {
        let s = state(&[0.2, 0.8], 0);
        assert_eq!(key_add_position(&s), 0.0);
    }

    #[test]
    fn last_stop_short_of_end_adds_at_one() {
        let s = state(&[0.2, 0.8], 1);
        assert_eq!(key_add_position(&s), 1.0);
    }

    #[test]
    fn boundary_stops_at_ends_add_halfway() {
        let s = state(&[0.0, 1.0], 0);
        assert_eq!(key_add_position(&s), 0.5);
        let s = state(&[0.0, 0.4, 1.0], 2);
        assert_eq!(key_add_position(&s), 0.7);
    }

    // ── key_action ────────────────────────────────────────────────────────

    #[test]
    fn delete_keys_remove_current() {
        let s = state(&[0.0, 0.5, 1.0], 1);
        let config = GradientEditorConfig::default();
        for key in [Key::Delete, Key::Backspace] {
            assert_eq!(key_action(&s, &KeyEvent::new(key), &config), Some(ColorAction::RemoveCurrentStop));
        }
    }

    #[test]
    fn arrows_move_by_key_step() {
        let s = state(&[0.0, 0.5, 1.0], 1);
        let config = GradientEditorConfig::default();
        let Some(ColorAction::MoveCurrentStopBy(d)) = key_action(&s, &KeyEvent::new(Key::ArrowRight), &config) else {
            panic!("expected move");
        };
        assert!((d - 0.1).abs() < 1e-6);
        let Some(ColorAction::MoveCurrentStopBy(d)) = key_action(&s, &KeyEvent::new(Key::ArrowLeft), &config) else {
            panic!("expected move");
        };
        assert!((d + 0.1).abs() < 1e-6);
    }

    #[test]
    fn arrows_clamp_at_line_ends() {
        let config = GradientEditorConfig::default();
        let s = state(&[0.0, 0.95, 1.0], 1);
        let Some(ColorAction::MoveCurrentStopBy(d)) = key_action(&s, &KeyEvent::new(Key::ArrowRight), &config) else {
            panic!("expected move");
        };
        assert!((d - 0.05).abs() < 1e-6);

        let s = state(&[0.0, 1.0], 0);
        assert_eq!(key_action(&s, &KeyEvent::new(Key::ArrowLeft), &config), None);
    }

    #[test]
    fn unrelated_keys_do_nothing() {
        let s = state(&[0.0, 1.0], 0);
        assert_eq!(key_action(&s, &KeyEvent::new(Key::Tab), &GradientEditorConfig::default()), None);
    }
}
