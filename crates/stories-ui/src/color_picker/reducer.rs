use stories_engine::paint::Rgba;

use super::state::GradientState;

/// Every edit the gradient editor can make.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorAction {
    SelectStop(usize),
    AddStopAt(f32),
    DeleteStop(usize),
    RemoveCurrentStop,
    /// Signed normalized delta. Producers clamp so the stop stays in `[0, 1]`.
    MoveCurrentStopBy(f32),
    ReverseStops,
    /// Rotation step in turns.
    RotateClockwise(f32),
    SetCurrentColor(Rgba),
    SetAlpha(f32),
}

/// Applies `action` to a copy of `state`.
///
/// Total: every action yields a valid state; actions that cannot apply (e.g.
/// deleting below the minimum stop count) return an unchanged copy.
pub fn reduce(state: &GradientState, action: &ColorAction) -> GradientState {
    let mut next = state.clone();
    match *action {
        ColorAction::SelectStop(index) => next.select_stop(index),
        ColorAction::AddStopAt(position) => {
            next.add_stop_at(position);
        }
        ColorAction::DeleteStop(index) => {
            if !next.delete_stop(index) {
                log::debug!("delete of stop {index} ignored ({} stops)", next.stops.len());
            }
        }
        ColorAction::RemoveCurrentStop => {
            if !next.remove_current_stop() {
                log::debug!("delete of current stop ignored ({} stops)", next.stops.len());
            }
        }
        ColorAction::MoveCurrentStopBy(delta) => next.move_current_stop_by(delta),
        ColorAction::ReverseStops => next.reverse_stops(),
        ColorAction::RotateClockwise(step) => next.rotate_clockwise(step),
        ColorAction::SetCurrentColor(color) => next.set_current_color(color),
        ColorAction::SetAlpha(alpha) => next.set_alpha(alpha),
    }
    log::trace!("{action:?} -> {} stops, current {}", next.stops.len(), next.current_stop_index);
    next
}
