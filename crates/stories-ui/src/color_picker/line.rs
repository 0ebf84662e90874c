use stories_engine::coords::{Rect, Vec2};
use stories_engine::input::{PointerEvent, PointerKind};

use crate::event::UiEvent;
use crate::widget::{Response, Widget};

use super::config::GradientEditorConfig;
use super::keyboard::{clamped_move, key_action};
use super::reducer::ColorAction;
use super::state::{GradientState, MIN_STOPS};

/// Pointer capture state.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Drag {
    Idle,
    /// A stop is captured; `last_x` is the pointer x of the previous event.
    Dragging { last_x: f32 },
}

/// The gradient axis with its stop handles.
///
/// Pointer behaviour:
/// - hovering the line away from any stop tracks a "ghost" stop position
/// - pressing on a stop selects and captures it; moves then stream relative
///   deltas `(x - last_x) / line width`, re-based on every event
/// - dragging further than the delete threshold away from the line removes the
///   captured stop and ends the drag; at [`MIN_STOPS`] nothing is removed and
///   the capture is kept, so the stop can be dragged back
/// - pressing on the line away from any stop commits the ghost as a new stop
/// - up or cancel releases the capture; leave clears the ghost only
///
/// Keyboard events act on the selected stop (see [`key_action`]).
#[derive(Debug, Clone)]
pub struct GradientLine {
    config: GradientEditorConfig,
    drag: Drag,
    ghost: Option<f32>,
}

impl GradientLine {
    pub fn new(config: GradientEditorConfig) -> Self {
        Self { config, drag: Drag::Idle, ghost: None }
    }

    /// Position of the temporary stop shown while hovering the line.
    #[inline]
    pub fn ghost_position(&self) -> Option<f32> {
        self.ghost
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, Drag::Dragging { .. })
    }

    /// Index of the stop handle under `(x, y)`, preferring the nearest one.
    pub fn stop_at(&self, state: &GradientState, rect: Rect, x: f32, y: f32) -> Option<usize> {
        let radius = self.config.stop_hit_radius_px;
        let half_height = rect.size.y * 0.5 + radius;
        if (y - rect.center_y()).abs() > half_height {
            return None;
        }
        state
            .stops
            .iter()
            .enumerate()
            .map(|(i, s)| (i, (rect.denormalize_x(s.position) - x).abs()))
            .filter(|(_, d)| *d <= radius)
            .min_by(|(ia, da), (ib, db)| {
                da.total_cmp(db).then_with(|| {
                    // On equal distance the selected stop wins.
                    let current = state.current_stop_index;
                    (*ib == current).cmp(&(*ia == current))
                })
            })
            .map(|(i, _)| i)
    }

    fn on_pointer(&mut self, state: &GradientState, ev: PointerEvent, rect: Rect) -> Response<ColorAction> {
        match ev.kind {
            PointerKind::Down => {
                if let Some(index) = self.stop_at(state, rect, ev.x, ev.y) {
                    self.ghost = None;
                    self.drag = Drag::Dragging { last_x: ev.x };
                    log::trace!("captured stop {index}");
                    return Response::action(ColorAction::SelectStop(index));
                }
                if rect.contains(Vec2::new(ev.x, ev.y)) {
                    self.ghost = None;
                    return Response::action(ColorAction::AddStopAt(line_position(rect, ev.x)));
                }
                Response::ignored()
            }
            PointerKind::Move => match self.drag {
                Drag::Dragging { last_x } => {
                    let off_line = (ev.y - rect.center_y()).abs() > self.config.delete_threshold_px;
                    if off_line && state.stops.len() > MIN_STOPS {
                        self.drag = Drag::Idle;
                        log::debug!("stop {} dragged off the line", state.current_stop_index);
                        return Response::action(ColorAction::DeleteStop(state.current_stop_index));
                    }
                    self.drag = Drag::Dragging { last_x: ev.x };
                    if rect.width() <= 0.0 {
                        return Response::consumed();
                    }
                    let delta = (ev.x - last_x) / rect.width();
                    match clamped_move(state, delta) {
                        Some(action) => Response::action(action),
                        None => Response::consumed(),
                    }
                }
                Drag::Idle => {
                    self.ghost = self.hover_position(state, rect, ev);
                    Response::ignored()
                }
            },
            PointerKind::Up | PointerKind::Cancel => {
                if self.is_dragging() {
                    self.drag = Drag::Idle;
                    Response::consumed()
                } else {
                    Response::ignored()
                }
            }
            PointerKind::Leave => {
                self.ghost = None;
                Response::ignored()
            }
        }
    }

    fn hover_position(&self, state: &GradientState, rect: Rect, ev: PointerEvent) -> Option<f32> {
        let over_line = rect.contains(Vec2::new(ev.x, ev.y));
        let over_stop = self.stop_at(state, rect, ev.x, ev.y).is_some();
        (over_line && !over_stop).then(|| line_position(rect, ev.x))
    }
}

impl Default for GradientLine {
    fn default() -> Self {
        Self::new(GradientEditorConfig::default())
    }
}

impl Widget for GradientLine {
    type Model = GradientState;
    type Action = ColorAction;

    fn on_event(&mut self, state: &GradientState, event: &UiEvent, rect: Rect) -> Response<ColorAction> {
        match event {
            UiEvent::Pointer(ev) => self.on_pointer(state, *ev, rect),
            UiEvent::Key(ev) => match key_action(state, ev, &self.config) {
                Some(action) => Response::action(action),
                None => Response::ignored(),
            },
        }
    }
}

#[inline]
fn line_position(rect: Rect, x: f32) -> f32 {
    rect.normalize_x(x).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_picker::reduce;
    use crate::event::EventResult;
    use stories_engine::input::Key;
    use stories_engine::paint::{GradientKind, Rgba, Stop};

    // 200px line starting at x=100, centred on y=10.
    fn rect() -> Rect { Rect::new(100.0, 0.0, 200.0, 20.0) }

    fn state(positions: &[f32]) -> GradientState {
        let stops = positions.iter().map(|p| Stop::new(*p, Rgba::rgb((p * 255.0) as u8, 0, 0))).collect();
        GradientState::new(GradientKind::Linear, stops)
    }

    /// Feeds an event and applies the resulting action.
    fn feed(line: &mut GradientLine, s: &mut GradientState, ev: UiEvent) -> EventResult {
        let resp = line.on_event(s, &ev, rect());
        if let Some(action) = resp.action {
            *s = reduce(s, &action);
        }
        resp.result
    }

    fn ptr(ev: PointerEvent) -> UiEvent { UiEvent::Pointer(ev) }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn stop_at_finds_nearest_handle() {
        let line = GradientLine::default();
        let s = state(&[0.0, 0.5, 1.0]);
        assert_eq!(line.stop_at(&s, rect(), 203.0, 10.0), Some(1));
        assert_eq!(line.stop_at(&s, rect(), 150.0, 10.0), None);
        assert_eq!(line.stop_at(&s, rect(), 200.0, 80.0), None);
    }

    #[test]
    fn stop_at_prefers_selected_on_tie() {
        let line = GradientLine::default();
        let mut s = state(&[0.5, 0.5]);
        s.select_stop(1);
        assert_eq!(line.stop_at(&s, rect(), 200.0, 10.0), Some(1));
    }

    // ── dragging ──────────────────────────────────────────────────────────

    #[test]
    fn drag_streams_relative_deltas() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 0.5, 1.0]);

        assert!(feed(&mut line, &mut s, ptr(PointerEvent::down(200.0, 10.0))).is_consumed());
        assert_eq!(s.current_stop_index, 1);
        assert!(line.is_dragging());

        feed(&mut line, &mut s, ptr(PointerEvent::moved(220.0, 10.0)));
        assert_eq!(s.current_stop().position, 0.6);
        feed(&mut line, &mut s, ptr(PointerEvent::moved(230.0, 12.0)));
        assert_eq!(s.current_stop().position, 0.65);

        feed(&mut line, &mut s, ptr(PointerEvent::up(230.0, 12.0)));
        assert!(!line.is_dragging());
    }

    #[test]
    fn drag_past_neighbour_reorders_with_selection() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 0.4, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::down(100.0, 10.0)));
        feed(&mut line, &mut s, ptr(PointerEvent::moved(220.0, 10.0)));
        let positions: Vec<f32> = s.stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.4, 0.6, 1.0]);
        assert_eq!(s.current_stop_index, 1);
    }

    #[test]
    fn drag_is_clamped_to_line_ends() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 0.5, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::down(200.0, 10.0)));
        feed(&mut line, &mut s, ptr(PointerEvent::moved(500.0, 10.0)));
        assert_eq!(s.current_stop().position, 1.0);
        // Re-based: moving back 20px from the far point moves 0.1.
        feed(&mut line, &mut s, ptr(PointerEvent::moved(480.0, 10.0)));
        assert_eq!(s.current_stop().position, 0.9);
    }

    #[test]
    fn dragging_off_the_line_deletes_the_stop() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 0.5, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::down(200.0, 10.0)));
        feed(&mut line, &mut s, ptr(PointerEvent::moved(200.0, 35.0)));
        assert_eq!(s.stops.len(), 3);
        feed(&mut line, &mut s, ptr(PointerEvent::moved(200.0, 45.0)));
        assert_eq!(s.stops.len(), 2);
        assert!(!line.is_dragging());
        // Further moves no longer edit anything.
        let before = s.clone();
        feed(&mut line, &mut s, ptr(PointerEvent::moved(120.0, 10.0)));
        assert_eq!(s, before);
    }

    #[test]
    fn dragging_off_at_minimum_keeps_the_capture() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::down(100.0, 10.0)));
        assert!(feed(&mut line, &mut s, ptr(PointerEvent::moved(100.0, 45.0))).is_consumed());
        assert_eq!(s.stops.len(), 2);
        assert!(line.is_dragging());

        feed(&mut line, &mut s, ptr(PointerEvent::moved(140.0, 10.0)));
        assert_eq!(s.current_stop().position, 0.2);
    }

    #[test]
    fn cancel_ends_drag() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::down(100.0, 10.0)));
        feed(&mut line, &mut s, ptr(PointerEvent::new(PointerKind::Cancel, 100.0, 10.0)));
        assert!(!line.is_dragging());
    }

    // ── ghost stop ────────────────────────────────────────────────────────

    #[test]
    fn hover_tracks_ghost_and_click_commits_it() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 1.0]);

        feed(&mut line, &mut s, ptr(PointerEvent::moved(150.0, 10.0)));
        assert_eq!(line.ghost_position(), Some(0.25));

        assert!(feed(&mut line, &mut s, ptr(PointerEvent::down(150.0, 10.0))).is_consumed());
        assert_eq!(line.ghost_position(), None);
        assert_eq!(s.stops.len(), 3);
        assert_eq!(s.current_stop().position, 0.25);
        assert_eq!(s.current_stop_index, 1);
    }

    #[test]
    fn hover_over_stop_hides_ghost() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 0.5, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::moved(150.0, 10.0)));
        assert!(line.ghost_position().is_some());
        feed(&mut line, &mut s, ptr(PointerEvent::moved(201.0, 10.0)));
        assert_eq!(line.ghost_position(), None);
    }

    #[test]
    fn leaving_clears_ghost_without_commit() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 1.0]);
        feed(&mut line, &mut s, ptr(PointerEvent::moved(150.0, 10.0)));
        feed(&mut line, &mut s, ptr(PointerEvent::new(PointerKind::Leave, 150.0, 40.0)));
        assert_eq!(line.ghost_position(), None);
        assert_eq!(s.stops.len(), 2);
    }

    #[test]
    fn press_outside_line_is_ignored() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 1.0]);
        assert_eq!(feed(&mut line, &mut s, ptr(PointerEvent::down(150.0, 90.0))), EventResult::Ignored);
        assert_eq!(s.stops.len(), 2);
    }

    // ── keyboard ──────────────────────────────────────────────────────────

    #[test]
    fn keys_edit_selected_stop() {
        let mut line = GradientLine::default();
        let mut s = state(&[0.0, 0.5, 1.0]);
        s.select_stop(1);
        feed(&mut line, &mut s, UiEvent::key(Key::ArrowRight));
        assert_eq!(s.current_stop().position, 0.6);
        feed(&mut line, &mut s, UiEvent::key(Key::Delete));
        assert_eq!(s.stops.len(), 2);
        assert_eq!(s.current_stop().position, 1.0);
        assert_eq!(feed(&mut line, &mut s, UiEvent::key(Key::Escape)), EventResult::Ignored);
    }
}
