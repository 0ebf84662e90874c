use stories_engine::coords::{Rect, Vec2};
use stories_engine::input::{Key, PointerKind};
use stories_engine::paint::Pattern;

use crate::event::UiEvent;
use crate::focus::grid_step;
use crate::widget::{Response, Widget};

/// Request emitted by [`SwatchGrid`].
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchAction {
    /// Replace the picker value with this preset.
    Apply(Pattern),
}

/// Grid of preset patterns with roving keyboard focus.
///
/// Cells are square, `rect.width / columns` wide, laid out row-major from the
/// top-left corner of `rect`.
#[derive(Debug, Clone)]
pub struct SwatchGrid {
    columns: usize,
    focused: usize,
}

impl SwatchGrid {
    pub fn new(columns: usize) -> Self {
        Self { columns: columns.max(1), focused: 0 }
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Preset index under `(x, y)`.
    pub fn cell_at(&self, count: usize, rect: Rect, x: f32, y: f32) -> Option<usize> {
        if rect.is_empty() || !rect.contains(Vec2::new(x, y)) {
            return None;
        }
        let cell = rect.width() / self.columns as f32;
        let col = ((x - rect.origin.x) / cell) as usize;
        let row = ((y - rect.origin.y) / cell) as usize;
        let index = row * self.columns + col.min(self.columns - 1);
        (index < count).then_some(index)
    }

    fn apply(&self, presets: &[Pattern]) -> Response<SwatchAction> {
        match presets.get(self.focused) {
            Some(p) => Response::action(SwatchAction::Apply(p.clone())),
            None => Response::ignored(),
        }
    }
}

impl Default for SwatchGrid {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Widget for SwatchGrid {
    type Model = [Pattern];
    type Action = SwatchAction;

    fn on_event(&mut self, presets: &[Pattern], event: &UiEvent, rect: Rect) -> Response<SwatchAction> {
        match event {
            UiEvent::Key(ev) => match ev.key {
                Key::Enter | Key::Space => self.apply(presets),
                key => match grid_step(self.focused, presets.len(), self.columns, key) {
                    Some(index) => {
                        self.focused = index;
                        Response::consumed()
                    }
                    None => Response::ignored(),
                },
            },
            UiEvent::Pointer(ev) if ev.kind == PointerKind::Down => {
                match self.cell_at(presets.len(), rect, ev.x, ev.y) {
                    Some(index) => {
                        self.focused = index;
                        self.apply(presets)
                    }
                    None => Response::ignored(),
                }
            }
            UiEvent::Pointer(_) => Response::ignored(),
        }
    }
}
