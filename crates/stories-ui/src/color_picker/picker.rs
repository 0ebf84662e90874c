use std::fmt;

use stories_engine::coords::Rect;
use stories_engine::input::{Key, KeyEvent};
use stories_engine::paint::{GradientKind, Pattern, Rgba};
use stories_engine::time::{Clock, Debouncer, SystemClock};

use crate::event::{EventResult, UiEvent};
use crate::widget::Widget;

use super::config::GradientEditorConfig;
use super::line::GradientLine;
use super::reducer::{reduce, ColorAction};
use super::state::GradientState;
use super::swatches::{SwatchAction, SwatchGrid};

/// What the picker is currently editing.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerValue {
    Solid(Rgba),
    Gradient(GradientState),
}

impl PickerValue {
    pub fn from_pattern(pattern: &Pattern) -> Self {
        match pattern {
            Pattern::Solid { color } => PickerValue::Solid(*color),
            _ => match pattern.as_gradient() {
                Some((kind, g)) => PickerValue::Gradient(GradientState::from_pattern(kind, g)),
                None => PickerValue::Solid(Rgba::black()),
            },
        }
    }

    pub fn to_pattern(&self) -> Pattern {
        match self {
            PickerValue::Solid(color) => Pattern::solid(*color),
            PickerValue::Gradient(state) => state.to_pattern(),
        }
    }

    /// Color shown in the single-color editor: the solid color or the
    /// selected stop's color.
    pub fn current_color(&self) -> Rgba {
        match self {
            PickerValue::Solid(color) => *color,
            PickerValue::Gradient(state) => state.current_stop().color,
        }
    }
}

type ChangeFn = Box<dyn FnMut(&Pattern)>;
type CloseFn = Box<dyn FnMut()>;

/// Color / gradient picker.
///
/// Owns the edited value and routes host input to its widgets. Every edit
/// that changes the resulting pattern is minimized and delivered to
/// `on_change` through a leading-edge debouncer: the first change of a burst
/// is delivered at once, the last one after the quiet period on [`tick`] or
/// on the next edit, whichever comes first.
///
/// [`tick`]: ColorPicker::tick
pub struct ColorPicker<C: Clock = SystemClock> {
    value: PickerValue,
    line: GradientLine,
    swatches: SwatchGrid,
    presets: Vec<Pattern>,
    config: GradientEditorConfig,
    debouncer: Debouncer<Pattern>,
    last_pattern: Pattern,
    clock: C,
    on_change: Option<ChangeFn>,
    on_close: Option<CloseFn>,
    is_open: bool,
}

impl ColorPicker<SystemClock> {
    pub fn new(initial: &Pattern) -> Self {
        Self::with_clock(initial, GradientEditorConfig::default(), SystemClock)
    }
}

impl<C: Clock> ColorPicker<C> {
    pub fn with_clock(initial: &Pattern, config: GradientEditorConfig, clock: C) -> Self {
        let value = PickerValue::from_pattern(initial);
        Self {
            last_pattern: value.to_pattern(),
            value,
            line: GradientLine::new(config.clone()),
            swatches: SwatchGrid::default(),
            presets: default_presets(),
            debouncer: Debouncer::new(config.debounce),
            config,
            clock,
            on_change: None,
            on_close: None,
            is_open: true,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(&Pattern) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn presets(mut self, presets: Vec<Pattern>) -> Self {
        self.presets = presets;
        self
    }

    #[inline]
    pub fn value(&self) -> &PickerValue {
        &self.value
    }

    /// Current minimized pattern, regardless of what has been delivered.
    pub fn pattern(&self) -> Pattern {
        self.value.to_pattern()
    }

    /// Gradient state, or `None` while editing a solid color.
    pub fn state(&self) -> Option<&GradientState> {
        match &self.value {
            PickerValue::Gradient(state) => Some(state),
            PickerValue::Solid(_) => None,
        }
    }

    #[inline]
    pub fn line(&self) -> &GradientLine {
        &self.line
    }

    #[inline]
    pub fn swatches(&self) -> &SwatchGrid {
        &self.swatches
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Replaces the edited value without emitting a change.
    pub fn load(&mut self, pattern: &Pattern) {
        self.value = PickerValue::from_pattern(pattern);
        self.last_pattern = self.value.to_pattern();
    }

    /// Switches between solid (`None`) and gradient kinds.
    ///
    /// Solid to gradient builds a two-stop gradient from the solid color;
    /// gradient to solid keeps the selected stop's color; gradient to gradient
    /// keeps the stops.
    pub fn set_type(&mut self, kind: Option<GradientKind>) {
        let next = match (kind, &self.value) {
            (None, value) => PickerValue::Solid(value.current_color()),
            (Some(kind), PickerValue::Solid(color)) => PickerValue::Gradient(GradientState::from_color(kind, *color)),
            (Some(kind), PickerValue::Gradient(state)) => {
                let mut state = state.clone();
                state.kind = kind;
                PickerValue::Gradient(state)
            }
        };
        log::debug!("picker type -> {kind:?}");
        self.replace(next);
    }

    /// Applies an edit. Gradient-only edits are ignored while solid.
    pub fn dispatch(&mut self, action: ColorAction) {
        let next = match (&self.value, &action) {
            (PickerValue::Gradient(state), _) => PickerValue::Gradient(reduce(state, &action)),
            (PickerValue::Solid(_), ColorAction::SetCurrentColor(color)) => PickerValue::Solid(*color),
            (PickerValue::Solid(color), ColorAction::SetAlpha(a)) => PickerValue::Solid(color.with_alpha(*a)),
            (PickerValue::Solid(_), _) => {
                log::debug!("{action:?} ignored for solid color");
                return;
            }
        };
        self.replace(next);
    }

    /// Routes an event hitting the gradient line.
    pub fn handle_line_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let PickerValue::Gradient(state) = &self.value else {
            return EventResult::Ignored;
        };
        let response = self.line.on_event(state, event, rect);
        if let Some(action) = response.action {
            self.dispatch(action);
        }
        response.result
    }

    /// Routes an event hitting the preset grid.
    pub fn handle_swatch_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let response = self.swatches.on_event(&self.presets, event, rect);
        if let Some(SwatchAction::Apply(pattern)) = response.action {
            self.replace(PickerValue::from_pattern(&pattern));
        }
        response.result
    }

    /// Picker-level keys: Escape closes, the rest go to the selected stop.
    pub fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.key == Key::Escape {
            self.close();
            return EventResult::Consumed;
        }
        self.handle_line_event(&UiEvent::Key(*event), Rect::default())
    }

    /// Rotates the gradient by one configured step.
    pub fn rotate(&mut self) {
        self.dispatch(ColorAction::RotateClockwise(self.config.rotation_step));
    }

    /// Delivers a trailing change once the quiet period has elapsed.
    pub fn tick(&mut self) {
        if let Some(pattern) = self.debouncer.poll(self.clock.now()) {
            self.emit(&pattern);
        }
    }

    /// Flushes any pending change, then notifies `on_close`.
    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        if let Some(pattern) = self.debouncer.flush() {
            self.emit(&pattern);
        }
        self.is_open = false;
        if let Some(f) = self.on_close.as_mut() {
            f();
        }
    }

    fn replace(&mut self, value: PickerValue) {
        self.value = value;
        let pattern = self.value.to_pattern();
        if pattern == self.last_pattern {
            return;
        }
        self.last_pattern = pattern.clone();
        self.tick();
        if let Some(leading) = self.debouncer.push(pattern, self.clock.now()) {
            self.emit(&leading);
        }
    }

    fn emit(&mut self, pattern: &Pattern) {
        log::trace!("on_change {pattern:?}");
        if let Some(f) = self.on_change.as_mut() {
            f(pattern);
        }
    }
}

impl<C: Clock> fmt::Debug for ColorPicker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("value", &self.value)
            .field("line", &self.line)
            .field("is_open", &self.is_open)
            .field("pending", &self.debouncer.is_pending())
            .finish_non_exhaustive()
    }
}

fn default_presets() -> Vec<Pattern> {
    [
        Rgba::black(),
        Rgba::white(),
        Rgba::rgb(0xea, 0x43, 0x35),
        Rgba::rgb(0xfb, 0xbc, 0x04),
        Rgba::rgb(0x34, 0xa8, 0x53),
        Rgba::rgb(0x42, 0x85, 0xf4),
    ]
    .into_iter()
    .map(Pattern::solid)
    .collect()
}
