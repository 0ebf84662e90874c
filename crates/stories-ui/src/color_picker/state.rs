use stories_engine::paint::gradient::{interpolate_color, normalize_turn, round_position};
use stories_engine::paint::{GradientKind, GradientPattern, Pattern, Point, Rgba, Size, Stop};

/// A gradient never has fewer stops than this; deletions below it are no-ops.
pub const MIN_STOPS: usize = 2;

/// Editable gradient.
///
/// Invariants:
/// - `stops.len() >= MIN_STOPS`
/// - `current_stop_index < stops.len()`
///
/// Stops stay in ascending position order after every operation except
/// transient equal positions. Selection follows the selected stop's value, not
/// its slot, when operations reorder the list.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientState {
    pub kind: GradientKind,
    pub stops: Vec<Stop>,
    pub current_stop_index: usize,
    /// In turns, `[0, 1)`.
    pub rotation: f32,
    pub center: Point,
    pub size: Size,
    pub alpha: f32,
}

impl GradientState {
    /// Creates a state from raw stops, padding to [`MIN_STOPS`] when needed.
    ///
    /// Positions are clamped to `[0, 1]` and stops sorted by position.
    pub fn new(kind: GradientKind, stops: Vec<Stop>) -> Self {
        Self {
            kind,
            stops: normalized(stops),
            current_stop_index: 0,
            rotation: 0.0,
            center: Point::CENTER,
            size: Size::FULL,
            alpha: 1.0,
        }
    }

    /// Default two-stop gradient starting at `color`, used when switching a
    /// solid fill to a gradient.
    pub fn from_color(kind: GradientKind, color: Rgba) -> Self {
        let end = if color == Rgba::white() { Rgba::black() } else { Rgba::white() };
        Self::new(kind, vec![Stop::new(0.0, color), Stop::new(1.0, end)])
    }

    /// Loads a gradient pattern. Missing parameters take their defaults.
    pub fn from_pattern(kind: GradientKind, pattern: &GradientPattern) -> Self {
        let mut state = Self::new(kind, pattern.stops.clone());
        state.rotation = pattern.rotation.map(normalize_turn).unwrap_or(0.0);
        state.center = pattern.center.unwrap_or(Point::CENTER);
        state.size = pattern.size.unwrap_or(Size::FULL);
        state.alpha = pattern.alpha.unwrap_or(1.0);
        state
    }

    /// Serializable pattern with defaults and kind-irrelevant fields dropped.
    ///
    /// Two states describing the same gradient always produce equal patterns,
    /// whatever edits led to them.
    pub fn to_pattern(&self) -> Pattern {
        let gradient = GradientPattern {
            stops: self.stops.clone(),
            rotation: self.kind.is_rotatable().then_some(self.rotation),
            center: self.kind.has_center().then_some(self.center),
            size: (self.kind == GradientKind::Radial).then_some(self.size),
            alpha: Some(self.alpha),
        };
        Pattern::gradient(self.kind, gradient.minimized())
    }

    #[inline]
    pub fn current_stop(&self) -> &Stop {
        &self.stops[self.current_stop_index]
    }

    #[inline]
    pub fn is_first(&self, index: usize) -> bool {
        index == 0
    }

    #[inline]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.stops.len()
    }

    /// Selects `index`, clamped to the stop range.
    pub fn select_stop(&mut self, index: usize) {
        self.current_stop_index = index.min(self.stops.len() - 1);
    }

    /// Inserts a stop at `position` with the color the gradient currently has
    /// there, and selects it. Returns the new stop's index.
    pub fn add_stop_at(&mut self, position: f32) -> usize {
        let color = interpolate_color(&self.stops, position).unwrap_or_default();
        let position = round_position(position);
        let index = self
            .stops
            .iter()
            .position(|s| s.position > position)
            .unwrap_or(self.stops.len());
        self.stops.insert(index, Stop::new(position, color));
        self.current_stop_index = index;
        index
    }

    /// Removes the stop at `index`. Returns false when nothing was removed.
    ///
    /// If the selected stop is removed, selection moves to the stop now in its
    /// slot, or to the new last stop when it was the last one.
    pub fn delete_stop(&mut self, index: usize) -> bool {
        if index >= self.stops.len() || self.stops.len() <= MIN_STOPS {
            return false;
        }
        self.stops.remove(index);
        if index < self.current_stop_index {
            self.current_stop_index -= 1;
        }
        self.current_stop_index = self.current_stop_index.min(self.stops.len() - 1);
        true
    }

    #[inline]
    pub fn remove_current_stop(&mut self) -> bool {
        self.delete_stop(self.current_stop_index)
    }

    /// Shifts the selected stop by `delta` (not clamped) and keeps the list
    /// ordered, moving the stop past any neighbour it crossed.
    pub fn move_current_stop_by(&mut self, delta: f32) {
        let mut i = self.current_stop_index;
        let position = round_position(self.stops[i].position + delta);
        self.stops[i].position = position;

        while i > 0 && self.stops[i - 1].position > position {
            self.stops.swap(i - 1, i);
            i -= 1;
        }
        while i + 1 < self.stops.len() && self.stops[i + 1].position < position {
            self.stops.swap(i, i + 1);
            i += 1;
        }
        self.current_stop_index = i;
    }

    /// Mirrors the gradient: reverses the list and maps `p` to `1 - p`.
    pub fn reverse_stops(&mut self) {
        self.stops.reverse();
        for stop in &mut self.stops {
            stop.position = round_position(1.0 - stop.position);
        }
        self.current_stop_index = self.stops.len() - 1 - self.current_stop_index;
    }

    /// Adds `step` turns of rotation. Radial gradients have no rotation.
    pub fn rotate_clockwise(&mut self, step: f32) {
        if self.kind.is_rotatable() {
            self.rotation = normalize_turn(self.rotation + step);
        }
    }

    pub fn set_current_color(&mut self, color: Rgba) {
        self.stops[self.current_stop_index].color = color;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

fn normalized(mut stops: Vec<Stop>) -> Vec<Stop> {
    for stop in &mut stops {
        stop.position = if stop.position.is_nan() { 0.0 } else { stop.position.clamp(0.0, 1.0) };
    }
    match stops.len() {
        0 => return vec![Stop::new(0.0, Rgba::black()), Stop::new(1.0, Rgba::white())],
        1 => {
            let only = stops[0];
            let end = if only.position < 1.0 { 1.0 } else { 0.0 };
            stops.push(Stop::new(end, only.color));
        }
        _ => {}
    }
    // Stable, so equal positions keep their input order.
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    stops
}
