use serde::{Deserialize, Serialize};

use super::Rgba;

/// Tolerance used when comparing pattern parameters against their defaults.
const DEFAULT_EPSILON: f32 = 1e-4;

/// Number of decimal digits kept on stop positions.
const POSITION_SCALE: f32 = 10_000.0;

/// Gradient geometry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    /// Linear and conic gradients carry a rotation; radial ones do not.
    #[inline]
    pub fn is_rotatable(self) -> bool {
        matches!(self, GradientKind::Linear | GradientKind::Conic)
    }

    /// Radial and conic gradients carry a center.
    #[inline]
    pub fn has_center(self) -> bool {
        matches!(self, GradientKind::Radial | GradientKind::Conic)
    }
}

/// A single gradient stop.
///
/// `position` is expected in `[0, 1]`. Duplicate positions are legal.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub color: Rgba,
    pub position: f32,
}

impl Stop {
    #[inline]
    pub const fn new(position: f32, color: Rgba) -> Self {
        Self { color, position }
    }
}

/// Normalized point, used for gradient centers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const CENTER: Point = Point { x: 0.5, y: 0.5 };
}

/// Normalized size, used for radial gradient extents.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const FULL: Size = Size { w: 1.0, h: 1.0 };
}

/// Gradient parameters shared by every gradient kind.
///
/// Optional fields are omitted from the serialized form when absent; use
/// [`minimized`](Self::minimized) to drop values equal to their defaults.
/// `rotation` is expressed in turns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GradientPattern {
    pub stops: Vec<Stop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

impl GradientPattern {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops, ..Default::default() }
    }

    /// Drops every parameter equal to its default.
    ///
    /// - rotation: `0` turn (modulo one full turn)
    /// - center: `{0.5, 0.5}`
    /// - size: `{1, 1}`
    /// - alpha: `1`
    ///
    /// Non-default rotations are normalized into `[0, 1)`.
    pub fn minimized(mut self) -> Self {
        self.rotation = self.rotation.map(normalize_turn).filter(|r| !near(*r, 0.0));
        self.center = self
            .center
            .filter(|c| !(near(c.x, Point::CENTER.x) && near(c.y, Point::CENTER.y)));
        self.size = self
            .size
            .filter(|s| !(near(s.w, Size::FULL.w) && near(s.h, Size::FULL.h)));
        self.alpha = self.alpha.filter(|a| !near(*a, 1.0));
        self
    }

    /// Returns true when there are at least two stops and every stop position
    /// and parameter is finite.
    pub fn is_valid(&self) -> bool {
        self.stops.len() >= 2
            && self.stops.iter().all(|s| s.position.is_finite() && s.color.a.is_finite())
            && self.rotation.is_none_or(f32::is_finite)
            && self.alpha.is_none_or(f32::is_finite)
    }
}

/// Rounds a stop position to four decimal digits.
///
/// Repeated relative nudges (pointer deltas, arrow keys) otherwise accumulate
/// floating point noise in persisted patterns.
#[inline]
pub fn round_position(position: f32) -> f32 {
    (position * POSITION_SCALE).round() / POSITION_SCALE
}

/// Wraps a rotation into `[0, 1)` turns.
#[inline]
pub fn normalize_turn(turns: f32) -> f32 {
    let r = turns.rem_euclid(1.0);
    if near(r, 1.0) { 0.0 } else { r }
}

/// Color at `position` along the gradient axis.
///
/// Stops are considered in position order regardless of their order in the
/// slice. Positions at or beyond either end copy the nearest boundary stop.
/// Returns `None` for an empty slice.
pub fn interpolate_color(stops: &[Stop], position: f32) -> Option<Rgba> {
    let mut sorted: Vec<Stop> = stops.to_vec();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));

    let first = *sorted.first()?;
    let last = *sorted.last()?;

    if position <= first.position {
        return Some(first.color);
    }
    if position >= last.position {
        return Some(last.color);
    }

    let upper = sorted.iter().position(|s| s.position >= position)?;
    let after = sorted[upper];
    let before = sorted[upper - 1];

    let span = after.position - before.position;
    if span <= f32::EPSILON {
        return Some(after.color);
    }
    let t = (position - before.position) / span;
    Some(Rgba::lerp(before.color, after.color, t))
}

#[inline]
fn near(a: f32, b: f32) -> bool {
    (a - b).abs() < DEFAULT_EPSILON
}
