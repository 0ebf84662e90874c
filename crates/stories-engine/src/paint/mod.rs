//! Paint model shared between the color picker and story serialization.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes)
//! - gradient stops and parameters, default minimization
//! - patterns (solid, linear, radial, conic) and their CSS form

pub mod color;
pub mod css;
pub mod gradient;

use serde::{Deserialize, Serialize};

pub use color::Rgba;
pub use gradient::{GradientKind, GradientPattern, Point, Size, Stop};

/// Fill pattern as stored in a story.
///
/// Serialized with a `"type"` tag: `solid`, `linear`, `radial` or `conic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pattern {
    Solid { color: Rgba },
    Linear(GradientPattern),
    Radial(GradientPattern),
    Conic(GradientPattern),
}

impl Pattern {
    #[inline]
    pub fn solid(color: Rgba) -> Self {
        Pattern::Solid { color }
    }

    /// Wraps gradient parameters into the variant for `kind`.
    pub fn gradient(kind: GradientKind, gradient: GradientPattern) -> Self {
        match kind {
            GradientKind::Linear => Pattern::Linear(gradient),
            GradientKind::Radial => Pattern::Radial(gradient),
            GradientKind::Conic => Pattern::Conic(gradient),
        }
    }

    /// Gradient kind and parameters, or `None` for solid patterns.
    pub fn as_gradient(&self) -> Option<(GradientKind, &GradientPattern)> {
        match self {
            Pattern::Solid { .. } => None,
            Pattern::Linear(g) => Some((GradientKind::Linear, g)),
            Pattern::Radial(g) => Some((GradientKind::Radial, g)),
            Pattern::Conic(g) => Some((GradientKind::Conic, g)),
        }
    }

    /// Same pattern with default gradient parameters dropped.
    pub fn minimized(self) -> Self {
        match self {
            Pattern::Solid { .. } => self,
            Pattern::Linear(g) => Pattern::Linear(g.minimized()),
            Pattern::Radial(g) => Pattern::Radial(g.minimized()),
            Pattern::Conic(g) => Pattern::Conic(g.minimized()),
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Pattern::Solid { color } => color.a >= 1.0,
            _ => match self.as_gradient() {
                Some((_, g)) => {
                    g.alpha.is_none_or(|a| a >= 1.0) && g.stops.iter().all(|s| s.color.a >= 1.0)
                }
                None => false,
            },
        }
    }
}
