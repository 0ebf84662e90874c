//! CSS rendering of patterns, as used for swatch previews and exports.

use super::{GradientKind, GradientPattern, Pattern, Point, Rgba, Size};

/// Linear gradients in stories point "down" at rotation 0, which CSS spells
/// as half a turn.
const LINEAR_TURN_OFFSET: f32 = 0.5;

/// CSS `background` value for `pattern`.
pub fn to_css(pattern: &Pattern) -> String {
    match pattern {
        Pattern::Solid { color } => color.to_css(),
        Pattern::Linear(g) => gradient_css(GradientKind::Linear, g),
        Pattern::Radial(g) => gradient_css(GradientKind::Radial, g),
        Pattern::Conic(g) => gradient_css(GradientKind::Conic, g),
    }
}

fn gradient_css(kind: GradientKind, g: &GradientPattern) -> String {
    let alpha = g.alpha.unwrap_or(1.0);
    let stops = g
        .stops
        .iter()
        .map(|s| {
            let color = Rgba { a: s.color.a * alpha, ..s.color };
            format!("{} {}%", color.to_css(), num(s.position * 100.0))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let rotation = g.rotation.unwrap_or(0.0);
    let center = g.center.unwrap_or(Point::CENTER);
    match kind {
        GradientKind::Linear => {
            let turn = (rotation + LINEAR_TURN_OFFSET).rem_euclid(1.0);
            format!("linear-gradient({}turn, {stops})", num(turn))
        }
        GradientKind::Radial => {
            let size = g.size.unwrap_or(Size::FULL);
            format!(
                "radial-gradient({}% {}% at {}% {}%, {stops})",
                num(size.w * 50.0),
                num(size.h * 50.0),
                num(center.x * 100.0),
                num(center.y * 100.0),
            )
        }
        GradientKind::Conic => format!(
            "conic-gradient(from {}turn at {}% {}%, {stops})",
            num(rotation),
            num(center.x * 100.0),
            num(center.y * 100.0),
        ),
    }
}

/// Formats with at most two decimals and no trailing zeros.
fn num(v: f32) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    format!("{}", rounded + 0.0)
}
