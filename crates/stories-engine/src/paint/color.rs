use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB color as used by story patterns.
///
/// Invariant:
/// - `r`, `g`, `b` are bytes in `0..=255`
/// - `a` is in `[0, 1]`
///
/// Serialized as `{ "r", "g", "b", "a" }`; `a` is omitted when fully opaque.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque", skip_serializing_if = "is_opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

fn is_opaque(a: &f32) -> bool {
    *a >= 1.0
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Returns a copy with alpha clamped to `[0, 1]`.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Linear interpolation in straight sRGB, channel by channel.
    ///
    /// Byte channels are rounded to the nearest integer; `t` is clamped to `[0, 1]`.
    pub fn lerp(from: Rgba, to: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(self) -> String {
        if is_opaque(&self.a) {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_midpoint_rounds_channels() {
        let c = Rgba::lerp(Rgba::rgb(255, 0, 0), Rgba::rgb(0, 0, 255), 0.5);
        assert_eq!((c.r, c.g, c.b), (128, 0, 128));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Rgba::rgb(10, 20, 30);
        let b = Rgba::rgb(200, 200, 200);
        assert_eq!(Rgba::lerp(a, b, -1.0), a);
        assert_eq!(Rgba::lerp(a, b, 2.0), b);
    }

    #[test]
    fn lerp_interpolates_alpha() {
        let c = Rgba::lerp(Rgba::new(0, 0, 0, 0.0), Rgba::new(0, 0, 0, 1.0), 0.25);
        assert!((c.a - 0.25).abs() < 1e-6);
    }

    #[test]
    fn opaque_alpha_is_omitted_from_json() {
        let json = serde_json::to_value(Rgba::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, serde_json::json!({ "r": 1, "g": 2, "b": 3 }));

        let json = serde_json::to_value(Rgba::new(1, 2, 3, 0.5)).unwrap();
        assert_eq!(json["a"], serde_json::json!(0.5));
    }

    #[test]
    fn missing_alpha_deserializes_opaque() {
        let c: Rgba = serde_json::from_str(r#"{"r":9,"g":8,"b":7}"#).unwrap();
        assert_eq!(c, Rgba::rgb(9, 8, 7));
    }

    #[test]
    fn css_notation() {
        assert_eq!(Rgba::rgb(1, 2, 3).to_css(), "rgb(1,2,3)");
        assert_eq!(Rgba::new(1, 2, 3, 0.5).to_css(), "rgba(1,2,3,0.5)");
    }
}
