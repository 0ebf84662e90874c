use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Used as the bounding box of hit targets such as the gradient line.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    /// Vertical centre line.
    #[inline]
    pub fn center_y(self) -> f32 {
        self.origin.y + self.size.y * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }

    /// Maps a page x coordinate onto the rectangle's width as a fraction.
    ///
    /// Not clamped: points left of the rectangle yield negative values, points
    /// right of it yield values above 1. Empty rectangles map everything to 0.
    #[inline]
    pub fn normalize_x(self, x: f32) -> f32 {
        if self.size.x <= 0.0 {
            0.0
        } else {
            (x - self.origin.x) / self.size.x
        }
    }

    /// Inverse of [`normalize_x`](Self::normalize_x).
    #[inline]
    pub fn denormalize_x(self, t: f32) -> f32 {
        self.origin.x + t * self.size.x
    }
}
