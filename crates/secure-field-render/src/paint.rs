//! Fill and shadow styles.

use crate::types::{Color, Rect};

/// Fill rule for determining the interior of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// A point is inside if the winding number is non-zero.
    #[default]
    NonZero,
    /// A point is inside if it is crossed an odd number of times.
    ///
    /// Used for shapes with holes, such as a ring around a pupil.
    EvenOdd,
}

/// A blurred, offset copy of a shape drawn beneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow color (with alpha for transparency).
    pub color: Color,
    /// Horizontal offset in pixels. Positive moves shadow right.
    pub offset_x: f32,
    /// Vertical offset in pixels. Positive moves shadow down.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur_radius: f32,
}

impl Shadow {
    /// Create a shadow with no offset and no blur.
    #[inline]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
        }
    }

    /// A drop shadow falling straight down by half the blur radius.
    #[inline]
    pub fn drop_shadow(color: Color, blur: f32) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: blur * 0.5,
            blur_radius: blur,
        }
    }

    /// Set the offset.
    #[inline]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// The area a shadow of `rect` may touch once blurred and offset.
    pub fn expanded_bounds(&self, rect: Rect) -> Rect {
        let left = rect.left() + self.offset_x.min(0.0) - self.blur_radius;
        let top = rect.top() + self.offset_y.min(0.0) - self.blur_radius;
        let right = rect.right() + self.offset_x.max(0.0) + self.blur_radius;
        let bottom = rect.bottom() + self.offset_y.max(0.0) + self.blur_radius;
        Rect::new(left, top, right - left, bottom - top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_shadow_offsets_downward() {
        let shadow = Shadow::drop_shadow(Color::BLACK.with_alpha(0.3), 2.0);
        assert_eq!(shadow.offset_x, 0.0);
        assert_eq!(shadow.offset_y, 1.0);
        assert_eq!(shadow.blur_radius, 2.0);
    }

    #[test]
    fn test_expanded_bounds() {
        let shadow = Shadow::new(Color::BLACK).with_offset(0.0, 1.0);
        let bounds = Shadow {
            blur_radius: 2.0,
            ..shadow
        }
        .expanded_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(bounds, Rect::new(-2.0, -2.0, 14.0, 15.0));
    }
}
