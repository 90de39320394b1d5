//! 2D affine transforms.
//!
//! [`Transform2D`] is a 2x3 affine matrix. [`TransformStack`] tracks the
//! current transform together with saved states for renderers that support
//! `save()`/`restore()`.
//!
//! # Example
//!
//! ```
//! use secure_field_render::{Point, Transform2D};
//!
//! // Map a 32-unit design grid into a 24px square at (100, 10).
//! let t = Transform2D::translate(100.0, 10.0).then(&Transform2D::scale(24.0 / 32.0));
//! let p = t.transform_point(Point::new(32.0, 32.0));
//! assert!((p.x - 124.0).abs() < 0.001);
//! assert!((p.y - 34.0).abs() < 0.001);
//! ```

use crate::error::{RenderError, RenderResult};
use crate::types::{Point, Rect};

/// A 2D affine transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Matrix elements in column-major order.
    m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    /// Create a uniform scaling transform.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// Create a non-uniform scaling transform.
    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Concatenate this transform with another (self * other).
    ///
    /// The resulting transform first applies `other`, then `self`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        Self {
            m: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Apply a translation to this transform.
    #[inline]
    pub fn translated(&self, tx: f32, ty: f32) -> Self {
        self.then(&Self::translate(tx, ty))
    }

    /// Apply a non-uniform scale to this transform.
    #[inline]
    pub fn scaled_xy(&self, sx: f32, sy: f32) -> Self {
        self.then(&Self::scale_xy(sx, sy))
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point::from_vec2(self.to_mat3().transform_point2(p.to_vec2()))
    }

    /// Transform a rectangle, returning the axis-aligned bounds of the result.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let corners = [
            self.transform_point(Point::new(rect.left(), rect.top())),
            self.transform_point(Point::new(rect.right(), rect.top())),
            self.transform_point(Point::new(rect.left(), rect.bottom())),
            self.transform_point(Point::new(rect.right(), rect.bottom())),
        ];
        let (mut min, mut max) = (corners[0], corners[0]);
        for c in &corners[1..] {
            min = Point::new(min.x.min(c.x), min.y.min(c.y));
            max = Point::new(max.x.max(c.x), max.y.max(c.y));
        }
        Rect::from_corners(min, max)
    }

    /// The translation component.
    #[inline]
    pub fn translation(&self) -> (f32, f32) {
        (self.m[4], self.m[5])
    }

    /// Check if this is the identity transform.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Convert to a glam 3x3 matrix.
    pub fn to_mat3(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            glam::Vec3::new(self.m[0], self.m[1], 0.0),
            glam::Vec3::new(self.m[2], self.m[3], 0.0),
            glam::Vec3::new(self.m[4], self.m[5], 1.0),
        )
    }

    /// Map a square design grid of side `grid` into `bounds`.
    ///
    /// The grid is scaled uniformly by `min(width, height) / grid` and centred
    /// in `bounds`, so non-square bounds never distort the artwork.
    pub fn fit_grid(grid: f32, bounds: Rect) -> RenderResult<Self> {
        if bounds.is_empty() || grid <= 0.0 {
            return Err(RenderError::InvalidBounds {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        let side = bounds.width().min(bounds.height());
        let scale = side / grid;
        let dx = bounds.left() + (bounds.width() - side) / 2.0;
        let dy = bounds.top() + (bounds.height() - side) / 2.0;
        Ok(Self::translate(dx, dy).then(&Self::scale(scale)))
    }
}

/// A stack of transforms for save/restore.
#[derive(Debug, Clone)]
pub struct TransformStack {
    current: Transform2D,
    stack: Vec<Transform2D>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Create a new transform stack with the identity transform.
    pub fn new() -> Self {
        Self {
            current: Transform2D::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// The current transform.
    #[inline]
    pub fn current(&self) -> &Transform2D {
        &self.current
    }

    /// Save the current transform.
    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    /// Restore the most recently saved transform.
    ///
    /// An unbalanced restore leaves the current transform unchanged.
    pub fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.current = t;
        }
    }

    /// Number of saved states.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Concatenate a transform onto the current one.
    pub fn concat(&mut self, transform: &Transform2D) {
        self.current = self.current.then(transform);
    }

    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.current = self.current.translated(tx, ty);
    }

    pub fn scale_xy(&mut self, sx: f32, sy: f32) {
        self.current = self.current.scaled_xy(sx, sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 0.001 && (a.y - b.y).abs() < 0.001
    }

    #[test]
    fn test_then_order() {
        let t = Transform2D::translate(5.0, 0.0).then(&Transform2D::scale(2.0));
        assert!(approx(t.transform_point(Point::new(1.0, 1.0)), Point::new(7.0, 2.0)));
    }

    #[test]
    fn test_mat3_matches_affine_columns() {
        let t = Transform2D::translate(3.0, -2.0).then(&Transform2D::scale_xy(2.0, 4.0));
        let m = t.to_mat3();
        assert_eq!(m.z_axis, glam::Vec3::new(3.0, -2.0, 1.0));
        assert_eq!(m.x_axis, glam::Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(m.y_axis, glam::Vec3::new(0.0, 4.0, 0.0));

        let p = t.transform_point(Point::new(1.0, 1.0));
        assert!(approx(p, Point::new(5.0, 2.0)));
        assert_eq!(Point::from_vec2(p.to_vec2()), p);
    }

    #[test]
    fn test_fit_grid_square() {
        let t = Transform2D::fit_grid(32.0, Rect::new(0.0, 0.0, 16.0, 16.0)).unwrap();
        assert!(approx(t.transform_point(Point::new(32.0, 32.0)), Point::new(16.0, 16.0)));
    }

    #[test]
    fn test_fit_grid_centres_non_square_bounds() {
        let t = Transform2D::fit_grid(32.0, Rect::new(10.0, 0.0, 64.0, 32.0)).unwrap();
        assert!(approx(t.transform_point(Point::ZERO), Point::new(26.0, 0.0)));
        assert!(approx(t.transform_point(Point::new(32.0, 32.0)), Point::new(58.0, 32.0)));
    }

    #[test]
    fn test_fit_grid_rejects_empty_bounds() {
        let err = Transform2D::fit_grid(32.0, Rect::new(0.0, 0.0, 0.0, 10.0)).unwrap_err();
        assert!(matches!(err, RenderError::InvalidBounds { .. }));
    }

    #[test]
    fn test_transform_stack() {
        let mut stack = TransformStack::new();
        stack.save();
        stack.translate(10.0, 10.0);
        assert_eq!(stack.current().translation(), (10.0, 10.0));
        stack.restore();
        assert!(stack.current().is_identity());
        stack.restore();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_transform_rect_with_scale() {
        let t = Transform2D::scale_xy(2.0, 3.0);
        let r = t.transform_rect(&Rect::new(1.0, 1.0, 2.0, 2.0));
        assert_eq!(r, Rect::new(2.0, 3.0, 4.0, 6.0));
    }
}
