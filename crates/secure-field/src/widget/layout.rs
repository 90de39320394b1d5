//! Anchor constraints for positioning a child inside its parent.
//!
//! A child is placed by anchoring its edges or centre lines to the parent's,
//! optionally with a fixed height and a fixed aspect ratio. Leading and
//! trailing edges follow the parent's [`LayoutDirection`].
//!
//! ```
//! use secure_field::widget::{Anchor, AnchorConstraints, AnchorLine, LayoutDirection};
//! use secure_field_render::Rect;
//!
//! // A 24px square pinned 4px from the trailing edge, vertically centred.
//! let constraints = AnchorConstraints::new()
//!     .with_anchor(Anchor::to_parent(AnchorLine::Trailing, 4.0))
//!     .with_anchor(Anchor::to_parent(AnchorLine::VerticalCenter, 0.0))
//!     .with_fixed_height(24.0)
//!     .with_aspect_ratio(1.0);
//!
//! let rect = constraints.resolve(Rect::new(0.0, 0.0, 200.0, 30.0), LayoutDirection::LeftToRight);
//! assert_eq!(rect, Rect::new(172.0, 3.0, 24.0, 24.0));
//! ```

use secure_field_render::Rect;

use super::geometry::LayoutDirection;

/// Anchor lines available on each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorLine {
    /// Left edge in left-to-right layouts, right edge in right-to-left.
    Leading,
    /// Right edge in left-to-right layouts, left edge in right-to-left.
    Trailing,
    Top,
    Bottom,
    HorizontalCenter,
    VerticalCenter,
}

impl AnchorLine {
    /// Check if this is a horizontal anchor line.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(
            self,
            AnchorLine::Leading | AnchorLine::Trailing | AnchorLine::HorizontalCenter
        )
    }
}

/// An anchor binding one of the child's lines to the same line of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub line: AnchorLine,
    /// Inset from the parent line. Positive values move inward for edges and
    /// down/toward trailing for centre lines.
    pub margin: f32,
}

impl Anchor {
    pub fn to_parent(line: AnchorLine, margin: f32) -> Self {
        Self { line, margin }
    }
}

/// A set of anchors plus size constraints for one child item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorConstraints {
    anchors: Vec<Anchor>,
    fixed_height: Option<f32>,
    fixed_width: Option<f32>,
    aspect_ratio: Option<f32>,
}

impl AnchorConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an anchor. A later anchor on the same line replaces the earlier one.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchors.retain(|a| a.line != anchor.line);
        self.anchors.push(anchor);
        self
    }

    pub fn with_fixed_height(mut self, height: f32) -> Self {
        self.fixed_height = Some(height);
        self
    }

    pub fn with_fixed_width(mut self, width: f32) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Constrain width to `ratio * height`.
    pub fn with_aspect_ratio(mut self, ratio: f32) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    fn anchor(&self, line: AnchorLine) -> Option<f32> {
        self.anchors.iter().find(|a| a.line == line).map(|a| a.margin)
    }

    /// Compute the child's rectangle inside `parent`.
    ///
    /// Height comes from the fixed height, else from top and bottom anchors,
    /// else the parent's height. Width comes from the fixed width, else the
    /// aspect ratio, else leading and trailing anchors, else the parent's
    /// width. Unanchored axes align to the parent's top or leading edge.
    pub fn resolve(&self, parent: Rect, direction: LayoutDirection) -> Rect {
        let top = self.anchor(AnchorLine::Top);
        let bottom = self.anchor(AnchorLine::Bottom);
        let height = match (self.fixed_height, top, bottom) {
            (Some(h), _, _) => h,
            (None, Some(t), Some(b)) => (parent.height() - t - b).max(0.0),
            _ => parent.height(),
        };

        let leading = self.anchor(AnchorLine::Leading);
        let trailing = self.anchor(AnchorLine::Trailing);
        let width = match (self.fixed_width, self.aspect_ratio, leading, trailing) {
            (Some(w), _, _, _) => w,
            (None, Some(ratio), _, _) => height * ratio,
            (None, None, Some(l), Some(t)) => (parent.width() - l - t).max(0.0),
            _ => parent.width(),
        };

        let y = if let Some(margin) = top {
            parent.top() + margin
        } else if let Some(margin) = bottom {
            parent.bottom() - margin - height
        } else if let Some(margin) = self.anchor(AnchorLine::VerticalCenter) {
            parent.center().y - height / 2.0 + margin
        } else {
            parent.top()
        };

        // Distance of the child's leading edge from the parent's leading edge.
        let from_leading = if let Some(margin) = leading {
            margin
        } else if let Some(margin) = trailing {
            parent.width() - margin - width
        } else if let Some(margin) = self.anchor(AnchorLine::HorizontalCenter) {
            (parent.width() - width) / 2.0 + margin
        } else {
            0.0
        };

        let x = match direction {
            LayoutDirection::LeftToRight => parent.left() + from_leading,
            LayoutDirection::RightToLeft => parent.right() - from_leading - width,
        };

        Rect::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_constraints() -> AnchorConstraints {
        AnchorConstraints::new()
            .with_anchor(Anchor::to_parent(AnchorLine::Trailing, 4.0))
            .with_anchor(Anchor::to_parent(AnchorLine::VerticalCenter, 0.0))
            .with_fixed_height(24.0)
            .with_aspect_ratio(1.0)
    }

    #[test]
    fn test_trailing_square_left_to_right() {
        let rect = button_constraints().resolve(
            Rect::new(0.0, 0.0, 200.0, 28.0),
            LayoutDirection::LeftToRight,
        );
        assert_eq!(rect, Rect::new(172.0, 2.0, 24.0, 24.0));
    }

    #[test]
    fn test_trailing_square_right_to_left() {
        let rect = button_constraints().resolve(
            Rect::new(0.0, 0.0, 200.0, 28.0),
            LayoutDirection::RightToLeft,
        );
        assert_eq!(rect, Rect::new(4.0, 2.0, 24.0, 24.0));
    }

    #[test]
    fn test_fill_between_edges() {
        let rect = AnchorConstraints::new()
            .with_anchor(Anchor::to_parent(AnchorLine::Leading, 2.0))
            .with_anchor(Anchor::to_parent(AnchorLine::Trailing, 3.0))
            .with_anchor(Anchor::to_parent(AnchorLine::Top, 1.0))
            .with_anchor(Anchor::to_parent(AnchorLine::Bottom, 1.0))
            .resolve(Rect::new(10.0, 10.0, 100.0, 20.0), LayoutDirection::LeftToRight);
        assert_eq!(rect, Rect::new(12.0, 11.0, 95.0, 18.0));
    }

    #[test]
    fn test_later_anchor_replaces_earlier() {
        let constraints = AnchorConstraints::new()
            .with_anchor(Anchor::to_parent(AnchorLine::Top, 1.0))
            .with_anchor(Anchor::to_parent(AnchorLine::Top, 5.0));
        assert_eq!(constraints.anchors().len(), 1);
        assert_eq!(constraints.anchors()[0].margin, 5.0);
    }
}
