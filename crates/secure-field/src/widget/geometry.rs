//! Size hints and direction-dependent geometry.

use secure_field_render::Size;
use serde::{Deserialize, Serialize};

/// Size preferences reported by a widget to its host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,
    /// The minimum acceptable size, if any.
    pub minimum: Option<Size>,
    /// The maximum size, if any.
    pub maximum: Option<Size>,
}

impl Default for SizeHint {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Create a fixed size hint (preferred = minimum = maximum).
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: Some(size),
            maximum: Some(size),
        }
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the minimum size from dimensions.
    pub fn with_minimum_dimensions(self, width: f32, height: f32) -> Self {
        self.with_minimum(Size::new(width, height))
    }

    /// Whether preferred, minimum and maximum are all equal.
    pub fn is_fixed(&self) -> bool {
        self.minimum == Some(self.preferred) && self.maximum == Some(self.preferred)
    }
}

/// Writing direction of the field's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_right_to_left(self) -> bool {
        self == Self::RightToLeft
    }
}

/// Horizontal placement of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    /// Left in left-to-right layouts, right in right-to-left layouts.
    #[default]
    Natural,
}

impl TextAlignment {
    /// Resolve `Natural` against a layout direction.
    pub fn resolve(self, direction: LayoutDirection) -> Self {
        match (self, direction) {
            (Self::Natural, LayoutDirection::LeftToRight) => Self::Left,
            (Self::Natural, LayoutDirection::RightToLeft) => Self::Right,
            (other, _) => other,
        }
    }
}
