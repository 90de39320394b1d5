//! Font description.

/// Font weight on the CSS 100-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Generic or named font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The platform's user-interface font.
    #[default]
    System,
    /// The platform's fixed-pitch font.
    Monospace,
    /// A specific family by name.
    Name(String),
}

/// A font request: family, size in pixels, and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
}

impl Default for Font {
    fn default() -> Self {
        Self::system(13.0)
    }
}

impl Font {
    /// Create a font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    /// The system UI font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new(FontFamily::System, size)
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Approximate line height for layout.
    pub fn line_height(&self) -> f32 {
        (self.size * 1.2).ceil()
    }
}
