//! Field configuration.
//!
//! [`FieldOptions`] carries the initial policy flags and the geometry of the
//! embedded toggle button. Every key is optional when loading from TOML;
//! missing keys take their default.
//!
//! ```
//! use secure_field::FieldOptions;
//!
//! let options = FieldOptions::from_toml_str(r#"
//!     allow_plain_text = true
//!     button_height = 20.0
//! "#)?;
//! assert!(options.allow_plain_text);
//! assert!(options.show_toggle_button);
//! assert_eq!(options.button_height, 20.0);
//! # Ok::<(), secure_field::OptionsError>(())
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use secure_field_core::SecureFieldError;
use secure_field_core::logging::targets;

/// Height of the toggle button, in points.
pub const DEFAULT_BUTTON_HEIGHT: f32 = 24.0;
/// Gap between the toggle button and the field's trailing edge.
pub const DEFAULT_BUTTON_TRAILING_INSET: f32 = 4.0;
/// Trailing width kept free of text while the button is present.
pub const DEFAULT_RESERVED_WIDTH: f32 = 32.0;
/// Tooltip shown on the toggle button.
pub const DEFAULT_TOOL_TIP: &str = "Toggle password visibility";
/// Glyph drawn in place of each character while masked.
pub const DEFAULT_MASK_CHAR: char = '\u{2022}';

/// Errors produced while loading or validating [`FieldOptions`].
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("failed to parse field options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize field options: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("`{name}` must be a finite, non-negative number (got {value})")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("`button_height` must be greater than zero")]
    ZeroButtonHeight,

    #[error("`mask_char` must be a visible character (got {0:?})")]
    InvalidMaskChar(char),
}

impl From<OptionsError> for SecureFieldError {
    fn from(err: OptionsError) -> Self {
        SecureFieldError::Options(err.to_string())
    }
}

/// Initial configuration for a [`SecureTextField`](crate::SecureTextField).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Whether the password may ever be shown as plain text.
    pub allow_plain_text: bool,
    /// Whether to embed a toggle button when plain text is allowed.
    pub show_toggle_button: bool,
    pub button_height: f32,
    pub button_trailing_inset: f32,
    pub reserved_width: f32,
    pub tool_tip: String,
    pub mask_char: char,
    /// Whether the toggle button takes part in keyboard focus traversal.
    pub button_focusable: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            allow_plain_text: false,
            show_toggle_button: true,
            button_height: DEFAULT_BUTTON_HEIGHT,
            button_trailing_inset: DEFAULT_BUTTON_TRAILING_INSET,
            reserved_width: DEFAULT_RESERVED_WIDTH,
            tool_tip: DEFAULT_TOOL_TIP.to_owned(),
            mask_char: DEFAULT_MASK_CHAR,
            button_focusable: false,
        }
    }
}

impl FieldOptions {
    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        tracing::debug!(target: targets::OPTIONS, ?options, "loaded field options");
        Ok(options)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, OptionsError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that geometry and glyph settings are usable.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (name, value) in [
            ("button_height", self.button_height),
            ("button_trailing_inset", self.button_trailing_inset),
            ("reserved_width", self.reserved_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OptionsError::InvalidDimension { name, value });
            }
        }
        if self.button_height == 0.0 {
            return Err(OptionsError::ZeroButtonHeight);
        }
        if self.mask_char.is_control() || self.mask_char.is_whitespace() {
            return Err(OptionsError::InvalidMaskChar(self.mask_char));
        }
        Ok(())
    }

    /// Builder: allow plain-text display.
    pub fn with_allow_plain_text(mut self, allow: bool) -> Self {
        self.allow_plain_text = allow;
        self
    }

    /// Builder: show or hide the toggle button.
    pub fn with_show_toggle_button(mut self, show: bool) -> Self {
        self.show_toggle_button = show;
        self
    }
}
