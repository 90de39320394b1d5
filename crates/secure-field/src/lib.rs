//! secure-field - a password text field with a plain-text reveal toggle.
//!
//! The field masks its content by default. Hosts may allow the password to
//! be shown as plain text; the field then embeds an eye-shaped toggle button
//! at its trailing edge. Content, cursor and every cosmetic attribute survive
//! each switch between masked and plain presentation.
//!
//! # Example
//!
//! ```
//! use secure_field::prelude::*;
//!
//! let options = FieldOptions::default().with_allow_plain_text(true);
//! let mut field = SecureTextField::with_options(&options).with_text("hunter2");
//! field.set_geometry(Rect::new(0.0, 0.0, 200.0, 30.0));
//!
//! assert!(field.has_toggle_button());
//! assert_eq!(field.button_rect(), Some(Rect::new(172.0, 3.0, 24.0, 24.0)));
//! assert_eq!(field.cell_strategy(), CellStrategy::MaskedWithReservedSpace);
//! ```
//!
//! # Crates
//!
//! - `secure_field_core`: signals, properties, object identity, errors
//! - `secure_field_render`: geometry, paths, the `Renderer` trait

pub mod options;
pub mod prelude;
pub mod widget;

pub use secure_field_core::{Result, SecureFieldError, logging};

/// Graphics types used by the widgets.
pub mod render {
    pub use secure_field_render::*;
}

pub use options::{FieldOptions, OptionsError};
pub use widget::widgets::{ButtonState, PasswordButton, SecureTextField, Visibility};
