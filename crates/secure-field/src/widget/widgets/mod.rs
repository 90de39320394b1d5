//! Password widgets.
//!
//! - [`SecureTextField`]: The password entry field
//! - [`VisibilityController`]: Visibility state and presentation swaps
//! - [`TextCell`]: Masked and plain presentation strategies
//! - [`FieldEditor`]: An open edit session
//! - [`PasswordButton`]: The embedded reveal/hide toggle

pub mod eye_icon;
mod field_editor;
mod password_button;
mod secure_text_field;
mod text_cell;
mod visibility_controller;

pub use field_editor::FieldEditor;
pub use password_button::{ButtonState, IconPalette, PasswordButton};
pub use secure_text_field::SecureTextField;
pub use text_cell::{BackgroundStyle, BezelStyle, CellConfig, CellStrategy, TextCell};
pub use visibility_controller::{
    ButtonChange, SwapReport, Transition, Visibility, VisibilityController, select_strategy,
};
