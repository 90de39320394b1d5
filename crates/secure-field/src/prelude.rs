//! Commonly used types.
//!
//! ```
//! use secure_field::prelude::*;
//! ```

// ============================================================================
// Signals and Errors
// ============================================================================

pub use secure_field_core::{ConnectionId, Object, ObjectId, Property, SecureFieldError, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    CursorShape, Formatter, LayoutDirection, PaintContext, SizeHint, TextAlignment, Widget,
    WidgetBase, WidgetEvent,
};

// ============================================================================
// Password Widgets
// ============================================================================

pub use crate::options::FieldOptions;
pub use crate::widget::widgets::{
    ButtonState, CellStrategy, PasswordButton, SecureTextField, Visibility,
};

// ============================================================================
// Geometry and Rendering
// ============================================================================

pub use secure_field_render::{Color, Font, Point, Rect, RecordingRenderer, Renderer, Size};
