//! Widget layer for secure-field.
//!
//! This module provides the pieces every widget in the crate is built from:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - [`WidgetEvent`]: Input events delivered by the host
//! - [`AnchorConstraints`]: Constraint-based placement of child widgets
//! - [`Formatter`]: Validation and repair of committed content
//!
//! The password widgets themselves live in [`widgets`].
//!
//! # Implementing a Widget
//!
//! A widget embeds a [`WidgetBase`], exposes it through the two required
//! accessors, and provides a size hint and a paint method:
//!
//! ```
//! use secure_field::widget::*;
//! use secure_field_core::{Object, ObjectId};
//! use secure_field_render::Color;
//!
//! struct Swatch {
//!     base: WidgetBase,
//! }
//!
//! impl Object for Swatch {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.object_id()
//!     }
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(16.0, 16.0)
//!     }
//!
//!     fn paint(&self, ctx: &mut PaintContext<'_>) {
//!         let rect = ctx.rect();
//!         ctx.renderer().fill_rect(rect, Color::GRAY);
//!     }
//! }
//! ```

mod base;
mod cursor;
mod events;
mod formatter;
mod geometry;
mod layout;
mod traits;
pub mod widgets;


pub use base::WidgetBase;
pub use cursor::CursorShape;
pub use events::{
    EnterEvent, EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent,
    KeyboardModifiers, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
pub use formatter::{
    CharsetFormatter, Formatter, MaxLengthFormatter, ValidationState, apply_formatter,
};
pub use geometry::{LayoutDirection, SizeHint, TextAlignment};
pub use layout::{Anchor, AnchorConstraints, AnchorLine};
pub use traits::{PaintContext, Widget};
