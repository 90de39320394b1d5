//! Core systems for secure-field.
//!
//! This crate provides the foundational pieces the password widgets are
//! built from:
//!
//! - **Signal/Slot System**: Type-safe notifications between a widget and its host
//! - **Property System**: Change-detecting properties that pair with signals
//! - **Object Identity**: Unique ids for widgets, used by the focus chain
//! - **Errors**: The recoverable error taxonomy shared by every crate
//! - **Logging**: `tracing` target names for filtering subsystem output
//!
//! # Signal/Slot Example
//!
//! ```
//! use secure_field_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("hunter2".to_string());
//! text_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use secure_field_core::{Property, Signal};
//!
//! struct Toggle {
//!     on: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_on(&self, on: bool) {
//!         if self.on.set(on) {
//!             self.toggled.emit(on);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { on: Property::new(false), toggled: Signal::new() };
//! toggle.set_on(true);
//! assert!(toggle.on.get());
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod property;
pub mod signal;

pub use error::{Result, SecureFieldError, SignalError};
pub use object::{Object, ObjectId};
pub use property::Property;
pub use signal::{ConnectionId, Signal};
