//! Change-tracking properties.
//!
//! A [`Property<T>`] stores a value behind a lock and reports whether a
//! `set()` actually changed it. Widgets use the return value to decide
//! whether to emit a notification signal or schedule work, which keeps
//! redundant setter calls free of side effects.
//!
//! # Example
//!
//! ```
//! use secure_field_core::{Property, Signal};
//!
//! struct Toggle {
//!     checked: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_checked(&self, checked: bool) {
//!         if self.checked.set(checked) {
//!             self.toggled.emit(checked);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { checked: Property::new(false), toggled: Signal::new() };
//! toggle.set_checked(true);
//! assert!(toggle.checked.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::logging::targets;

/// A value that tracks whether writes change it.
///
/// `Property<T>` is `Send + Sync` whenever `T` is, through its `RwLock`.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Overwrite the value without comparing it to the current one.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// Equal values leave the property untouched and return `false`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            tracing::trace!(target: targets::PROPERTY, "property changed");
            true
        } else {
            false
        }
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Property<bool>: Send, Sync);

    #[test]
    fn test_set_reports_change() {
        let prop = Property::new(false);
        assert!(!prop.set(false));
        assert!(prop.set(true));
        assert!(prop.get());
    }

    #[test]
    fn test_replace_returns_old_value() {
        let prop = Property::new(String::from("secret"));
        assert_eq!(prop.replace("secret".into()), None);
        assert_eq!(prop.replace("open".into()), Some("secret".into()));
        assert_eq!(prop.with(|v| v.len()), 4);
    }

    #[test]
    fn test_set_silent_skips_comparison() {
        let prop = Property::new(1);
        prop.set_silent(1);
        prop.set_silent(2);
        assert_eq!(prop.get(), 2);
    }
}
