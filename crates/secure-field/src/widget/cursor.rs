//! Cursor shapes.
//!
//! Widgets advertise the cursor the host should show while the pointer is
//! over them. Shapes map onto the cross-platform names in the `cursor-icon`
//! crate so any windowing backend can apply them.

use std::fmt;

use cursor_icon::CursorIcon;

/// The shape (icon) of the mouse cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CursorShape {
    /// The default arrow cursor (platform-specific).
    #[default]
    Arrow,
    /// A pointing hand cursor, used for clickable elements.
    Hand,
    /// An I-beam cursor, used over editable text.
    IBeam,
    /// A "not allowed" cursor.
    Forbidden,
}

impl CursorShape {
    /// The equivalent `cursor-icon` value.
    pub fn to_cursor_icon(self) -> CursorIcon {
        match self {
            Self::Arrow => CursorIcon::Default,
            Self::Hand => CursorIcon::Pointer,
            Self::IBeam => CursorIcon::Text,
            Self::Forbidden => CursorIcon::NotAllowed,
        }
    }
}

impl From<CursorShape> for CursorIcon {
    fn from(shape: CursorShape) -> Self {
        shape.to_cursor_icon()
    }
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_cursor_icon().name())
    }
}
