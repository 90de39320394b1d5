//! Widget base implementation.
//!
//! `WidgetBase` holds the state every widget shares: identity, geometry,
//! interaction flags, and the dirty bits a host reads to schedule layout
//! and repaint.

use secure_field_core::{ObjectId, Signal};
use secure_field_render::{Point, Rect, Size};

use super::cursor::CursorShape;

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
///
/// # Example
///
/// ```
/// use secure_field::widget::WidgetBase;
/// use secure_field_render::Rect;
///
/// let mut base = WidgetBase::new();
/// base.set_geometry(Rect::new(0.0, 0.0, 24.0, 24.0));
/// assert!(base.needs_repaint());
/// ```
pub struct WidgetBase {
    id: ObjectId,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    visible: bool,
    enabled: bool,

    /// Whether the widget can receive keyboard focus.
    focusable: bool,
    focused: bool,

    /// Whether the mouse is currently over this widget.
    hovered: bool,

    /// Whether the primary mouse button went down inside this widget.
    pressed: bool,

    cursor: CursorShape,
    tool_tip: Option<String>,

    needs_repaint: bool,
    needs_layout: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base with a fresh object ID.
    pub fn new() -> Self {
        Self {
            id: ObjectId::next(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            focusable: false,
            focused: false,
            hovered: false,
            pressed: false,
            cursor: CursorShape::Arrow,
            tool_tip: None,
            needs_repaint: true,
            needs_layout: true,
            geometry_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// This will emit `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.needs_layout = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// The widget's bounds in its own coordinates (origin at 0,0).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.width(), self.geometry.height())
    }

    /// Check if a point in local coordinates is inside the widget.
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // State Flags
    // =========================================================================

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enabled state, emitting `enabled_changed` on change.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            if !enabled {
                self.pressed = false;
            }
            self.update();
            self.enabled_changed.emit(enabled);
        }
    }

    /// Whether the widget currently reacts to input.
    ///
    /// A widget that is hidden or disabled does not.
    pub fn is_effectively_enabled(&self) -> bool {
        self.enabled && self.visible
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.update();
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns `true` if the flag changed.
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.update();
            true
        } else {
            false
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.update();
        }
    }

    // =========================================================================
    // Cursor & Tooltip
    // =========================================================================

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorShape) {
        self.cursor = cursor;
    }

    pub fn tool_tip(&self) -> Option<&str> {
        self.tool_tip.as_deref()
    }

    pub fn set_tool_tip(&mut self, tool_tip: Option<String>) {
        self.tool_tip = tool_tip;
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Schedule a repaint.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Called by the host once the widget has been painted.
    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }

    /// Mark the widget's internal layout as stale.
    pub fn invalidate_layout(&mut self) {
        self.needs_layout = true;
        self.needs_repaint = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn clear_layout(&mut self) {
        self.needs_layout = false;
    }
}
