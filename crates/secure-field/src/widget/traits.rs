//! The core widget trait and paint context.

use secure_field_core::Object;
use secure_field_render::{Rect, Renderer, Size};

use super::base::WidgetBase;
use super::cursor::CursorShape;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context passed to [`Widget::paint`].
///
/// The renderer is already translated so that (0, 0) is the widget's
/// top-left corner.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
    /// Whether the platform asks for increased contrast.
    high_contrast: bool,
    /// Whether to show the focus indicator.
    show_focus: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
            high_contrast: false,
            show_focus: false,
        }
    }

    /// Set the high-contrast flag (builder pattern).
    #[inline]
    pub fn with_high_contrast(mut self, high_contrast: bool) -> Self {
        self.high_contrast = high_contrast;
        self
    }

    /// Set whether to show the focus indicator (builder pattern).
    #[inline]
    pub fn with_show_focus(mut self, show_focus: bool) -> Self {
        self.show_focus = show_focus;
        self
    }

    #[inline]
    pub fn is_high_contrast(&self) -> bool {
        self.high_contrast
    }

    #[inline]
    pub fn should_show_focus(&self) -> bool {
        self.show_focus
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut (dyn Renderer + 'a) {
        &mut *self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The base trait for all widgets.
///
/// Widgets embed a [`WidgetBase`] and expose it through the two required
/// accessors; the provided methods delegate to it.
pub trait Widget: Object + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle an event. Returns `true` if the event was handled.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Provided Methods
    // =========================================================================

    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    fn size(&self) -> Size {
        self.widget_base().size()
    }

    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    fn is_focusable(&self) -> bool {
        self.widget_base().is_focusable()
    }

    fn has_focus(&self) -> bool {
        self.widget_base().has_focus()
    }

    fn is_hovered(&self) -> bool {
        self.widget_base().is_hovered()
    }

    fn cursor(&self) -> CursorShape {
        self.widget_base().cursor()
    }

    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}
