//! The eye-shaped toggle embedded in a secure text field.
//!
//! [`PasswordButton`] is a borderless two-state button. A user click flips
//! its [`ButtonState`] and reports the new state both through the return
//! value of the handler and through the `clicked` signal. Programmatic
//! [`set_state`](PasswordButton::set_state) calls never notify, so the owner
//! can keep the button in sync without feedback loops.
//!
//! # Example
//!
//! ```
//! use secure_field::widget::widgets::{ButtonState, PasswordButton};
//!
//! let mut button = PasswordButton::new("Toggle password visibility");
//! button.clicked.connect(|state| println!("revealed: {}", state.is_on()));
//!
//! assert_eq!(button.click(), Some(ButtonState::On));
//! button.set_enabled(false);
//! assert_eq!(button.click(), None);
//! ```

use secure_field_core::logging::targets;
use secure_field_core::{Object, ObjectId, Signal};
use secure_field_render::{
    Color, FillRule, Path, Rect, RenderResult, Renderer, Shadow, Size, Transform2D,
};

use super::eye_icon::{ICON_GRID, open_eye, slashed_eye};
use crate::options::DEFAULT_BUTTON_HEIGHT;
use crate::widget::{
    CursorShape, EnterEvent, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent,
};

/// The two states of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    /// Content is masked.
    #[default]
    Off,
    /// Content is revealed as plain text.
    On,
}

impl ButtonState {
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl From<bool> for ButtonState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// Fill and shadow chosen for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPalette {
    pub fill: Color,
    pub shadow: Option<Shadow>,
}

/// The embedded reveal/hide button.
pub struct PasswordButton {
    base: WidgetBase,
    state: ButtonState,

    /// Emitted after a user click, with the new state.
    pub clicked: Signal<ButtonState>,
}

impl PasswordButton {
    /// Create a button in the `Off` state with the given tooltip.
    ///
    /// The button is borderless and does not take keyboard focus.
    pub fn new(tool_tip: impl Into<String>) -> Self {
        let mut base = WidgetBase::new();
        base.set_tool_tip(Some(tool_tip.into()));
        base.set_focusable(false);
        base.set_geometry(Rect::new(0.0, 0.0, DEFAULT_BUTTON_HEIGHT, DEFAULT_BUTTON_HEIGHT));

        tracing::trace!(target: targets::BUTTON, id = %base.object_id(), "button created");

        Self {
            base,
            state: ButtonState::Off,
            clicked: Signal::new(),
        }
    }

    /// Set the initial state using builder pattern.
    pub fn with_state(mut self, state: ButtonState) -> Self {
        self.state = state;
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Set the state without emitting `clicked`.
    pub fn set_state(&mut self, state: ButtonState) {
        if self.state != state {
            self.state = state;
            self.base.update();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Enable or disable the button.
    ///
    /// Disabling drops any press in progress and the hand cursor.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
        self.refresh_cursor();
    }

    pub fn is_hovered(&self) -> bool {
        self.base.is_hovered()
    }

    pub fn is_pressed(&self) -> bool {
        self.base.is_pressed()
    }

    /// The cursor the host should show over the button.
    pub fn cursor(&self) -> CursorShape {
        self.base.cursor()
    }

    pub fn tool_tip(&self) -> Option<&str> {
        self.base.tool_tip()
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.base.set_focusable(focusable);
    }

    fn refresh_cursor(&mut self) {
        let cursor = if self.base.is_hovered() && self.base.is_effectively_enabled() {
            CursorShape::Hand
        } else {
            CursorShape::Arrow
        };
        self.base.set_cursor(cursor);
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Perform a user click.
    ///
    /// Returns the new state, or `None` when the button is disabled.
    pub fn click(&mut self) -> Option<ButtonState> {
        if !self.base.is_effectively_enabled() {
            tracing::trace!(target: targets::BUTTON, "click ignored on disabled button");
            return None;
        }

        self.state = self.state.toggled();
        self.base.update();
        tracing::debug!(target: targets::BUTTON, state = ?self.state, "button clicked");
        self.clicked.emit(self.state);
        Some(self.state)
    }

    /// Handle a mouse press event.
    ///
    /// Returns `true` if the press started a click.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left || !self.base.is_effectively_enabled() {
            return false;
        }
        if !self.base.contains_point(event.local_pos) {
            return false;
        }
        self.base.set_pressed(true);
        true
    }

    /// Handle a mouse release event.
    ///
    /// A release over the button that follows a press on it is a click; the
    /// new state is returned.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> Option<ButtonState> {
        if event.button != MouseButton::Left {
            return None;
        }

        let was_pressed = self.base.is_pressed();
        self.base.set_pressed(false);

        if was_pressed && self.base.contains_point(event.local_pos) {
            self.click()
        } else {
            None
        }
    }

    /// The pointer entered the button.
    pub fn handle_enter(&mut self, _event: &EnterEvent) {
        self.base.set_hovered(true);
        self.refresh_cursor();
    }

    /// The pointer moved; re-evaluates hover from the position.
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) {
        let inside = self.base.contains_point(event.local_pos);
        self.base.set_hovered(inside);
        self.refresh_cursor();
    }

    /// The pointer left the button.
    pub fn handle_leave(&mut self, _event: &LeaveEvent) {
        self.base.set_hovered(false);
        self.refresh_cursor();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// The glyph for a state: slashed while masked, open while revealed.
    pub fn icon_path(state: ButtonState) -> Path {
        match state {
            ButtonState::Off => slashed_eye(),
            ButtonState::On => open_eye(),
        }
    }

    /// Colours for the current enabled and hover flags.
    ///
    /// Disabled wins over high contrast. The shadow is only used for the
    /// enabled, normal-contrast palette.
    pub fn palette(&self, high_contrast: bool) -> IconPalette {
        if !self.base.is_enabled() {
            return IconPalette {
                fill: Color::from_rgba8(0, 0, 0, 64),
                shadow: None,
            };
        }
        if high_contrast {
            return IconPalette {
                fill: Color::BLACK,
                shadow: None,
            };
        }
        let fill = if self.base.is_hovered() {
            Color::from_rgba8(0, 0, 0, 217)
        } else {
            Color::from_rgba8(0, 0, 0, 128)
        };
        IconPalette {
            fill,
            shadow: Some(Shadow::drop_shadow(Color::BLACK.with_alpha(0.3), 2.0)),
        }
    }

    /// Draw the glyph for the current state, scaled to fit `bounds`.
    ///
    /// Output depends only on state, enabled, hovered and `high_contrast`.
    pub fn render(
        &self,
        renderer: &mut dyn Renderer,
        bounds: Rect,
        high_contrast: bool,
    ) -> RenderResult<()> {
        let fit = Transform2D::fit_grid(ICON_GRID, bounds)?;
        let path = Self::icon_path(self.state);
        let palette = self.palette(high_contrast);

        renderer.save();
        renderer.concat_transform(&fit);
        if let Some(shadow) = palette.shadow {
            renderer.draw_path_shadow(&path, &shadow, FillRule::NonZero);
        }
        renderer.fill_path(&path, palette.fill, FillRule::NonZero);
        renderer.restore();
        Ok(())
    }
}

impl std::fmt::Debug for PasswordButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordButton")
            .field("id", &self.base.object_id())
            .field("state", &self.state)
            .field("enabled", &self.base.is_enabled())
            .field("hovered", &self.base.is_hovered())
            .finish_non_exhaustive()
    }
}

impl Object for PasswordButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for PasswordButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::fixed(Size::new(DEFAULT_BUTTON_HEIGHT, DEFAULT_BUTTON_HEIGHT))
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let bounds = ctx.rect();
        let high_contrast = ctx.is_high_contrast();
        if let Err(err) = self.render(ctx.renderer(), bounds, high_contrast) {
            tracing::debug!(target: targets::BUTTON, %err, "button not painted");
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e).is_some(),
            WidgetEvent::MouseMove(e) => {
                self.handle_mouse_move(e);
                false
            }
            WidgetEvent::Enter(e) => {
                self.handle_enter(e);
                false
            }
            WidgetEvent::Leave(e) => {
                self.handle_leave(e);
                false
            }
            _ => false,
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn set_enabled(&mut self, enabled: bool) {
        PasswordButton::set_enabled(self, enabled);
    }
}

static_assertions::assert_impl_all!(PasswordButton: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use secure_field_render::{DrawCommand, Point, RecordingRenderer};

    use super::*;
    use crate::widget::KeyboardModifiers;

    fn press(x: f32, y: f32) -> MousePressEvent {
        MousePressEvent::new(MouseButton::Left, Point::new(x, y), KeyboardModifiers::NONE)
    }

    fn release(x: f32, y: f32) -> MouseReleaseEvent {
        MouseReleaseEvent::new(MouseButton::Left, Point::new(x, y), KeyboardModifiers::NONE)
    }

    #[test]
    fn test_defaults() {
        let button = PasswordButton::new("Toggle password visibility");
        assert_eq!(button.state(), ButtonState::Off);
        assert!(button.is_enabled());
        assert!(!button.is_focusable());
        assert_eq!(button.tool_tip(), Some("Toggle password visibility"));
        assert_eq!(button.cursor(), CursorShape::Arrow);
    }

    #[test]
    fn test_press_release_clicks() {
        let mut button = PasswordButton::new("tip");
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(button.handle_mouse_press(&press(5.0, 5.0)));
        assert_eq!(button.handle_mouse_release(&release(6.0, 6.0)), Some(ButtonState::On));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_release_outside_cancels_click() {
        let mut button = PasswordButton::new("tip");
        assert!(button.handle_mouse_press(&press(5.0, 5.0)));
        assert_eq!(button.handle_mouse_release(&release(50.0, 5.0)), None);
        assert_eq!(button.state(), ButtonState::Off);
    }

    #[test]
    fn test_set_state_is_silent() {
        let mut button = PasswordButton::new("tip");
        let clicks = Arc::new(AtomicUsize::new(0));
        let clicks_clone = clicks.clone();
        button.clicked.connect(move |_| {
            clicks_clone.fetch_add(1, Ordering::SeqCst);
        });

        button.set_state(ButtonState::On);
        assert_eq!(button.state(), ButtonState::On);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let mut button = PasswordButton::new("tip");
        button.set_enabled(false);
        assert!(!button.handle_mouse_press(&press(5.0, 5.0)));
        assert_eq!(button.handle_mouse_release(&release(5.0, 5.0)), None);
        assert_eq!(button.click(), None);
        assert_eq!(button.state(), ButtonState::Off);
    }

    #[test]
    fn test_hover_cursor() {
        let mut button = PasswordButton::new("tip");
        button.handle_enter(&EnterEvent::new(Point::new(2.0, 2.0)));
        assert!(button.is_hovered());
        assert_eq!(button.cursor(), CursorShape::Hand);

        button.handle_mouse_move(&MouseMoveEvent::new(Point::new(40.0, 2.0), KeyboardModifiers::NONE));
        assert!(!button.is_hovered());
        assert_eq!(button.cursor(), CursorShape::Arrow);

        button.handle_mouse_move(&MouseMoveEvent::new(Point::new(3.0, 3.0), KeyboardModifiers::NONE));
        assert_eq!(button.cursor(), CursorShape::Hand);

        button.handle_leave(&LeaveEvent::new());
        assert!(!button.is_hovered());
        assert_eq!(button.cursor(), CursorShape::Arrow);
        assert_eq!(button.state(), ButtonState::Off);
    }

    #[test]
    fn test_hover_cursor_suppressed_while_disabled() {
        let mut button = PasswordButton::new("tip");
        button.handle_enter(&EnterEvent::new(Point::new(2.0, 2.0)));
        button.set_enabled(false);
        assert!(button.is_hovered());
        assert_eq!(button.cursor(), CursorShape::Arrow);
    }

    #[test]
    fn test_palette() {
        let mut button = PasswordButton::new("tip");
        let normal = button.palette(false);
        assert!(normal.shadow.is_some());

        button.handle_enter(&EnterEvent::new(Point::new(1.0, 1.0)));
        let hovered = button.palette(false);
        assert!(hovered.fill.a > normal.fill.a);

        let contrast = button.palette(true);
        assert_eq!(contrast.fill, Color::BLACK);
        assert!(contrast.shadow.is_none());

        button.set_enabled(false);
        let disabled = button.palette(false);
        assert!(disabled.fill.a < normal.fill.a);
        assert!(disabled.shadow.is_none());
    }

    #[test]
    fn test_render_shadow_then_fill() {
        let button = PasswordButton::new("tip");
        let mut renderer = RecordingRenderer::new();
        button.render(&mut renderer, Rect::new(0.0, 0.0, 24.0, 24.0), false).unwrap();

        let commands = renderer.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::PathShadow { .. }));
        assert!(matches!(commands[1], DrawCommand::FillPath { .. }));

        // The glyph is scaled from the 32-unit grid into the 24px bounds.
        if let DrawCommand::FillPath { path, .. } = &commands[1] {
            let bounds = path.control_bounds().unwrap();
            assert!(bounds.right() <= 24.0 + 0.001);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let button = PasswordButton::new("tip").with_state(ButtonState::On);
        let mut first = RecordingRenderer::new();
        let mut second = RecordingRenderer::new();
        let bounds = Rect::new(3.0, 3.0, 24.0, 24.0);
        button.render(&mut first, bounds, false).unwrap();
        button.render(&mut second, bounds, false).unwrap();
        assert_eq!(first.commands(), second.commands());
        assert!(first.path_meshes().iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn test_render_rejects_empty_bounds() {
        let button = PasswordButton::new("tip");
        let mut renderer = RecordingRenderer::new();
        assert!(button.render(&mut renderer, Rect::ZERO, false).is_err());
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_widget_event_accepts_click() {
        let mut button = PasswordButton::new("tip");
        let mut down = WidgetEvent::MousePress(press(4.0, 4.0));
        assert!(button.event(&mut down));
        assert!(down.is_accepted());
        let mut up = WidgetEvent::MouseRelease(release(4.0, 4.0));
        assert!(button.event(&mut up));
        assert_eq!(button.state(), ButtonState::On);
    }
}
