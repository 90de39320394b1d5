//! Password text field with an optional plain-text toggle.
//!
//! [`SecureTextField`] masks its content by default. When plain-text display
//! is allowed it embeds a [`PasswordButton`] at its trailing edge; clicking
//! the button reveals or hides the content. Content, cursor handling and
//! every cosmetic attribute behave the same in both modes.
//!
//! # Example
//!
//! ```
//! use secure_field::prelude::*;
//!
//! let mut field = SecureTextField::new()
//!     .with_placeholder("Password")
//!     .with_text("hunter2");
//! field.set_allow_plain_text(true);
//!
//! field.text_changed.connect(|text| println!("content: {} chars", text.len()));
//! field.visibility_changed.connect(|v| println!("visibility: {v:?}"));
//!
//! assert_eq!(field.display_text(), "\u{2022}".repeat(7));
//! field.set_visibility(Visibility::PlainText)?;
//! assert_eq!(field.display_text(), "hunter2");
//!
//! field.set_allow_plain_text(false);
//! assert_eq!(field.visibility(), Visibility::Secure);
//! assert!(!field.has_toggle_button());
//! # Ok::<(), secure_field::SecureFieldError>(())
//! ```
//!
//! # Signals
//!
//! - `text_changed(String)`: content changed, including the content written
//!   back after each presentation swap
//! - `visibility_changed(Visibility)`: the visibility changed
//! - `editing_finished(String)`: Enter pressed or focus lost
//! - `focus_chain_changed(Vec<ObjectId>)`: a focusable button was added or
//!   removed

use std::sync::Arc;

use secure_field_core::logging::targets;
use secure_field_core::{Object, ObjectId, Result, Signal};
use secure_field_render::{Color, Font, Rect, Size};

use super::field_editor::FieldEditor;
use super::password_button::PasswordButton;
use super::text_cell::{BackgroundStyle, BezelStyle, CellConfig, CellStrategy};
use super::visibility_controller::{Transition, Visibility, VisibilityController};
use crate::options::FieldOptions;
use crate::widget::{
    CursorShape, Formatter, Key, KeyPressEvent, LayoutDirection, PaintContext, SizeHint,
    TextAlignment, Widget, WidgetBase, WidgetEvent,
};

const FOCUS_RING: Color = Color::from_rgb(0.0, 0.4, 0.9);
const PREFERRED_WIDTH: f32 = 160.0;
const MINIMUM_WIDTH: f32 = 40.0;
const VERTICAL_PADDING: f32 = 8.0;

/// A password entry field.
pub struct SecureTextField {
    base: WidgetBase,
    controller: VisibilityController,
    /// Focus order as last announced through `focus_chain_changed`.
    announced_chain: Vec<ObjectId>,

    /// Emitted when the content changes.
    pub text_changed: Signal<String>,
    /// Emitted when the visibility changes.
    pub visibility_changed: Signal<Visibility>,
    /// Emitted when editing finishes, with the committed content.
    pub editing_finished: Signal<String>,
    /// Emitted with the new focus traversal order when it changes.
    pub focus_chain_changed: Signal<Vec<ObjectId>>,
}

impl Default for SecureTextField {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureTextField {
    /// Create a field with default options: secure, plain text disallowed.
    pub fn new() -> Self {
        Self::with_options(&FieldOptions::default())
    }

    /// Create a field from options. The field always starts `Secure`.
    pub fn with_options(options: &FieldOptions) -> Self {
        let mut base = WidgetBase::new();
        base.set_focusable(true);
        base.set_cursor(CursorShape::IBeam);

        let controller = VisibilityController::new(options);
        let mut announced_chain = vec![base.object_id()];
        if let Some(button) = controller.button()
            && button.is_focusable()
        {
            announced_chain.push(button.object_id());
        }

        Self {
            base,
            controller,
            announced_chain,
            text_changed: Signal::new(),
            visibility_changed: Signal::new(),
            editing_finished: Signal::new(),
            focus_chain_changed: Signal::new(),
        }
    }

    /// Validate `options` and create a field from them.
    pub fn try_with_options(options: &FieldOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::with_options(options))
    }

    /// Set the initial content using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.set_placeholder(Some(placeholder.into()));
        self
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    /// Set the alignment using builder pattern.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    /// Set the formatter using builder pattern.
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.set_formatter(Some(formatter));
        self
    }

    // =========================================================================
    // Visibility policy
    // =========================================================================

    pub fn visibility(&self) -> Visibility {
        self.controller.visibility()
    }

    /// Change the visibility.
    ///
    /// Fails with [`PlainTextDisallowed`](crate::SecureFieldError::PlainTextDisallowed) when asking for
    /// plain text on a field that does not allow it.
    pub fn set_visibility(&mut self, visibility: Visibility) -> Result<()> {
        let transition = self.controller.set_visibility(visibility)?;
        self.apply_transition(transition);
        Ok(())
    }

    pub fn allows_plain_text(&self) -> bool {
        self.controller.allows_plain_text()
    }

    /// Allow or disallow plain-text display. Disallowing hides the content.
    pub fn set_allow_plain_text(&mut self, allow: bool) {
        let transition = self.controller.set_allow_plain_text(allow);
        self.apply_transition(transition);
    }

    pub fn shows_toggle_button(&self) -> bool {
        self.controller.shows_toggle_button()
    }

    /// Request or drop the embedded toggle button.
    pub fn set_show_toggle_button(&mut self, show: bool) {
        let transition = self.controller.set_show_toggle_button(show);
        self.apply_transition(transition);
    }

    /// Whether the toggle button is currently attached.
    pub fn has_toggle_button(&self) -> bool {
        self.controller.has_button()
    }

    pub fn toggle_button(&self) -> Option<&PasswordButton> {
        self.controller.button()
    }

    pub fn cell_strategy(&self) -> CellStrategy {
        self.controller.cell().strategy()
    }

    /// Number of presentation swaps performed so far.
    pub fn swap_count(&self) -> u64 {
        self.controller.swap_count()
    }

    fn apply_transition(&mut self, transition: Transition) {
        if transition.is_empty() {
            return;
        }
        if let Some(visibility) = transition.visibility {
            self.visibility_changed.emit(visibility);
        }
        if let Some(swap) = &transition.swap {
            self.text_changed.emit(swap.restored_content.clone());
        }
        if transition.button.is_some() {
            let chain = self.focus_chain();
            if chain != self.announced_chain {
                self.announced_chain.clone_from(&chain);
                self.focus_chain_changed.emit(chain);
            }
        }
        if transition.needs_layout() {
            self.base.invalidate_layout();
        }
        self.base.update();
    }

    // =========================================================================
    // Enabled state
    // =========================================================================

    /// Enable or disable the field. The button is disabled, not removed.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
        self.controller.set_enabled(enabled);
        self.base.update();
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The committed content.
    pub fn text(&self) -> &str {
        self.controller.cell().content()
    }

    /// Replace the content through the formatter.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(content) = self.controller.set_content(&text) {
            self.base.update();
            self.text_changed.emit(content);
        }
    }

    /// The text as drawn, masked unless visible as plain text.
    pub fn display_text(&self) -> String {
        match self.controller.editor() {
            Some(editor) => editor.display_text(),
            None => self.controller.cell().display_text(),
        }
    }

    // =========================================================================
    // Cosmetic configuration
    // =========================================================================

    /// Every cosmetic attribute of the active cell.
    pub fn cell_config(&self) -> &CellConfig {
        self.controller.cell().config()
    }

    fn update_config(&mut self, f: impl FnOnce(&mut CellConfig)) {
        f(self.controller.cell_config_mut());
        self.base.update();
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.cell_config().placeholder.as_deref()
    }

    pub fn set_placeholder(&mut self, placeholder: Option<String>) {
        self.update_config(|config| config.placeholder = placeholder);
    }

    pub fn font(&self) -> &Font {
        &self.cell_config().font
    }

    pub fn set_font(&mut self, font: Font) {
        self.update_config(|config| config.font = font);
        self.base.invalidate_layout();
    }

    pub fn alignment(&self) -> TextAlignment {
        self.cell_config().alignment
    }

    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.update_config(|config| config.alignment = alignment);
    }

    pub fn formatter(&self) -> Option<&Arc<dyn Formatter>> {
        self.cell_config().formatter.as_ref()
    }

    /// Set the formatter. Existing content is not re-validated.
    pub fn set_formatter(&mut self, formatter: Option<Arc<dyn Formatter>>) {
        self.update_config(|config| config.formatter = formatter);
    }

    pub fn set_bordered(&mut self, bordered: bool) {
        self.update_config(|config| config.bordered = bordered);
    }

    pub fn set_bezeled(&mut self, bezeled: bool) {
        self.update_config(|config| config.bezeled = bezeled);
    }

    pub fn set_bezel_style(&mut self, style: BezelStyle) {
        self.update_config(|config| config.bezel_style = style);
    }

    pub fn set_background_style(&mut self, style: BackgroundStyle) {
        self.update_config(|config| config.background_style = style);
    }

    pub fn set_draws_background(&mut self, draws: bool) {
        self.update_config(|config| config.draws_background = draws);
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.update_config(|config| config.editable = editable);
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.update_config(|config| config.selectable = selectable);
    }

    /// Commit every keystroke instead of waiting for Enter or focus loss.
    pub fn set_continuous(&mut self, continuous: bool) {
        self.update_config(|config| config.continuous = continuous);
    }

    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.update_config(|config| config.scrollable = scrollable);
    }

    /// Set the layout direction; the button moves to the new trailing edge.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        self.update_config(|config| config.layout_direction = direction);
        self.controller.layout_button();
        self.base.invalidate_layout();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Take keyboard focus and open an edit session.
    pub fn focus_in(&mut self) {
        self.base.set_focused(true);
        self.controller.set_focus(true);
        let _ = self.controller.begin_editing();
        self.base.update();
    }

    /// Give up focus, committing the session.
    pub fn focus_out(&mut self) {
        if self.controller.is_editing() {
            if let Some(content) = self.controller.end_editing(true) {
                self.text_changed.emit(content);
            }
            self.editing_finished.emit(self.text().to_owned());
        }
        self.controller.set_focus(false);
        self.base.set_focused(false);
        self.base.update();
    }

    /// Open an edit session. Returns `false` if the field is not editable.
    pub fn begin_editing(&mut self) -> bool {
        self.controller.begin_editing()
    }

    pub fn is_editing(&self) -> bool {
        self.controller.is_editing()
    }

    /// The uncommitted buffer of the open session.
    pub fn editing_text(&self) -> Option<&str> {
        self.controller.editor().map(|editor| editor.text())
    }

    /// Type text into the open session.
    pub fn insert_text(&mut self, text: &str) -> bool {
        self.edit(|editor| {
            editor.insert_text(text);
            true
        })
    }

    /// Delete backwards in the open session.
    pub fn backspace(&mut self) -> bool {
        self.edit(|editor| editor.backspace())
    }

    fn delete_forward(&mut self) -> bool {
        self.edit(|editor| editor.delete_forward())
    }

    fn edit(&mut self, f: impl FnOnce(&mut FieldEditor) -> bool) -> bool {
        let config = self.cell_config();
        if !config.enabled || !config.editable {
            return false;
        }
        let Some(editor) = self.controller.editor_mut() else {
            return false;
        };
        if !f(editor) {
            return false;
        }
        if self.cell_config().continuous {
            self.commit_editing();
        }
        self.base.update();
        true
    }

    /// Select a byte range of the content, opening a session if needed.
    ///
    /// Returns `false` if the field is disabled or not selectable.
    pub fn select_range(&mut self, start: usize, end: usize) -> bool {
        let selected = self.controller.begin_selection(start, end);
        if selected {
            self.base.update();
        }
        selected
    }

    /// Select the whole content.
    pub fn select_all(&mut self) -> bool {
        let end = self
            .controller
            .editor()
            .map_or(self.text().len(), |editor| editor.text().len());
        self.select_range(0, end)
    }

    /// The selected part of the open session's buffer.
    pub fn selected_text(&self) -> Option<&str> {
        self.controller.editor().map(FieldEditor::selected_text)
    }

    /// Commit the session buffer, keeping the session open.
    pub fn commit_editing(&mut self) {
        if let Some(content) = self.controller.commit_editing() {
            self.text_changed.emit(content);
        }
    }

    /// Drop uncommitted changes and close the session.
    pub fn abort_editing(&mut self) {
        let _ = self.controller.end_editing(false);
        self.base.update();
    }

    fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        if !self.controller.is_editing() {
            return false;
        }
        match event.key {
            Key::Backspace => {
                self.backspace();
            }
            Key::Delete => {
                self.delete_forward();
            }
            Key::Enter => {
                self.commit_editing();
                self.editing_finished.emit(self.text().to_owned());
            }
            Key::Escape => {
                self.abort_editing();
                let _ = self.controller.begin_editing();
            }
            Key::ArrowLeft | Key::ArrowRight | Key::Home | Key::End => {
                if let Some(editor) = self.controller.editor_mut() {
                    match event.key {
                        Key::ArrowLeft => editor.move_left(),
                        Key::ArrowRight => editor.move_right(),
                        Key::Home => editor.home(),
                        _ => editor.end(),
                    }
                }
                self.base.update();
            }
            Key::Tab => return false,
            Key::Space | Key::Other => {
                if event.text.is_empty() || event.modifiers.has_command() {
                    return false;
                }
                return self.insert_text(&event.text);
            }
        }
        true
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// The area text is drawn into, in field coordinates.
    pub fn text_rect(&self) -> Rect {
        self.controller.text_rect()
    }

    /// Where the toggle button sits, in field coordinates.
    pub fn button_rect(&self) -> Option<Rect> {
        self.controller.button_rect()
    }

    /// Keyboard focus traversal order for this field and its children.
    pub fn focus_chain(&self) -> Vec<ObjectId> {
        let mut chain = vec![self.base.object_id()];
        if let Some(button) = self.controller.button()
            && button.is_focusable()
        {
            chain.push(button.object_id());
        }
        chain
    }

    pub fn needs_layout(&self) -> bool {
        self.base.needs_layout()
    }

    /// Place the button for the current geometry and clear the layout flag.
    pub fn layout(&mut self) {
        self.controller.set_bounds(self.base.rect());
        self.base.clear_layout();
    }

    /// Set the geometry and re-place the button.
    pub fn set_geometry(&mut self, rect: Rect) {
        self.base.set_geometry(rect);
        self.controller.set_bounds(self.base.rect());
    }
}

impl Object for SecureTextField {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for SecureTextField {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let height = self.font().line_height() + VERTICAL_PADDING;
        SizeHint::new(Size::new(PREFERRED_WIDTH, height))
            .with_minimum_dimensions(MINIMUM_WIDTH, height)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let frame = ctx.rect();
        let high_contrast = ctx.is_high_contrast();
        let show_focus = ctx.should_show_focus();
        let renderer = ctx.renderer();

        self.controller.cell().draw(renderer, frame, self.controller.editor());

        if let (Some(button), Some(rect)) = (self.controller.button(), self.controller.button_rect()) {
            renderer.save();
            renderer.translate(rect.left(), rect.top());
            let local = Rect::new(0.0, 0.0, rect.width(), rect.height());
            if let Err(err) = button.render(renderer, local, high_contrast) {
                tracing::debug!(target: targets::BUTTON, %err, "toggle button not painted");
            }
            renderer.restore();
        }

        if show_focus && self.base.has_focus() {
            renderer.stroke_rect(frame, FOCUS_RING, 2.0);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if let Some(transition) = self.controller.handle_button_event(event) {
            self.apply_transition(transition);
        }
        if event.is_accepted() {
            self.base.update();
            return true;
        }

        let handled = match event {
            WidgetEvent::MousePress(_) => {
                if self.base.is_focusable() && self.base.is_effectively_enabled() {
                    if !self.base.has_focus() {
                        self.focus_in();
                    }
                    true
                } else {
                    false
                }
            }
            WidgetEvent::Enter(_) => {
                self.base.set_hovered(true);
                false
            }
            WidgetEvent::Leave(_) => {
                self.base.set_hovered(false);
                false
            }
            WidgetEvent::FocusIn(_) => {
                self.focus_in();
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.focus_out();
                true
            }
            WidgetEvent::KeyPress(key) => {
                let key = key.clone();
                self.handle_key(&key)
            }
            WidgetEvent::MouseMove(_) | WidgetEvent::MouseRelease(_) => false,
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn set_geometry(&mut self, rect: Rect) {
        SecureTextField::set_geometry(self, rect);
    }

    fn set_enabled(&mut self, enabled: bool) {
        SecureTextField::set_enabled(self, enabled);
    }

    /// The button's cursor while it is hovered, the text cursor otherwise.
    fn cursor(&self) -> CursorShape {
        match self.controller.button() {
            Some(button) if button.is_hovered() => button.cursor(),
            _ => self.base.cursor(),
        }
    }
}

static_assertions::assert_impl_all!(SecureTextField: Send, Sync);

impl std::fmt::Debug for SecureTextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureTextField")
            .field("id", &self.base.object_id())
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;
    use secure_field_core::SecureFieldError;
    use secure_field_render::{DrawCommand, Point, RecordingRenderer};

    use super::*;
    use crate::options::OptionsError;
    use crate::widget::{
        FocusInEvent, FocusReason, KeyboardModifiers, MaxLengthFormatter, MouseButton,
        MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    };

    fn revealable() -> SecureTextField {
        let options = FieldOptions::default().with_allow_plain_text(true);
        let mut field = SecureTextField::with_options(&options);
        field.set_geometry(Rect::new(10.0, 10.0, 200.0, 30.0));
        field
    }

    fn key(key: Key) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::new(key, KeyboardModifiers::NONE, ""))
    }

    fn typed(text: &str) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::text(text))
    }

    fn click(field: &mut SecureTextField, x: f32, y: f32) {
        let pos = Point::new(x, y);
        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            pos,
            KeyboardModifiers::NONE,
        ));
        field.event(&mut press);
        let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            pos,
            KeyboardModifiers::NONE,
        ));
        field.event(&mut release);
    }

    #[test]
    fn test_defaults() {
        let field = SecureTextField::new();
        assert_eq!(field.visibility(), Visibility::Secure);
        assert!(!field.allows_plain_text());
        assert!(field.shows_toggle_button());
        assert!(!field.has_toggle_button());
        assert_eq!(field.cell_strategy(), CellStrategy::Masked);
        assert_eq!(field.focus_chain(), vec![field.object_id()]);
        assert!(field.is_focusable());
    }

    #[test]
    fn test_try_with_options_validates() {
        let options = FieldOptions {
            button_height: 0.0,
            ..FieldOptions::default()
        };
        let err = SecureTextField::try_with_options(&options).unwrap_err();
        assert_eq!(err, SecureFieldError::Options(OptionsError::ZeroButtonHeight.to_string()));
    }

    #[test]
    fn test_swap_notifies_content() {
        let mut field = SecureTextField::new().with_text("hunter2");
        let texts = Arc::new(Mutex::new(Vec::new()));
        let chains = Arc::new(AtomicUsize::new(0));

        let texts_clone = texts.clone();
        field.text_changed.connect(move |text| texts_clone.lock().push(text.clone()));
        let chains_clone = chains.clone();
        field.focus_chain_changed.connect(move |_| {
            chains_clone.fetch_add(1, Ordering::SeqCst);
        });

        field.set_allow_plain_text(true);
        assert_eq!(*texts.lock(), vec!["hunter2".to_string()]);
        // The default button is not focusable, so the order is unchanged.
        assert_eq!(chains.load(Ordering::SeqCst), 0);
        assert!(field.needs_layout());

        field.layout();
        assert!(!field.needs_layout());
    }

    #[test]
    fn test_visibility_signal_and_rejection() {
        let mut field = SecureTextField::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        field.visibility_changed.connect(move |v| seen_clone.lock().push(*v));

        assert_eq!(
            field.set_visibility(Visibility::PlainText),
            Err(SecureFieldError::PlainTextDisallowed)
        );
        assert!(seen.lock().is_empty());

        field.set_allow_plain_text(true);
        field.set_visibility(Visibility::PlainText).unwrap();
        field.set_allow_plain_text(false);
        assert_eq!(*seen.lock(), vec![Visibility::PlainText, Visibility::Secure]);
    }

    #[test]
    fn test_click_toggle_button() {
        let mut field = revealable();
        let rect = field.button_rect().unwrap();
        assert_eq!(rect, Rect::new(172.0, 3.0, 24.0, 24.0));

        click(&mut field, 184.0, 15.0);
        assert_eq!(field.visibility(), Visibility::PlainText);
        assert_eq!(field.toggle_button().unwrap().state(), crate::widget::widgets::ButtonState::On);
        assert_eq!(field.cell_strategy(), CellStrategy::PlainWithReservedSpace);
        // The button took the click; the field did not take focus.
        assert!(!field.has_focus());
    }

    #[test]
    fn test_cursor_over_button() {
        let mut field = revealable();
        assert_eq!(Widget::cursor(&field), CursorShape::IBeam);
        let mut over = WidgetEvent::MouseMove(MouseMoveEvent::new(
            Point::new(180.0, 12.0),
            KeyboardModifiers::NONE,
        ));
        field.event(&mut over);
        assert_eq!(Widget::cursor(&field), CursorShape::Hand);
    }

    #[test]
    fn test_disable_keeps_button() {
        let mut field = revealable();
        field.set_enabled(false);
        assert!(field.has_toggle_button());
        assert!(!field.toggle_button().unwrap().is_enabled());

        click(&mut field, 184.0, 15.0);
        assert_eq!(field.visibility(), Visibility::Secure);
        assert_eq!(field.swap_count(), 0);
    }

    #[test]
    fn test_disable_drops_edit_session() {
        let mut field = SecureTextField::new().with_text("hunter2");
        field.focus_in();
        assert!(field.is_editing());

        field.set_enabled(false);
        assert!(!field.is_editing());
        assert!(!field.insert_text("X"));
        assert!(!field.backspace());
        field.commit_editing();
        assert_eq!(field.text(), "hunter2");

        field.set_allow_plain_text(true);
        assert!(!field.is_editing());
        assert_eq!(field.text(), "hunter2");
    }

    #[test]
    fn test_select_range_and_all() {
        let mut field = SecureTextField::new().with_text("hunter2");
        assert!(field.select_range(0, 3));
        assert!(field.is_editing());
        assert_eq!(field.selected_text(), Some("hun"));

        assert!(field.select_all());
        assert_eq!(field.selected_text(), Some("hunter2"));

        field.set_selectable(false);
        assert!(!field.select_range(0, 1));
    }

    #[test]
    fn test_selection_on_read_only_field_does_not_edit() {
        let mut field = SecureTextField::new().with_text("hunter2");
        field.set_editable(false);
        assert!(field.select_all());
        assert!(!field.insert_text("X"));
        assert!(!field.event(&mut typed("X")));
        assert_eq!(field.text(), "hunter2");
    }

    #[test]
    fn test_typing_and_enter() {
        let mut field = revealable();
        let finished = Arc::new(Mutex::new(Vec::new()));
        let finished_clone = finished.clone();
        field.editing_finished.connect(move |t| finished_clone.lock().push(t.clone()));

        field.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
        assert!(field.is_editing());
        for ch in ["p", "w", "x"] {
            assert!(field.event(&mut typed(ch)));
        }
        assert!(field.event(&mut key(Key::Backspace)));
        assert_eq!(field.editing_text(), Some("pw"));
        assert_eq!(field.text(), "");
        assert_eq!(field.display_text(), "\u{2022}\u{2022}");

        assert!(field.event(&mut key(Key::Enter)));
        assert_eq!(field.text(), "pw");
        assert_eq!(*finished.lock(), vec!["pw".to_string()]);
    }

    #[test]
    fn test_escape_discards_buffer() {
        let mut field = SecureTextField::new().with_text("keep");
        field.focus_in();
        field.insert_text("-lost");
        field.event(&mut key(Key::Escape));
        assert_eq!(field.editing_text(), Some("keep"));
        field.focus_out();
        assert_eq!(field.text(), "keep");
    }

    #[test]
    fn test_continuous_commits_each_keystroke() {
        let mut field = SecureTextField::new();
        field.set_continuous(true);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        field.text_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        field.focus_in();
        field.insert_text("a");
        field.insert_text("b");
        assert_eq!(field.text(), "ab");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_formatter_applies_on_commit() {
        let mut field = SecureTextField::new().with_formatter(Arc::new(MaxLengthFormatter::new(3)));
        field.focus_in();
        field.insert_text("abcdef");
        field.focus_out();
        assert_eq!(field.text(), "abc");
        assert!(!field.is_editing());
    }

    #[test]
    fn test_not_editable_field_does_not_edit() {
        let mut field = SecureTextField::new();
        field.set_editable(false);
        field.focus_in();
        assert!(!field.is_editing());
        assert!(!field.insert_text("x"));
    }

    #[test]
    fn test_paint_draws_cell_then_button() {
        let mut field = revealable().with_text("pw");
        field.layout();
        let mut renderer = RecordingRenderer::new();
        {
            let mut ctx = PaintContext::new(&mut renderer, Rect::new(0.0, 0.0, 200.0, 30.0));
            field.paint(&mut ctx);
        }
        let commands = renderer.commands();
        assert!(matches!(commands.first(), Some(DrawCommand::FillRect { .. })));
        assert!(matches!(commands.last(), Some(DrawCommand::FillPath { .. })));

        // The icon lands inside the button rect.
        if let Some(DrawCommand::FillPath { path, .. }) = commands.last() {
            let bounds = path.control_bounds().unwrap();
            assert!(bounds.left() >= 172.0 - 0.001);
            assert!(bounds.right() <= 196.0 + 0.001);
        }
    }

    #[test]
    fn test_paint_focus_ring() {
        let mut field = SecureTextField::new();
        field.focus_in();
        let mut renderer = RecordingRenderer::new();
        {
            let mut ctx = PaintContext::new(&mut renderer, Rect::new(0.0, 0.0, 100.0, 22.0))
                .with_show_focus(true);
            field.paint(&mut ctx);
        }
        assert!(matches!(
            renderer.commands().last(),
            Some(DrawCommand::StrokeRect { width, .. }) if *width == 2.0
        ));
    }

    #[test]
    fn test_cosmetic_setters_reach_cell() {
        let mut field = SecureTextField::new()
            .with_placeholder("Password")
            .with_alignment(TextAlignment::Center)
            .with_font(Font::system(15.0));
        field.set_bordered(true);
        field.set_bezeled(false);
        field.set_bezel_style(BezelStyle::Rounded);
        field.set_background_style(BackgroundStyle::Raised);
        field.set_draws_background(false);
        field.set_selectable(false);
        field.set_scrollable(false);
        field.set_layout_direction(LayoutDirection::RightToLeft);

        let config = field.cell_config();
        assert_eq!(field.placeholder(), Some("Password"));
        assert_eq!(field.alignment(), TextAlignment::Center);
        assert_eq!(field.font().size(), 15.0);
        assert!(config.bordered && !config.bezeled);
        assert_eq!(config.bezel_style, BezelStyle::Rounded);
        assert_eq!(config.background_style, BackgroundStyle::Raised);
        assert!(!config.draws_background && !config.selectable && !config.scrollable);
        assert_eq!(config.layout_direction, LayoutDirection::RightToLeft);
    }

    #[test]
    fn test_focusable_button_joins_focus_chain() {
        let options = FieldOptions {
            allow_plain_text: true,
            button_focusable: true,
            ..FieldOptions::default()
        };
        let field = SecureTextField::with_options(&options);
        let chain = field.focus_chain();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1], field.toggle_button().unwrap().object_id());
    }

    #[test]
    fn test_focus_chain_signal_only_on_change() {
        let options = FieldOptions {
            button_focusable: true,
            ..FieldOptions::default()
        };
        let mut field = SecureTextField::with_options(&options);
        let chains = Arc::new(Mutex::new(Vec::new()));
        let chains_clone = chains.clone();
        field.focus_chain_changed.connect(move |chain| chains_clone.lock().push(chain.len()));

        field.set_allow_plain_text(true);
        field.set_show_toggle_button(true);
        field.set_show_toggle_button(false);
        assert_eq!(*chains.lock(), vec![2, 1]);
    }
}
