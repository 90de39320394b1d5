//! Visibility state and presentation strategy swaps.
//!
//! The [`VisibilityController`] owns everything about a secure field that
//! changes when the password is revealed or hidden: the [`Visibility`] state,
//! the two policy flags, the active [`TextCell`], the open edit session and
//! the embedded [`PasswordButton`].
//!
//! # Policy
//!
//! - While plain text is disallowed the visibility is `Secure`. Clearing the
//!   flag forces it back immediately; asking for `PlainText` while disallowed
//!   is an error and changes nothing.
//! - The button exists exactly when plain text is allowed and the toggle
//!   button is requested. It is built and dropped, never hidden.
//! - Every change of policy or visibility replaces the cell. Content and the
//!   whole [`CellConfig`] carry over; an open edit session does not.
//!
//! # Example
//!
//! ```
//! use secure_field::widget::widgets::{CellStrategy, Visibility, VisibilityController};
//! use secure_field::FieldOptions;
//!
//! let mut controller = VisibilityController::new(&FieldOptions::default());
//! let _ = controller.set_allow_plain_text(true);
//! assert!(controller.has_button());
//!
//! let transition = controller.set_visibility(Visibility::PlainText)?;
//! assert_eq!(transition.visibility, Some(Visibility::PlainText));
//! assert_eq!(controller.cell().strategy(), CellStrategy::PlainWithReservedSpace);
//! # Ok::<(), secure_field::SecureFieldError>(())
//! ```

use secure_field_core::logging::{span_names, targets};
use secure_field_core::{Object, Property, Result, SecureFieldError};
use secure_field_render::Rect;

use super::field_editor::FieldEditor;
use super::password_button::{ButtonState, PasswordButton};
use super::text_cell::{CellConfig, CellStrategy, TextCell};
use crate::options::FieldOptions;
use crate::widget::{
    Anchor, AnchorConstraints, AnchorLine, EnterEvent, LeaveEvent, Widget, WidgetEvent,
};

/// Whether the field shows its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Content is masked.
    #[default]
    Secure,
    /// Content is shown as plain text.
    PlainText,
}

impl Visibility {
    pub fn is_plain_text(self) -> bool {
        self == Self::PlainText
    }
}

impl From<ButtonState> for Visibility {
    fn from(state: ButtonState) -> Self {
        match state {
            ButtonState::On => Self::PlainText,
            ButtonState::Off => Self::Secure,
        }
    }
}

impl From<Visibility> for ButtonState {
    fn from(visibility: Visibility) -> Self {
        ButtonState::from(visibility.is_plain_text())
    }
}

/// Pick the presentation strategy for a combination of state and policy.
pub fn select_strategy(
    visibility: Visibility,
    allow_plain_text: bool,
    show_toggle_button: bool,
) -> CellStrategy {
    match (show_toggle_button, allow_plain_text, visibility) {
        (true, true, Visibility::PlainText) => CellStrategy::PlainWithReservedSpace,
        (true, true, Visibility::Secure) => CellStrategy::MaskedWithReservedSpace,
        (true, false, _) => CellStrategy::Masked,
        (false, _, Visibility::PlainText) => CellStrategy::Plain,
        (false, _, Visibility::Secure) => CellStrategy::Masked,
    }
}

/// The embedded button was built or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonChange {
    Added,
    Removed,
}

/// One cell replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReport {
    pub from: CellStrategy,
    pub to: CellStrategy,
    /// Content written back into the new cell.
    pub restored_content: String,
}

/// Everything a single controller call changed.
///
/// The owning field turns this into notifications and dirty flags.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// The new visibility, if it changed.
    pub visibility: Option<Visibility>,
    pub swap: Option<SwapReport>,
    pub button: Option<ButtonChange>,
    /// An open edit session was dropped without committing.
    pub abandoned_edit: bool,
}

impl Transition {
    /// `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.visibility.is_none() && self.swap.is_none() && self.button.is_none()
    }

    /// Whether layout must be recomputed.
    pub fn needs_layout(&self) -> bool {
        self.swap.is_some() || self.button.is_some()
    }
}

/// Visibility state machine of a secure field.
#[derive(Debug)]
pub struct VisibilityController {
    visibility: Property<Visibility>,
    allow_plain_text: Property<bool>,
    show_toggle_button: Property<bool>,

    cell: TextCell,
    editor: Option<FieldEditor>,
    has_focus: bool,

    button: Option<PasswordButton>,
    button_constraints: AnchorConstraints,

    options: FieldOptions,
    bounds: Rect,
    swap_count: u64,
}

impl VisibilityController {
    /// Create a controller in the `Secure` state.
    ///
    /// The policy flags come from `options`; the initial visibility does not.
    pub fn new(options: &FieldOptions) -> Self {
        let strategy = select_strategy(
            Visibility::Secure,
            options.allow_plain_text,
            options.show_toggle_button,
        );
        let button_constraints = AnchorConstraints::new()
            .with_anchor(Anchor::to_parent(
                AnchorLine::Trailing,
                options.button_trailing_inset,
            ))
            .with_anchor(Anchor::to_parent(AnchorLine::VerticalCenter, 0.0))
            .with_fixed_height(options.button_height)
            .with_aspect_ratio(1.0);

        let mut controller = Self {
            visibility: Property::new(Visibility::Secure),
            allow_plain_text: Property::new(options.allow_plain_text),
            show_toggle_button: Property::new(options.show_toggle_button),
            cell: TextCell::new(strategy, options.reserved_width, options.mask_char),
            editor: None,
            has_focus: false,
            button: None,
            button_constraints,
            options: options.clone(),
            bounds: Rect::ZERO,
            swap_count: 0,
        };
        let _ = controller.sync_button();
        controller.check_invariants();
        controller
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    pub fn allows_plain_text(&self) -> bool {
        self.allow_plain_text.get()
    }

    pub fn shows_toggle_button(&self) -> bool {
        self.show_toggle_button.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.cell.config().enabled
    }

    pub fn cell(&self) -> &TextCell {
        &self.cell
    }

    pub(crate) fn cell_config_mut(&mut self) -> &mut CellConfig {
        self.cell.config_mut()
    }

    pub fn has_button(&self) -> bool {
        self.button.is_some()
    }

    pub fn button(&self) -> Option<&PasswordButton> {
        self.button.as_ref()
    }

    /// Number of cell replacements so far.
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    // =========================================================================
    // Policy and visibility setters
    // =========================================================================

    /// Allow or disallow plain-text display.
    ///
    /// Disallowing forces the visibility to `Secure`. The cell is always
    /// replaced, even if neither flag nor visibility changed.
    pub fn set_allow_plain_text(&mut self, allow: bool) -> Transition {
        let mut transition = Transition::default();
        self.allow_plain_text.set(allow);
        if !allow && self.visibility.set(Visibility::Secure) {
            transition.visibility = Some(Visibility::Secure);
        }
        transition.button = self.sync_button();
        self.swap(&mut transition);
        transition
    }

    /// Request or drop the embedded toggle button.
    ///
    /// The cell is always replaced.
    pub fn set_show_toggle_button(&mut self, show: bool) -> Transition {
        let mut transition = Transition::default();
        self.show_toggle_button.set(show);
        transition.button = self.sync_button();
        self.swap(&mut transition);
        transition
    }

    /// Change the visibility.
    ///
    /// Requesting the current visibility does nothing. Requesting
    /// `PlainText` while plain text is disallowed fails with
    /// [`SecureFieldError::PlainTextDisallowed`] and leaves every piece of
    /// state as it was.
    pub fn set_visibility(&mut self, visibility: Visibility) -> Result<Transition> {
        if visibility == self.visibility.get() {
            return Ok(Transition::default());
        }
        if visibility.is_plain_text() && !self.allow_plain_text.get() {
            tracing::debug!(
                target: targets::VISIBILITY,
                "plain-text visibility rejected while disallowed"
            );
            return Err(SecureFieldError::PlainTextDisallowed);
        }

        self.visibility.set(visibility);
        if let Some(button) = self.button.as_mut() {
            button.set_state(visibility.into());
        }

        let mut transition = Transition {
            visibility: Some(visibility),
            ..Transition::default()
        };
        self.swap(&mut transition);
        Ok(transition)
    }

    /// Enable or disable the field and its button. No swap.
    ///
    /// Disabling drops any open session without committing it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.cell.config_mut().enabled = enabled;
        if !enabled && self.editor.take().is_some() {
            tracing::debug!(target: targets::VISIBILITY, "edit session dropped on disable");
        }
        if let Some(button) = self.button.as_mut() {
            button.set_enabled(enabled);
        }
    }

    /// React to a user click on the button.
    pub fn on_button_toggled(&mut self, state: ButtonState) -> Result<Transition> {
        self.set_visibility(state.into())
    }

    // =========================================================================
    // Button
    // =========================================================================

    /// Build or drop the button so that it exists exactly when plain text is
    /// allowed and the button is requested.
    fn sync_button(&mut self) -> Option<ButtonChange> {
        let wanted = self.allow_plain_text.get() && self.show_toggle_button.get();
        match (wanted, self.button.is_some()) {
            (true, false) => {
                let mut button = PasswordButton::new(self.options.tool_tip.clone())
                    .with_state(self.visibility.get().into());
                button.set_enabled(self.is_enabled());
                button.set_focusable(self.options.button_focusable);
                button.set_geometry(self.button_constraints.resolve(self.bounds, self.direction()));
                tracing::trace!(
                    target: targets::VISIBILITY,
                    button = %button.object_id(),
                    "toggle button attached"
                );
                self.button = Some(button);
                Some(ButtonChange::Added)
            }
            (false, true) => {
                if let Some(button) = self.button.take() {
                    tracing::trace!(
                        target: targets::VISIBILITY,
                        button = %button.object_id(),
                        "toggle button detached"
                    );
                }
                Some(ButtonChange::Removed)
            }
            _ => None,
        }
    }

    fn direction(&self) -> crate::widget::LayoutDirection {
        self.cell.config().layout_direction
    }

    /// Where the button sits in field coordinates, if there is one.
    pub fn button_rect(&self) -> Option<Rect> {
        self.button
            .as_ref()
            .map(|_| self.button_constraints.resolve(self.bounds, self.direction()))
    }

    /// Route a pointer event in field coordinates to the button.
    ///
    /// Hover is derived from the pointer position, so the field only needs
    /// to forward its own move and leave events. A completed click toggles
    /// the visibility and returns the resulting transition.
    pub fn handle_button_event(&mut self, event: &mut WidgetEvent) -> Option<Transition> {
        let rect = self.button_rect()?;
        let local = event.mapped_into(rect.left(), rect.top());
        let button = self.button.as_mut()?;

        let clicked = match &local {
            WidgetEvent::Enter(_) | WidgetEvent::MouseMove(_) => {
                if let Some(pos) = local.local_pos() {
                    let inside = button.widget_base().contains_point(pos);
                    if inside && !button.is_hovered() {
                        button.handle_enter(&EnterEvent::new(pos));
                    } else if !inside && button.is_hovered() {
                        button.handle_leave(&LeaveEvent::new());
                    }
                }
                None
            }
            WidgetEvent::Leave(e) => {
                if button.is_hovered() {
                    button.handle_leave(e);
                }
                None
            }
            WidgetEvent::MousePress(e) => {
                if button.handle_mouse_press(e) {
                    event.accept();
                }
                None
            }
            WidgetEvent::MouseRelease(e) => {
                let state = button.handle_mouse_release(e);
                if state.is_some() {
                    event.accept();
                }
                state
            }
            _ => None,
        };

        let state = clicked?;
        match self.on_button_toggled(state) {
            Ok(transition) => Some(transition),
            Err(err) => {
                tracing::debug!(target: targets::VISIBILITY, %err, "button click not applied");
                let visibility = self.visibility.get();
                if let Some(button) = self.button.as_mut() {
                    button.set_state(visibility.into());
                }
                None
            }
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the field's local bounds and re-place the button.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout_button();
    }

    /// Re-resolve the button constraints against the current bounds.
    pub fn layout_button(&mut self) {
        if let Some(rect) = self.button_rect()
            && let Some(button) = self.button.as_mut()
        {
            button.set_geometry(rect);
        }
    }

    /// The area text is drawn into.
    pub fn text_rect(&self) -> Rect {
        self.cell.text_rect(self.bounds)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Record focus. Losing focus drops any open session.
    pub fn set_focus(&mut self, focused: bool) {
        self.has_focus = focused;
        if !focused {
            self.editor = None;
        }
    }

    /// Open an edit session on the current cell.
    ///
    /// Returns `false` if the cell does not allow editing.
    pub fn begin_editing(&mut self) -> bool {
        if self.editor.is_none() {
            self.editor = self.cell.begin_edit(self.bounds);
        }
        self.editor.is_some()
    }

    /// Open a selection session over `start..end` (byte offsets).
    ///
    /// An open session keeps its buffer and only moves its selection.
    /// Returns `false` if the cell does not allow selection.
    pub fn begin_selection(&mut self, start: usize, end: usize) -> bool {
        if !self.cell.config().selectable || !self.cell.config().enabled {
            return false;
        }
        match self.editor.as_mut() {
            Some(editor) => editor.select(start, end),
            None => self.editor = self.cell.begin_select(self.bounds, start, end),
        }
        self.editor.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&FieldEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut FieldEditor> {
        self.editor.as_mut()
    }

    /// Write the session buffer into the cell and keep the session open.
    ///
    /// Returns the new content if it changed. If the formatter altered or
    /// rejected the buffer, the session is reopened over the stored content.
    pub fn commit_editing(&mut self) -> Option<String> {
        let buffer = self.editor.as_ref()?.text().to_owned();
        let before = self.cell.content().to_owned();
        let accepted = self.cell.set_content(&buffer);

        if accepted && self.cell.content() == buffer {
            if let Some(editor) = self.editor.as_mut() {
                editor.mark_committed();
            }
        } else {
            self.reopen_editor();
        }

        (self.cell.content() != before).then(|| self.cell.content().to_owned())
    }

    /// Close the session, committing it first if `commit` is set.
    pub fn end_editing(&mut self, commit: bool) -> Option<String> {
        let changed = if commit { self.commit_editing() } else { None };
        self.editor = None;
        changed
    }

    /// Replace the content through the formatter.
    ///
    /// An open session is reopened over the new content. Returns the new
    /// content if it changed.
    pub fn set_content(&mut self, text: &str) -> Option<String> {
        let before = self.cell.content().to_owned();
        if !self.cell.set_content(text) || self.cell.content() == before {
            return None;
        }
        if self.editor.is_some() {
            self.editor = self.cell.begin_edit(self.bounds);
        }
        Some(self.cell.content().to_owned())
    }

    fn reopen_editor(&mut self) {
        let caret = self.editor.as_ref().map(FieldEditor::cursor_position);
        self.editor = self.cell.begin_edit(self.bounds);
        if let (Some(editor), Some(caret)) = (self.editor.as_mut(), caret) {
            editor.set_cursor_position(caret);
        }
    }

    // =========================================================================
    // Cell swap
    // =========================================================================

    /// Replace the cell with one using the strategy for the current state.
    fn swap(&mut self, transition: &mut Transition) {
        let from = self.cell.strategy();
        let to = select_strategy(
            self.visibility.get(),
            self.allow_plain_text.get(),
            self.show_toggle_button.get(),
        );
        let span = tracing::debug_span!(
            target: targets::VISIBILITY,
            span_names::CELL_SWAP,
            ?from,
            ?to
        );
        let _guard = span.enter();

        let content = self.cell.content().to_owned();
        let config = self.cell.config().clone();

        // The session belongs to the outgoing cell.
        let caret = self.editor.take().map(|editor| editor.cursor_position());
        transition.abandoned_edit = caret.is_some();

        let mut cell = TextCell::new(to, self.options.reserved_width, self.options.mask_char);
        cell.apply_config(&config);
        cell.restore_content(content.clone());
        self.cell = cell;
        self.swap_count += 1;

        if self.has_focus {
            self.editor = self.cell.begin_edit(self.bounds);
            if let (Some(editor), Some(caret)) = (self.editor.as_mut(), caret) {
                editor.set_cursor_position(caret);
            }
        }
        self.layout_button();

        tracing::debug!(
            target: targets::VISIBILITY,
            swap = self.swap_count,
            abandoned_edit = transition.abandoned_edit,
            "cell swapped"
        );

        debug_assert_eq!(self.cell.content(), content);
        debug_assert!(self.cell.config() == &config);
        self.check_invariants();

        transition.swap = Some(SwapReport {
            from,
            to,
            restored_content: content,
        });
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.allow_plain_text.get() || self.visibility.get() == Visibility::Secure,
            "plain text shown while disallowed"
        );
        debug_assert_eq!(
            self.button.is_some(),
            self.allow_plain_text.get() && self.show_toggle_button.get(),
            "button presence out of sync with policy"
        );
    }
}

#[cfg(test)]
mod tests {
    use secure_field_render::Point;

    use super::*;
    use crate::widget::{
        CursorShape, KeyboardModifiers, MouseButton, MouseMoveEvent, MousePressEvent,
        MouseReleaseEvent,
    };

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 30.0);

    fn revealable() -> VisibilityController {
        let options = FieldOptions::default().with_allow_plain_text(true);
        let mut controller = VisibilityController::new(&options);
        controller.set_bounds(BOUNDS);
        controller
    }

    fn click_at(controller: &mut VisibilityController, x: f32, y: f32) -> Option<Transition> {
        let pos = Point::new(x, y);
        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            pos,
            KeyboardModifiers::NONE,
        ));
        let _ = controller.handle_button_event(&mut press);
        let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            pos,
            KeyboardModifiers::NONE,
        ));
        controller.handle_button_event(&mut release)
    }

    #[test]
    fn test_strategy_table() {
        use CellStrategy::*;
        use Visibility::*;
        assert_eq!(select_strategy(PlainText, true, true), PlainWithReservedSpace);
        assert_eq!(select_strategy(Secure, true, true), MaskedWithReservedSpace);
        assert_eq!(select_strategy(Secure, false, true), Masked);
        assert_eq!(select_strategy(PlainText, true, false), Plain);
        assert_eq!(select_strategy(Secure, true, false), Masked);
        assert_eq!(select_strategy(Secure, false, false), Masked);
    }

    #[test]
    fn test_secure_by_default() {
        let controller = VisibilityController::new(&FieldOptions::default());
        assert_eq!(controller.visibility(), Visibility::Secure);
        assert!(!controller.has_button());
        assert_eq!(controller.cell().strategy(), CellStrategy::Masked);
        assert_eq!(controller.swap_count(), 0);

        let controller = revealable();
        assert!(controller.has_button());
        assert_eq!(controller.visibility(), Visibility::Secure);
        assert_eq!(controller.cell().strategy(), CellStrategy::MaskedWithReservedSpace);
    }

    #[test]
    fn test_allow_plain_text_always_swaps() {
        let mut controller = revealable();
        let transition = controller.set_allow_plain_text(true);
        assert!(transition.swap.is_some());
        assert!(transition.button.is_none());
        assert_eq!(controller.swap_count(), 1);
    }

    #[test]
    fn test_disallow_forces_secure_and_drops_button() {
        let mut controller = revealable();
        let _ = controller.set_visibility(Visibility::PlainText).unwrap();
        let old_button = controller.button().map(|b| b.object_id());

        let transition = controller.set_allow_plain_text(false);
        assert_eq!(transition.visibility, Some(Visibility::Secure));
        assert_eq!(transition.button, Some(ButtonChange::Removed));
        assert_eq!(controller.visibility(), Visibility::Secure);
        assert!(!controller.has_button());
        assert_eq!(controller.cell().strategy(), CellStrategy::Masked);

        // Re-allowing builds a fresh button rather than reviving the old one.
        let transition = controller.set_allow_plain_text(true);
        assert_eq!(transition.button, Some(ButtonChange::Added));
        assert_ne!(controller.button().map(|b| b.object_id()), old_button);
        assert_eq!(controller.button().map(|b| b.state()), Some(ButtonState::Off));
    }

    #[test]
    fn test_plain_text_rejected_while_disallowed() {
        let mut controller = VisibilityController::new(&FieldOptions::default());
        assert_eq!(
            controller.set_visibility(Visibility::PlainText),
            Err(SecureFieldError::PlainTextDisallowed)
        );
        assert_eq!(controller.visibility(), Visibility::Secure);
        assert_eq!(controller.swap_count(), 0);
        assert!(!controller.has_button());
    }

    #[test]
    fn test_repeated_visibility_swaps_once() {
        let mut controller = revealable();
        let first = controller.set_visibility(Visibility::PlainText).unwrap();
        let second = controller.set_visibility(Visibility::PlainText).unwrap();
        assert!(first.swap.is_some());
        assert!(second.is_empty());
        assert_eq!(controller.swap_count(), 1);

        assert!(controller.set_visibility(Visibility::Secure).unwrap().swap.is_some());
        assert!(controller.set_visibility(Visibility::Secure).unwrap().is_empty());
        assert_eq!(controller.swap_count(), 2);
    }

    #[test]
    fn test_hidden_button_uses_unreserved_strategies() {
        let mut controller = revealable();
        let transition = controller.set_show_toggle_button(false);
        assert_eq!(transition.button, Some(ButtonChange::Removed));
        assert_eq!(controller.cell().strategy(), CellStrategy::Masked);

        let _ = controller.set_visibility(Visibility::PlainText).unwrap();
        assert_eq!(controller.cell().strategy(), CellStrategy::Plain);
        assert!(controller.button_rect().is_none());
    }

    #[test]
    fn test_swap_preserves_content_and_config() {
        let mut controller = revealable();
        assert_eq!(controller.set_content("hunter2"), Some("hunter2".into()));
        controller.cell_config_mut().placeholder = Some("Password".into());
        controller.cell_config_mut().bordered = true;
        let config = controller.cell().config().clone();
        let cell_id = controller.cell().object_id();

        let transition = controller.set_visibility(Visibility::PlainText).unwrap();
        let report = transition.swap.unwrap();
        assert_eq!(report.from, CellStrategy::MaskedWithReservedSpace);
        assert_eq!(report.to, CellStrategy::PlainWithReservedSpace);
        assert_eq!(report.restored_content, "hunter2");

        assert_ne!(controller.cell().object_id(), cell_id);
        assert_eq!(controller.cell().content(), "hunter2");
        assert_eq!(controller.cell().config(), &config);
    }

    #[test]
    fn test_swap_abandons_edit_session() {
        let mut controller = revealable();
        let _ = controller.set_content("hunter2");
        controller.set_focus(true);
        assert!(controller.begin_editing());
        controller.editor_mut().unwrap().insert_text("xyz");

        let transition = controller.set_visibility(Visibility::PlainText).unwrap();
        assert!(transition.abandoned_edit);
        assert_eq!(controller.cell().content(), "hunter2");

        // Still focused: a fresh session is open over the committed content.
        let editor = controller.editor().unwrap();
        assert_eq!(editor.text(), "hunter2");
        assert!(!editor.is_masked());
        assert_eq!(editor.cursor_position(), 7);
    }

    #[test]
    fn test_swap_without_focus_leaves_no_session() {
        let mut controller = revealable();
        let transition = controller.set_visibility(Visibility::PlainText).unwrap();
        assert!(!transition.abandoned_edit);
        assert!(!controller.is_editing());
    }

    #[test]
    fn test_commit_editing() {
        let mut controller = revealable();
        controller.set_focus(true);
        assert!(controller.begin_editing());
        controller.editor_mut().unwrap().insert_text("abc");
        assert_eq!(controller.commit_editing(), Some("abc".into()));
        assert_eq!(controller.commit_editing(), None);
        assert!(controller.is_editing());

        controller.editor_mut().unwrap().insert_text("d");
        assert_eq!(controller.end_editing(false), None);
        assert_eq!(controller.cell().content(), "abc");
        assert!(!controller.is_editing());
    }

    #[test]
    fn test_button_click_reveals() {
        let mut controller = revealable();
        assert_eq!(controller.button_rect(), Some(Rect::new(172.0, 3.0, 24.0, 24.0)));

        let transition = click_at(&mut controller, 184.0, 15.0).unwrap();
        assert_eq!(transition.visibility, Some(Visibility::PlainText));
        assert_eq!(controller.visibility(), Visibility::PlainText);
        assert_eq!(controller.button().unwrap().state(), ButtonState::On);
        assert!(!controller.cell().strategy().is_masked());

        let transition = click_at(&mut controller, 184.0, 15.0).unwrap();
        assert_eq!(transition.visibility, Some(Visibility::Secure));
        assert_eq!(controller.button().unwrap().state(), ButtonState::Off);
    }

    #[test]
    fn test_click_outside_button_is_ignored() {
        let mut controller = revealable();
        assert!(click_at(&mut controller, 20.0, 15.0).is_none());
        assert_eq!(controller.visibility(), Visibility::Secure);
    }

    #[test]
    fn test_disabled_button_ignores_clicks() {
        let mut controller = revealable();
        controller.set_enabled(false);
        assert!(!controller.button().unwrap().is_enabled());
        assert!(!controller.cell().config().enabled);
        assert!(click_at(&mut controller, 184.0, 15.0).is_none());
        assert_eq!(controller.visibility(), Visibility::Secure);
        assert_eq!(controller.button().unwrap().state(), ButtonState::Off);
        assert_eq!(controller.swap_count(), 0);
    }

    #[test]
    fn test_disable_drops_open_session() {
        let mut controller = revealable();
        controller.set_focus(true);
        assert!(controller.begin_editing());

        controller.set_enabled(false);
        assert!(!controller.is_editing());
        assert!(!controller.begin_editing());
        assert!(controller.commit_editing().is_none());

        controller.set_enabled(true);
        assert!(controller.begin_editing());
    }

    #[test]
    fn test_begin_selection_respects_flags() {
        let mut controller = revealable();
        let _ = controller.set_content("hunter2");
        assert!(controller.begin_selection(1, 4));
        assert_eq!(controller.editor().unwrap().selected_text(), "unt");

        // An open session keeps its buffer and moves the selection.
        controller.editor_mut().unwrap().insert_text("!");
        assert!(controller.begin_selection(0, 2));
        assert_eq!(controller.editor().unwrap().text(), "h!er2");

        controller.cell_config_mut().selectable = false;
        assert!(!controller.begin_selection(0, 1));
    }

    #[test]
    fn test_hover_follows_pointer() {
        let mut controller = revealable();
        let mut over = WidgetEvent::MouseMove(MouseMoveEvent::new(
            Point::new(180.0, 10.0),
            KeyboardModifiers::NONE,
        ));
        let _ = controller.handle_button_event(&mut over);
        assert!(controller.button().unwrap().is_hovered());
        assert_eq!(controller.button().unwrap().cursor(), CursorShape::Hand);

        let mut away = WidgetEvent::MouseMove(MouseMoveEvent::new(
            Point::new(50.0, 10.0),
            KeyboardModifiers::NONE,
        ));
        let _ = controller.handle_button_event(&mut away);
        assert!(!controller.button().unwrap().is_hovered());
        assert_eq!(controller.button().unwrap().cursor(), CursorShape::Arrow);
    }

    #[test]
    fn test_button_follows_layout_direction() {
        let mut controller = revealable();
        controller.cell_config_mut().layout_direction = crate::widget::LayoutDirection::RightToLeft;
        controller.layout_button();
        assert_eq!(controller.button_rect(), Some(Rect::new(4.0, 3.0, 24.0, 24.0)));
        assert_eq!(
            controller.button().unwrap().geometry(),
            Rect::new(4.0, 3.0, 24.0, 24.0)
        );
    }
}
