//! Presentation strategies for the field's content.
//!
//! A [`TextCell`] owns the committed content and the cosmetic configuration
//! of a field and knows how to draw it and how to open an edit session over
//! it. The [`CellStrategy`] it was built with is fixed for its lifetime: a
//! field that changes between masked and plain presentation builds a new cell
//! and transfers state into it rather than mutating the old one.

use std::sync::Arc;

use secure_field_core::logging::targets;
use secure_field_core::{Object, ObjectId};
use secure_field_render::{Color, Font, Point, Rect, Renderer};
use unicode_segmentation::UnicodeSegmentation;

use super::field_editor::FieldEditor;
use crate::widget::{Formatter, LayoutDirection, TextAlignment, apply_formatter};

/// Inset between a border or bezel and the text.
const FRAME_INSET: f32 = 2.0;

/// Approximate advance per grapheme, as a fraction of the font size.
///
/// Used to place aligned text; shaping is the renderer's business.
const ADVANCE_FACTOR: f32 = 0.6;

const BACKGROUND: Color = Color::WHITE;
const DISABLED_BACKGROUND: Color = Color::from_rgb(0.96, 0.96, 0.96);
const BORDER: Color = Color::BLACK;
const BEZEL: Color = Color::GRAY;
const TEXT: Color = Color::BLACK;
const DISABLED_TEXT: Color = Color::GRAY;
const PLACEHOLDER: Color = Color::LIGHT_GRAY;

/// How a cell presents its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStrategy {
    /// Mask glyphs over the full frame.
    #[default]
    Masked,
    /// Mask glyphs, keeping trailing space free for the toggle button.
    MaskedWithReservedSpace,
    /// Literal text over the full frame.
    Plain,
    /// Literal text, keeping trailing space free for the toggle button.
    PlainWithReservedSpace,
}

impl CellStrategy {
    pub fn is_masked(self) -> bool {
        matches!(self, Self::Masked | Self::MaskedWithReservedSpace)
    }

    pub fn reserves_space(self) -> bool {
        matches!(self, Self::MaskedWithReservedSpace | Self::PlainWithReservedSpace)
    }
}

/// Bezel drawn around a bezeled field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BezelStyle {
    #[default]
    Square,
    Rounded,
}

/// Background style token used by hosts when theming the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundStyle {
    #[default]
    Normal,
    Emphasized,
    Raised,
    Lowered,
}

/// Every cosmetic attribute of a cell.
///
/// Two configurations are equal when all attributes match and both refer to
/// the same formatter instance (or neither has one).
#[derive(Debug, Clone)]
pub struct CellConfig {
    pub enabled: bool,
    pub editable: bool,
    pub selectable: bool,
    pub scrollable: bool,
    /// Push every keystroke to the content instead of waiting for commit.
    pub continuous: bool,
    pub placeholder: Option<String>,
    pub font: Font,
    pub bordered: bool,
    pub bezeled: bool,
    pub bezel_style: BezelStyle,
    pub background_style: BackgroundStyle,
    pub draws_background: bool,
    pub alignment: TextAlignment,
    pub formatter: Option<Arc<dyn Formatter>>,
    pub layout_direction: LayoutDirection,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            editable: true,
            selectable: true,
            scrollable: true,
            continuous: false,
            placeholder: None,
            font: Font::default(),
            bordered: false,
            bezeled: true,
            bezel_style: BezelStyle::Square,
            background_style: BackgroundStyle::Normal,
            draws_background: true,
            alignment: TextAlignment::Natural,
            formatter: None,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }
}

impl PartialEq for CellConfig {
    fn eq(&self, other: &Self) -> bool {
        let same_formatter = match (&self.formatter, &other.formatter) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_formatter
            && self.enabled == other.enabled
            && self.editable == other.editable
            && self.selectable == other.selectable
            && self.scrollable == other.scrollable
            && self.continuous == other.continuous
            && self.placeholder == other.placeholder
            && self.font == other.font
            && self.bordered == other.bordered
            && self.bezeled == other.bezeled
            && self.bezel_style == other.bezel_style
            && self.background_style == other.background_style
            && self.draws_background == other.draws_background
            && self.alignment == other.alignment
            && self.layout_direction == other.layout_direction
    }
}

/// Content, configuration and presentation strategy of a field.
#[derive(Debug)]
pub struct TextCell {
    id: ObjectId,
    strategy: CellStrategy,
    config: CellConfig,
    content: String,
    reserved_width: f32,
    mask_char: char,
}

impl TextCell {
    /// Create an empty cell with default configuration.
    ///
    /// `reserved_width` is only used by the reserved-space strategies.
    pub fn new(strategy: CellStrategy, reserved_width: f32, mask_char: char) -> Self {
        Self {
            id: ObjectId::next(),
            strategy,
            config: CellConfig::default(),
            content: String::new(),
            reserved_width,
            mask_char,
        }
    }

    pub fn strategy(&self) -> CellStrategy {
        self.strategy
    }

    pub fn config(&self) -> &CellConfig {
        &self.config
    }

    pub fn reserved_width(&self) -> f32 {
        self.reserved_width
    }

    pub fn mask_char(&self) -> char {
        self.mask_char
    }

    /// Copy every cosmetic attribute from `source`.
    pub fn apply_config(&mut self, source: &CellConfig) {
        // Destructured so that a new attribute cannot be silently skipped.
        let CellConfig {
            enabled,
            editable,
            selectable,
            scrollable,
            continuous,
            placeholder,
            font,
            bordered,
            bezeled,
            bezel_style,
            background_style,
            draws_background,
            alignment,
            formatter,
            layout_direction,
        } = source;

        self.config.enabled = *enabled;
        self.config.editable = *editable;
        self.config.selectable = *selectable;
        self.config.scrollable = *scrollable;
        self.config.continuous = *continuous;
        self.config.placeholder.clone_from(placeholder);
        self.config.font.clone_from(font);
        self.config.bordered = *bordered;
        self.config.bezeled = *bezeled;
        self.config.bezel_style = *bezel_style;
        self.config.background_style = *background_style;
        self.config.draws_background = *draws_background;
        self.config.alignment = *alignment;
        self.config.formatter.clone_from(formatter);
        self.config.layout_direction = *layout_direction;

        tracing::trace!(target: targets::CELL, cell = %self.id, "cell configuration applied");
    }

    /// Mutable access for single-attribute setters on the owning field.
    pub(crate) fn config_mut(&mut self) -> &mut CellConfig {
        &mut self.config
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set content through the formatter.
    ///
    /// Returns `false` if the formatter rejected the input, in which case
    /// the content is left untouched.
    pub fn set_content(&mut self, input: &str) -> bool {
        let accepted = match &self.config.formatter {
            Some(formatter) => apply_formatter(formatter.as_ref(), input),
            None => Some(input.to_owned()),
        };
        match accepted {
            Some(value) => {
                self.content = value;
                true
            }
            None => {
                tracing::debug!(target: targets::CELL, cell = %self.id, "formatter rejected content");
                false
            }
        }
    }

    /// Put back content taken from another cell, bypassing the formatter.
    ///
    /// The content already passed the same formatter when it was committed.
    pub fn restore_content(&mut self, content: String) {
        self.content = content;
    }

    /// Text as drawn: one mask glyph per grapheme when masked.
    pub fn display_text(&self) -> String {
        display_for(self.strategy, &self.content, self.mask_char)
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The frame left for text once reserved space is taken out.
    ///
    /// Space is reserved on the trailing side, which is the left side in
    /// right-to-left layout.
    pub fn adjusted_frame(&self, frame: Rect) -> Rect {
        if !self.strategy.reserves_space() {
            return frame;
        }
        let reserved = self.reserved_width.min(frame.width());
        let width = frame.width() - reserved;
        let x = if self.config.layout_direction.is_right_to_left() {
            frame.left() + reserved
        } else {
            frame.left()
        };
        Rect::new(x, frame.top(), width, frame.height())
    }

    /// The area text is drawn into, inside any border or bezel.
    pub fn text_rect(&self, frame: Rect) -> Rect {
        let adjusted = self.adjusted_frame(frame);
        if self.config.bordered || self.config.bezeled {
            adjusted.deflate(FRAME_INSET)
        } else {
            adjusted
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw background, border and text.
    ///
    /// While an edit session is open its buffer is drawn instead of the
    /// committed content.
    pub fn draw(&self, renderer: &mut dyn Renderer, frame: Rect, editor: Option<&FieldEditor>) {
        let config = &self.config;

        // The full frame, including any reserved strip, gets the background.
        if config.draws_background {
            let background = if config.enabled { BACKGROUND } else { DISABLED_BACKGROUND };
            renderer.fill_rect(frame, background);
        }
        if config.bezeled {
            renderer.stroke_rect(frame, BEZEL, 1.0);
        } else if config.bordered {
            renderer.stroke_rect(frame, BORDER, 1.0);
        }

        let text_rect = self.text_rect(frame);
        let (text, color) = match editor {
            Some(editor) => (display_for(self.strategy, editor.text(), self.mask_char), TEXT),
            None if self.content.is_empty() => match &config.placeholder {
                Some(placeholder) => (placeholder.clone(), PLACEHOLDER),
                None => (String::new(), TEXT),
            },
            None => (self.display_text(), TEXT),
        };
        if text.is_empty() || text_rect.is_empty() {
            return;
        }
        let color = if config.enabled { color } else { DISABLED_TEXT };

        renderer.save();
        renderer.clip_rect(text_rect);
        let origin = self.text_origin(text_rect, &text);
        renderer.draw_text(&text, origin, &config.font, color);
        renderer.restore();
    }

    fn text_origin(&self, text_rect: Rect, text: &str) -> Point {
        let font = &self.config.font;
        let width = text.graphemes(true).count() as f32 * font.size() * ADVANCE_FACTOR;
        let slack = (text_rect.width() - width).max(0.0);
        let x = match self.config.alignment.resolve(self.config.layout_direction) {
            TextAlignment::Right => text_rect.left() + slack,
            TextAlignment::Center => text_rect.left() + slack / 2.0,
            _ => text_rect.left(),
        };
        let y = text_rect.top() + ((text_rect.height() - font.line_height()) / 2.0).max(0.0);
        Point::new(x, y)
    }

    // =========================================================================
    // Edit sessions
    // =========================================================================

    /// Open an edit session over the committed content.
    ///
    /// Returns `None` if the cell is not editable or disabled.
    pub fn begin_edit(&self, frame: Rect) -> Option<FieldEditor> {
        if !self.config.editable || !self.config.enabled {
            return None;
        }
        Some(FieldEditor::new(
            &self.content,
            self.text_rect(frame),
            self.strategy.is_masked(),
            self.mask_char,
        ))
    }

    /// Open a session with a byte range selected.
    ///
    /// Selection is allowed on selectable cells even when they are not
    /// editable.
    pub fn begin_select(&self, frame: Rect, start: usize, end: usize) -> Option<FieldEditor> {
        if !self.config.selectable || !self.config.enabled {
            return None;
        }
        let mut editor = FieldEditor::new(
            &self.content,
            self.text_rect(frame),
            self.strategy.is_masked(),
            self.mask_char,
        );
        editor.select(start, end);
        Some(editor)
    }
}

impl Object for TextCell {
    fn object_id(&self) -> ObjectId {
        self.id
    }
}

fn display_for(strategy: CellStrategy, text: &str, mask_char: char) -> String {
    if strategy.is_masked() {
        std::iter::repeat_n(mask_char, text.graphemes(true).count()).collect()
    } else {
        text.to_owned()
    }
}
