//! Edit sessions.
//!
//! A [`FieldEditor`] is opened by a [`TextCell`](super::TextCell) when the
//! field gains focus and holds a private copy of the content while the user
//! types. Nothing reaches the cell until the owner commits the session;
//! dropping the editor abandons every uncommitted keystroke.
//!
//! Positions are byte offsets into the buffer, always on grapheme cluster
//! boundaries.

use secure_field_render::Rect;
use unicode_segmentation::UnicodeSegmentation;

/// An in-progress edit of a cell's content.
#[derive(Debug, Clone)]
pub struct FieldEditor {
    buffer: String,
    original: String,
    cursor_pos: usize,
    selection_anchor: Option<usize>,
    frame: Rect,
    masked: bool,
    mask_char: char,
}

impl FieldEditor {
    /// Open a session over `content`, with the caret at the end.
    pub fn new(content: &str, frame: Rect, masked: bool, mask_char: char) -> Self {
        Self {
            buffer: content.to_owned(),
            original: content.to_owned(),
            cursor_pos: content.len(),
            selection_anchor: None,
            frame,
            masked,
            mask_char,
        }
    }

    /// The text being edited.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// The text the session was opened with.
    pub fn original_text(&self) -> &str {
        &self.original
    }

    /// Whether the buffer differs from the content the session started with.
    pub fn is_modified(&self) -> bool {
        self.buffer != self.original
    }

    /// The frame the editor was opened in.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    // =========================================================================
    // Cursor and selection
    // =========================================================================

    pub fn cursor_position(&self) -> usize {
        self.cursor_pos
    }

    /// Move the caret, clamping to the buffer and snapping to a grapheme
    /// boundary. Clears the selection.
    pub fn set_cursor_position(&mut self, pos: usize) {
        self.cursor_pos = self.snap_to_grapheme_boundary(pos.min(self.buffer.len()));
        self.selection_anchor = None;
    }

    /// The selected byte range, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor_pos {
            return None;
        }
        Some((anchor.min(self.cursor_pos), anchor.max(self.cursor_pos)))
    }

    /// Select a byte range; endpoints are clamped and snapped.
    pub fn select(&mut self, start: usize, end: usize) {
        let start = self.snap_to_grapheme_boundary(start.min(self.buffer.len()));
        let end = self.snap_to_grapheme_boundary(end.min(self.buffer.len()));
        self.selection_anchor = Some(start);
        self.cursor_pos = end;
    }

    pub fn select_all(&mut self) {
        self.select(0, self.buffer.len());
    }

    pub fn selected_text(&self) -> &str {
        match self.selection() {
            Some((start, end)) => &self.buffer[start..end],
            None => "",
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.selection() {
            self.cursor_pos = start;
        } else {
            self.cursor_pos = self.prev_grapheme_boundary(self.cursor_pos);
        }
        self.selection_anchor = None;
    }

    pub fn move_right(&mut self) {
        if let Some((_, end)) = self.selection() {
            self.cursor_pos = end;
        } else {
            self.cursor_pos = self.next_grapheme_boundary(self.cursor_pos);
        }
        self.selection_anchor = None;
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
        self.selection_anchor = None;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.buffer.len();
        self.selection_anchor = None;
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert text at the caret, replacing the selection.
    pub fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        self.buffer.insert_str(self.cursor_pos, text);
        self.cursor_pos += text.len();
    }

    /// Delete the selection or the grapheme before the caret.
    ///
    /// Returns `true` if anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_grapheme_boundary(self.cursor_pos);
        self.buffer.replace_range(prev..self.cursor_pos, "");
        self.cursor_pos = prev;
        true
    }

    /// Delete the selection or the grapheme after the caret.
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor_pos >= self.buffer.len() {
            return false;
        }
        let next = self.next_grapheme_boundary(self.cursor_pos);
        self.buffer.replace_range(self.cursor_pos..next, "");
        true
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            self.selection_anchor = None;
            return false;
        };
        self.buffer.replace_range(start..end, "");
        self.cursor_pos = start;
        self.selection_anchor = None;
        true
    }

    /// Mark the current buffer as the session's baseline.
    ///
    /// Called after a continuous field pushes a keystroke to its cell.
    pub fn mark_committed(&mut self) {
        self.original.clone_from(&self.buffer);
    }

    /// Text as drawn: one mask glyph per grapheme while masked.
    pub fn display_text(&self) -> String {
        if self.masked {
            let count = self.buffer.graphemes(true).count();
            std::iter::repeat_n(self.mask_char, count).collect()
        } else {
            self.buffer.clone()
        }
    }

    // =========================================================================
    // Grapheme boundaries
    // =========================================================================

    fn prev_grapheme_boundary(&self, pos: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .take_while(|&offset| offset < pos)
            .last()
            .unwrap_or(0)
    }

    fn next_grapheme_boundary(&self, pos: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .map(|(offset, g)| offset + g.len())
            .find(|&end| end > pos)
            .unwrap_or(self.buffer.len())
    }

    fn snap_to_grapheme_boundary(&self, pos: usize) -> usize {
        if pos >= self.buffer.len() {
            return self.buffer.len();
        }
        self.buffer
            .grapheme_indices(true)
            .map(|(offset, _)| offset)
            .take_while(|&offset| offset <= pos)
            .last()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> FieldEditor {
        FieldEditor::new(text, Rect::new(0.0, 0.0, 100.0, 20.0), true, '*')
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut ed = editor("hunter");
        ed.insert_text("2");
        assert_eq!(ed.text(), "hunter2");
        assert!(ed.is_modified());
        assert!(ed.backspace());
        assert_eq!(ed.text(), "hunter");
        assert!(!ed.is_modified());
    }

    #[test]
    fn test_grapheme_aware_editing() {
        let mut ed = editor("ae\u{301}");
        assert_eq!(ed.display_text(), "**");
        ed.move_left();
        assert_eq!(ed.cursor_position(), 1);
        ed.end();
        assert!(ed.backspace());
        assert_eq!(ed.text(), "a");
    }

    #[test]
    fn test_selection_replaced_on_insert() {
        let mut ed = editor("secret");
        ed.select(0, 3);
        assert_eq!(ed.selected_text(), "sec");
        ed.insert_text("X");
        assert_eq!(ed.text(), "Xret");
        assert_eq!(ed.cursor_position(), 1);
        assert!(ed.selection().is_none());
    }

    #[test]
    fn test_delete_forward() {
        let mut ed = editor("abc");
        ed.home();
        assert!(ed.delete_forward());
        assert_eq!(ed.text(), "bc");
        ed.end();
        assert!(!ed.delete_forward());
    }

    #[test]
    fn test_cursor_clamps_and_snaps() {
        let mut ed = editor("ae\u{301}");
        ed.set_cursor_position(99);
        assert_eq!(ed.cursor_position(), 4);
        ed.set_cursor_position(3);
        assert_eq!(ed.cursor_position(), 1);
    }

    #[test]
    fn test_mark_committed() {
        let mut ed = editor("");
        ed.insert_text("a");
        ed.mark_committed();
        assert!(!ed.is_modified());
        assert_eq!(ed.original_text(), "a");
    }

    #[test]
    fn test_plain_display() {
        let ed = FieldEditor::new("pw", Rect::ZERO, false, '*');
        assert_eq!(ed.display_text(), "pw");
    }
}
