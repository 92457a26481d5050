//! The display box: editable expression text with a selection span.
//!
//! Selection offsets are in chars. A collapsed selection (start == end) is a
//! plain cursor; a range selection is replaced wholesale by insertions and
//! deletions, the way a text input behaves.

use crate::core::sanitizer;
use crate::core::Operation;

/// Editable display text plus selection state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayBox {
    text: String,
    sel_start: usize,
    sel_end: usize,
    focused: bool,
}

impl DisplayBox {
    /// Creates an empty, unfocused display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selection span in char offsets (start, end)
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        (self.sel_start, self.sel_end)
    }

    /// Whether the input currently has focus
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Focuses the input
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Places the cursor, clamped to the text length, collapsing any range
    pub fn set_cursor(&mut self, pos: usize) {
        let clamped = pos.min(self.char_len());
        self.sel_start = clamped;
        self.sel_end = clamped;
    }

    /// Selects a range, clamped and ordered
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (a, b) = if start <= end { (start, end) } else { (end, start) };
        self.sel_start = a.min(len);
        self.sel_end = b.min(len);
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replaces the current selection with `insert`, collapsing the cursor
    /// just after the inserted text.
    fn splice(&mut self, insert: &str) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut next = String::with_capacity(self.text.len() + insert.len());
        next.extend(&chars[..self.sel_start]);
        next.push_str(insert);
        next.extend(&chars[self.sel_end..]);
        self.text = next;
        let cursor = self.sel_start + insert.chars().count();
        self.sel_start = cursor;
        self.sel_end = cursor;
    }

    /// Inserts a keypad token at the selection.
    ///
    /// A single-char operator is rejected when the char just before the
    /// selection is also an operator, so `5+` followed by `*` stays `5+`.
    /// Multi-char tokens like `mod` bypass the guard.
    pub fn insert_token(&mut self, token: &str) -> bool {
        let mut token_chars = token.chars();
        if let (Some(ch), None) = (token_chars.next(), token_chars.next()) {
            if Operation::from_char(ch).is_some() && self.ends_with_operator() {
                return false;
            }
        }
        self.splice(token);
        true
    }

    fn ends_with_operator(&self) -> bool {
        self.sel_start > 0
            && self
                .text
                .chars()
                .nth(self.sel_start - 1)
                .is_some_and(|prev| Operation::from_char(prev).is_some())
    }

    /// Deletes the selection, or the char before a collapsed cursor
    pub fn backspace(&mut self) {
        if self.sel_start == self.sel_end {
            if self.sel_start == 0 {
                return;
            }
            self.sel_start -= 1;
        }
        self.splice("");
    }

    /// Empties the display unconditionally
    pub fn clear(&mut self) {
        self.text.clear();
        self.sel_start = 0;
        self.sel_end = 0;
    }

    /// Moves a collapsed cursor one char left, clamped at 0
    pub fn move_left(&mut self) {
        let pos = self.sel_start.saturating_sub(1);
        self.set_cursor(pos);
    }

    /// Moves a collapsed cursor one char right, clamped at the text end
    pub fn move_right(&mut self) {
        self.set_cursor(self.sel_end + 1);
    }

    /// Applies a direct edit, stripping disallowed chars.
    ///
    /// Returns true when the candidate needed stripping.
    pub fn apply_edit(&mut self, candidate: &str) -> bool {
        let stripped = sanitizer::strip(candidate);
        let changed = stripped != candidate;
        let cursor = stripped.chars().count();
        self.text = stripped;
        self.sel_start = cursor;
        self.sel_end = cursor;
        changed
    }

    /// Pastes text at the selection, all-or-nothing.
    ///
    /// A candidate containing any disallowed char is rejected outright and
    /// the display is left unchanged.
    pub fn paste(&mut self, candidate: &str) -> bool {
        if !sanitizer::accepts_paste(candidate) {
            return false;
        }
        self.splice(candidate);
        true
    }

    /// Replaces the text, cursor at the end, focused
    pub fn set_text_end(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let end = self.char_len();
        self.sel_start = end;
        self.sel_end = end;
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_appends_at_cursor() {
        let mut d = DisplayBox::new();
        assert!(d.insert_token("5"));
        assert!(d.insert_token("+"));
        assert!(d.insert_token("3"));
        assert_eq!(d.text(), "5+3");
        assert_eq!(d.selection(), (3, 3));
    }

    #[test]
    fn test_operator_after_operator_rejected() {
        let mut d = DisplayBox::new();
        d.insert_token("5");
        d.insert_token("+");
        assert!(!d.insert_token("*"));
        assert_eq!(d.text(), "5+");
    }

    #[test]
    fn test_operator_guard_at_selection_start() {
        let mut d = DisplayBox::new();
        d.set_text_end("5+3");
        d.select(2, 3);
        // Char before the selection is '+', so another operator is refused.
        assert!(!d.insert_token("*"));
        assert_eq!(d.text(), "5+3");
        // A digit replaces the selection normally.
        assert!(d.insert_token("7"));
        assert_eq!(d.text(), "5+7");
    }

    #[test]
    fn test_operator_allowed_at_start() {
        let mut d = DisplayBox::new();
        assert!(d.insert_token("-"));
        assert_eq!(d.text(), "-");
    }

    #[test]
    fn test_multichar_token_bypasses_guard() {
        let mut d = DisplayBox::new();
        d.set_text_end("5+");
        assert!(d.insert_token("mod"));
        assert_eq!(d.text(), "5+mod");
    }

    #[test]
    fn test_insert_replaces_range_selection() {
        let mut d = DisplayBox::new();
        d.set_text_end("123");
        d.select(1, 2);
        assert!(d.insert_token("9"));
        assert_eq!(d.text(), "193");
        assert_eq!(d.selection(), (2, 2));
    }

    #[test]
    fn test_backspace_collapsed() {
        let mut d = DisplayBox::new();
        d.set_text_end("12+3");
        d.backspace();
        assert_eq!(d.text(), "12+");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut d = DisplayBox::new();
        d.set_text_end("12");
        d.set_cursor(0);
        d.backspace();
        assert_eq!(d.text(), "12");
    }

    #[test]
    fn test_backspace_range_deletes_selection() {
        let mut d = DisplayBox::new();
        d.set_text_end("12345");
        d.select(1, 4);
        d.backspace();
        assert_eq!(d.text(), "15");
        assert_eq!(d.selection(), (1, 1));
    }

    #[test]
    fn test_clear() {
        let mut d = DisplayBox::new();
        d.set_text_end("1+1");
        d.clear();
        assert_eq!(d.text(), "");
        assert_eq!(d.selection(), (0, 0));
    }

    #[test]
    fn test_cursor_moves_are_clamped() {
        let mut d = DisplayBox::new();
        d.set_text_end("12");
        d.move_right();
        assert_eq!(d.selection(), (2, 2));
        d.move_left();
        d.move_left();
        d.move_left();
        assert_eq!(d.selection(), (0, 0));
    }

    #[test]
    fn test_apply_edit_strips() {
        let mut d = DisplayBox::new();
        assert!(d.apply_edit("1a+2b"));
        assert_eq!(d.text(), "1+2");
    }

    #[test]
    fn test_apply_edit_clean_reports_unchanged() {
        let mut d = DisplayBox::new();
        assert!(!d.apply_edit("1+2"));
        assert_eq!(d.text(), "1+2");
    }

    #[test]
    fn test_paste_rejects_disallowed() {
        let mut d = DisplayBox::new();
        d.set_text_end("1+");
        assert!(!d.paste("2a"));
        assert_eq!(d.text(), "1+");
    }

    #[test]
    fn test_paste_splices_at_selection() {
        let mut d = DisplayBox::new();
        d.set_text_end("1+4");
        d.select(2, 3);
        assert!(d.paste("(2*3)"));
        assert_eq!(d.text(), "1+(2*3)");
        assert_eq!(d.selection(), (7, 7));
    }

    #[test]
    fn test_set_text_end_focuses() {
        let mut d = DisplayBox::new();
        d.set_text_end("0.5");
        assert!(d.is_focused());
        assert_eq!(d.selection(), (3, 3));
    }
}
