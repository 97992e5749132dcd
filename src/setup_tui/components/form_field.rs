//! Form field component for credential input

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::setup_tui::ui::Styles;

const MASK_CHAR: char = '•';

/// Single-line text input with an optional masked rendering.
///
/// `cursor_position` counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub is_focused: bool,
    pub is_secret: bool,
    pub cursor_position: usize,
}

impl FormField {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            placeholder: String::new(),
            is_focused: false,
            is_secret: false,
            cursor_position: 0,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self.cursor_position = self.char_count();
        self
    }

    pub fn secret(mut self, is_secret: bool) -> Self {
        self.is_secret = is_secret;
        self
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    // The editing operations return true when the value changed.

    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        let at = self.byte_index(self.cursor_position);
        self.value.insert(at, c);
        self.cursor_position += 1;
        true
    }

    pub fn delete_char(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.cursor_position -= 1;
        let at = self.byte_index(self.cursor_position);
        self.value.remove(at);
        true
    }

    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor_position >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor_position);
        self.value.remove(at);
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.value.is_empty();
        self.value.clear();
        self.cursor_position = 0;
        changed
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_position = self.char_count();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Characters as they appear on screen
    fn display_chars(&self, masked: bool) -> Vec<char> {
        if masked {
            vec![MASK_CHAR; self.char_count()]
        } else {
            self.value.chars().collect()
        }
    }

    /// Slice of the value that fits `width` columns with the cursor visible,
    /// plus the cursor column inside that slice
    pub fn visible_window(&self, width: usize, masked: bool) -> (String, usize) {
        let chars = self.display_chars(masked);
        let width = width.max(1);
        let column_of = |range: &[char]| -> usize {
            range.iter().map(|c| c.width().unwrap_or(0)).sum()
        };

        // Drop leading characters until the cursor fits
        let mut start = 0;
        while start < self.cursor_position
            && column_of(&chars[start..self.cursor_position]) >= width
        {
            start += 1;
        }

        let mut shown = String::new();
        let mut used = 0;
        for c in &chars[start..] {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            shown.push(*c);
        }

        let cursor_column = column_of(&chars[start..self.cursor_position]);
        (shown, cursor_column)
    }

    /// Render the form field
    pub fn render(&self, f: &mut Frame, area: Rect, masked: bool) {
        let masked = masked && self.is_secret;
        let inner_width = area.width.saturating_sub(2) as usize;
        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();

        let (display_text, cursor_column) = if showing_placeholder {
            (self.placeholder.clone(), 0)
        } else {
            self.visible_window(inner_width, masked)
        };

        let border_style = if self.is_focused {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        let title = if self.is_secret && !masked {
            format!("{} (visible)", self.label)
        } else {
            self.label.clone()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let text_style = if showing_placeholder {
            Styles::inactive()
        } else {
            Styles::default()
        };

        let paragraph = Paragraph::new(display_text)
            .style(text_style)
            .block(block);

        f.render_widget(paragraph, area);

        if self.is_focused {
            let cursor_x = area.x + 1 + cursor_column as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                f.set_cursor(cursor_x, cursor_y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_moves_cursor() {
        let mut field = FormField::new("Access Key");
        assert!(field.insert_char('a'));
        assert!(field.insert_char('c'));
        field.move_cursor_left();
        assert!(field.insert_char('b'));
        assert_eq!(field.value, "abc");
        assert_eq!(field.cursor_position, 2);

        field.move_cursor_to_start();
        assert!(!field.delete_char());
        assert!(field.delete_char_forward());
        assert_eq!(field.value, "bc");

        field.move_cursor_to_end();
        assert!(!field.delete_char_forward());
        assert!(field.delete_char());
        assert_eq!(field.value, "b");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut field = FormField::new("Encryption Key").with_value("héllo");
        assert_eq!(field.cursor_position, 5);
        field.move_cursor_left();
        field.move_cursor_left();
        field.move_cursor_left();
        assert!(field.delete_char());
        assert_eq!(field.value, "hllo");
        assert!(field.insert_char('ü'));
        assert_eq!(field.value, "hüllo");
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let mut field = FormField::new("Account ID");
        assert!(!field.insert_char('\n'));
        assert!(field.is_empty());
    }

    #[test]
    fn test_clear_reports_change() {
        let mut field = FormField::new("Account ID").with_value("me");
        assert!(field.clear());
        assert!(!field.clear());
        assert_eq!(field.cursor_position, 0);
    }

    #[test]
    fn test_masked_window_hides_value() {
        let field = FormField::new("Secret Key").secret(true).with_value("hunter2");
        let (shown, cursor) = field.visible_window(20, true);
        assert_eq!(shown, "•••••••");
        assert_eq!(cursor, 7);

        let (shown, _) = field.visible_window(20, false);
        assert_eq!(shown, "hunter2");
    }

    #[test]
    fn test_window_scrolls_to_cursor() {
        let field = FormField::new("Access Key").with_value("abcdefghij");
        let (shown, cursor) = field.visible_window(4, false);
        assert_eq!(shown, "hij");
        assert_eq!(cursor, 3);

        let mut field = field;
        field.move_cursor_to_start();
        let (shown, cursor) = field.visible_window(4, false);
        assert_eq!(shown, "abcd");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let field = FormField::new("Account ID").with_value("日本");
        let (shown, cursor) = field.visible_window(10, false);
        assert_eq!(shown, "日本");
        assert_eq!(cursor, 4);
    }
}
