//! Cursor and internal scroll tracking for the claim input.
//!
//! The text itself is owned by `InputBox`; every method takes it as
//! `buffer: &str`.

use ratatui::layout::Rect;

use super::text_wrap::{
    BORDER_OFFSET, CONTENT_PAD, MAX_VISIBLE_LINES, inner_width, wrap_line_count, wrap_options,
};

pub(super) struct CursorState {
    /// Byte offset into the buffer (always on a char boundary)
    pub pos: usize,
    /// First wrapped line shown when the claim overflows the box
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Wrapped line (0-based) holding the cursor.
    fn line(&self, buffer: &str, width: u16) -> u16 {
        let before = &buffer[..self.pos];
        let lines = textwrap::wrap(before, wrap_options(width));
        let mut line = lines.len().saturating_sub(1) as u16;
        if before.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
            line += 1;
        }
        line
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        if width == 0 || wrap_line_count(buffer, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let line = self.line(buffer, width);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = line + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let origin = (area.x + BORDER_OFFSET + CONTENT_PAD, area.y + BORDER_OFFSET);
        let width = inner_width(area.width);
        if width == 0 {
            return origin;
        }

        let before = &buffer[..self.pos];
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[line_start..];

        // Count chars on the last wrapped segment of the current logical line;
        // textwrap trims trailing spaces so segment lengths can't be trusted.
        let segments = textwrap::wrap(logical, wrap_options(width));
        let column = match segments.split_last() {
            Some((_, earlier)) => {
                let consumed: usize = earlier.iter().map(|s| s.chars().count()).sum();
                logical.chars().count().saturating_sub(consumed) as u16
            }
            None => 0,
        };

        let visible_line = self.line(buffer, width).saturating_sub(self.scroll_offset);
        (origin.0 + column, origin.1 + visible_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16) -> Rect {
        Rect::new(0, 0, width, 10)
    }

    #[test]
    fn test_cursor_at_start() {
        let cursor = CursorState::new();
        assert_eq!(cursor.screen_pos("", area(20)), (2, 1));
    }

    #[test]
    fn test_cursor_after_text() {
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        assert_eq!(cursor.screen_pos("abc", area(20)), (5, 1));
    }

    #[test]
    fn test_cursor_after_newline_moves_down() {
        let mut cursor = CursorState::new();
        let buffer = "ab\n";
        cursor.pos = buffer.len();
        assert_eq!(cursor.screen_pos(buffer, area(20)), (2, 2));
    }

    #[test]
    fn test_scroll_follows_cursor_past_visible_lines() {
        let mut cursor = CursorState::new();
        let buffer = "1\n2\n3\n4\n5\n6\n7\n8";
        cursor.pos = buffer.len();

        cursor.update_scroll_offset(buffer, 20);

        assert_eq!(cursor.scroll_offset, 8 - MAX_VISIBLE_LINES);
    }
}
