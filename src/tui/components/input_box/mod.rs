//! # InputBox Component
//!
//! The input panel: where a claim is typed before it is submitted.
//!
//! ## Responsibilities
//!
//! - Capture text input and bracketed paste
//! - Handle editing (backspace, delete, left/right, home/end)
//! - Emit `Submit` on Enter for non-blank text, clearing the buffer
//!
//! The buffer is internal state. Whether the box is drawn dimmed is a prop
//! set by the parent while the output panel is in front.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    wrap_line_count, wrap_options,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed on a non-blank claim)
    Submit(String),
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Render without focus styling (Prop)
    pub dimmed: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor: CursorState::new(),
        }
    }

    /// Height needed for the current buffer, clamped to `MAX_VISIBLE_LINES`.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let lines = wrap_line_count(&self.buffer, inner_width(content_width));
        lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn visible_text(&self, content_width: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.buffer.clone();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].join("\n")
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
        Some(InputEvent::ContentChanged)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title("Claim")
            .title_style(style.add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let input = Paragraph::new(self.visible_text(area.width))
            .block(block)
            .style(style);

        frame.render_widget(input, area);

        if !self.dimmed {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    return None;
                }
                let text = std::mem::take(&mut self.buffer);
                self.cursor.reset();
                Some(InputEvent::Submit(text))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(!input.dimmed);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "aé");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = typed("sky blue");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Paste("the ".to_string()));
        assert_eq!(input.buffer, "the sky blue");

        input.handle_event(&TuiEvent::CursorEnd);
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "the sky blu");
    }

    #[test]
    fn test_boundary_moves_report_nothing() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_submit_takes_raw_buffer() {
        let mut input = typed("  the sky is blue ");

        let res = input.handle_event(&TuiEvent::Submit);

        assert_eq!(res, Some(InputEvent::Submit("  the sky is blue ".to_string())));
        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_blank_submit_keeps_buffer() {
        let mut input = typed("   ");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "   ");
    }

    #[test]
    fn test_height_grows_then_clamps() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);

        input.buffer = "a\n".repeat(20);
        assert_eq!(input.calculate_height(40), MAX_VISIBLE_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = typed("sky");

        terminal
            .draw(|f| {
                let area = f.area();
                input.render(f, area);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Claim"));
        assert!(text.contains("sky"));
    }
}
