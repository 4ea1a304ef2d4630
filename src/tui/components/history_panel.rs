//! # History Panel Component
//!
//! Scrollable list of `(input, output)` pairs recorded this session.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryListState` (scroll position) lives in `TuiState`
//! - `HistoryList` is created each frame with the rows to show
//!
//! The rows come from `HistoryPanel::rows()`, not from the history log
//! directly, so the panel shows exactly what was rendered when it was
//! opened plus whatever was appended while it stayed open.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::history::{EntryKind, HistoryEntry};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Border (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;

const INPUT_LABEL: &str = "Input: ";
const OUTPUT_LABEL: &str = "Output: ";

/// Scroll state for the history list. Must be persisted in `TuiState`.
pub struct HistoryListState {
    pub scroll_state: ScrollViewState,
    /// Follow new rows as they are appended
    pub stick_to_bottom: bool,
    viewport_height: u16,
    content_height: u16,
}

impl Default for HistoryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

impl EventHandler for HistoryListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                let offset = self.scroll_state.offset();
                if offset.y >= self.max_offset() {
                    self.stick_to_bottom = true;
                    self.scroll_state.set_offset(Position {
                        x: offset.x,
                        y: self.max_offset(),
                    });
                }
            }
            _ => {}
        }
        None
    }
}

/// One recorded pair, drawn as a bordered card.
#[derive(Clone, Copy)]
pub struct HistoryRow<'a> {
    pub index: usize,
    pub entry: &'a HistoryEntry,
}

impl<'a> HistoryRow<'a> {
    /// Rendered height at `width`, computed with the same line split and
    /// wrapping the paragraph uses so rows can be laid out before drawing.
    pub fn calculate_height(entry: &HistoryEntry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines: usize = field_lines(INPUT_LABEL, &entry.input)
            .chain(field_lines(OUTPUT_LABEL, &entry.output))
            .map(|line| textwrap::wrap(&line, &options).len().max(1))
            .sum();
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn title(&self) -> String {
        let kind = match self.entry.kind {
            EntryKind::Echo => "echo",
            EntryKind::Result => "result",
        };
        format!(
            " #{} {} {} ",
            self.index + 1,
            self.entry.recorded_at.format("%H:%M:%S"),
            kind
        )
    }
}

impl<'a> Widget for HistoryRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = match self.entry.kind {
            EntryKind::Echo => Style::default().fg(Color::DarkGray),
            EntryKind::Result => Style::default().fg(Color::Blue),
        };
        let label = Style::default().add_modifier(Modifier::BOLD);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title())
            .title_style(border_style)
            .padding(Padding::horizontal(1));

        let mut text = field_text(INPUT_LABEL, &self.entry.input, label.fg(Color::Green));
        text.extend(field_text(
            OUTPUT_LABEL,
            &self.entry.output,
            label.fg(Color::Blue),
        ));

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Physical lines of one labelled field, label prefixed to the first.
fn field_lines<'a>(label: &'a str, text: &'a str) -> impl Iterator<Item = String> + 'a {
    text.split('\n').enumerate().map(move |(i, line)| {
        if i == 0 {
            format!("{label}{line}")
        } else {
            line.to_string()
        }
    })
}

/// Styled counterpart of [`field_lines`]: the label is bold, the recorded
/// text is drawn as-is.
fn field_text<'a>(label: &'a str, text: &'a str, label_style: Style) -> Vec<Line<'a>> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                Line::from(vec![Span::styled(label, label_style), Span::raw(line)])
            } else {
                Line::raw(line)
            }
        })
        .collect()
}

/// Scrollable history view. Created fresh each frame.
pub struct HistoryList<'a> {
    pub state: &'a mut HistoryListState,
    pub rows: &'a [HistoryEntry],
}

impl<'a> HistoryList<'a> {
    pub fn new(state: &'a mut HistoryListState, rows: &'a [HistoryEntry]) -> Self {
        Self { state, rows }
    }
}

impl<'a> Component for HistoryList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" History ({}) ", self.rows.len()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.rows.is_empty() {
            let empty = Paragraph::new("No claims submitted yet.")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(empty, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(1); // scrollbar column
        let heights: Vec<u16> = self
            .rows
            .iter()
            .map(|entry| HistoryRow::calculate_height(entry, content_width))
            .collect();
        let total_height = heights.iter().fold(0u16, |acc, h| acc.saturating_add(*h));

        self.state.viewport_height = inner.height;
        self.state.content_height = total_height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0u16;
        for (index, (entry, height)) in self.rows.iter().zip(&heights).enumerate() {
            // Rows past the end of a saturated canvas have nowhere to go
            if y == u16::MAX {
                break;
            }
            let row_area = Rect::new(0, y, content_width, *height);
            scroll_view.render_widget(HistoryRow { index, entry }, row_area);
            y = y.saturating_add(*height);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
