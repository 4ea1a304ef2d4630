//! # TitleBar Component
//!
//! Top status line: which profile and endpoint are in use, the current
//! status message, and a spinner with the pending count while requests
//! are outstanding.
//!
//! ```text
//! claimcheck [process-claim] http://127.0.0.1:8000/process-claim | ⠙ Processing... (2 pending)
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct TitleBar<'a> {
    pub profile: &'a str,
    pub endpoint: &'a str,
    pub status_message: &'a str,
    pub in_flight: usize,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    fn status_text(&self) -> String {
        match self.in_flight {
            0 => self.status_message.to_string(),
            1 => format!(
                "{} {}",
                SPINNER[self.spinner_frame % SPINNER.len()],
                self.status_message
            ),
            n => format!(
                "{} {} ({} pending)",
                SPINNER[self.spinner_frame % SPINNER.len()],
                self.status_message,
                n
            ),
        }
    }
}

impl<'a> Component for TitleBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("claimcheck ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("[{}] ", self.profile),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(self.endpoint, Style::default().fg(Color::DarkGray)),
        ];

        let status = self.status_text();
        if !status.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(status));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
