//! # OutputPanel Component
//!
//! Shows the result of the latest claim: the processing placeholder, the
//! echoed claim while it is being typed out, the service's answer, or the
//! failure text. Stateless; all data arrives as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

/// Pulse intensity above which the border is drawn bold while waiting.
const PULSE_BOLD_THRESHOLD: f32 = 0.6;

pub struct OutputPanel<'a> {
    pub text: &'a str,
    /// A request is still outstanding
    pub awaiting: bool,
    /// Current pulse intensity (0.0 to 1.0) for the waiting animation
    pub pulse_value: f32,
}

impl<'a> OutputPanel<'a> {
    pub fn new(text: &'a str, awaiting: bool, pulse_value: f32) -> Self {
        Self {
            text,
            awaiting,
            pulse_value,
        }
    }

    fn border_style(&self) -> Style {
        let base = Style::default().fg(Color::Blue);
        if !self.awaiting {
            return base;
        }
        if self.pulse_value > PULSE_BOLD_THRESHOLD {
            base.add_modifier(Modifier::BOLD)
        } else {
            base.add_modifier(Modifier::DIM)
        }
    }
}

impl<'a> Component for OutputPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = self.border_style();
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Result")
            .title_style(border_style)
            .title_bottom(" Esc new claim ")
            .padding(Padding::horizontal(1));

        let paragraph = Paragraph::new(self.text)
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(panel: &mut OutputPanel) -> String {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                panel.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_text() {
        let mut panel = OutputPanel::new("TRUE", false, 0.0);
        let text = render_to_string(&mut panel);
        assert!(text.contains("Result"));
        assert!(text.contains("TRUE"));
    }

    #[test]
    fn test_border_pulses_only_while_awaiting() {
        let idle = OutputPanel::new("", false, 1.0);
        assert!(!idle.border_style().add_modifier.contains(Modifier::BOLD));

        let busy = OutputPanel::new("", true, 1.0);
        assert!(busy.border_style().add_modifier.contains(Modifier::BOLD));

        let dim = OutputPanel::new("", true, 0.1);
        assert!(dim.border_style().add_modifier.contains(Modifier::DIM));
    }
}
