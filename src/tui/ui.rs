use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Panel};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HistoryList, OutputPanel, TitleBar};

const HELP_TEXT: &str =
    " Enter submit · Ctrl+J newline · Ctrl+O history · Esc back · Ctrl+C quit ";
const INPUT_HINT: &str = "Type a claim and press Enter to check it.";

/// Share of the main area given to the history panel when it is open.
const HISTORY_WIDTH_PERCENT: u16 = 45;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar {
        profile: tui.profile_label,
        endpoint: app.service.endpoint(),
        status_message: &app.status_message,
        in_flight: app.in_flight,
        spinner_frame,
    }
    .render(frame, title_area);

    let panel_area = if app.history_panel.is_visible() {
        let [panel_area, history_area] = Layout::horizontal([
            Percentage(100 - HISTORY_WIDTH_PERCENT),
            Percentage(HISTORY_WIDTH_PERCENT),
        ])
        .areas(main_area);
        HistoryList::new(&mut tui.history_list, app.history_panel.rows())
            .render(frame, history_area);
        panel_area
    } else {
        main_area
    };

    match app.panel {
        Panel::Input => draw_input_panel(frame, panel_area, tui),
        Panel::Output => {
            OutputPanel::new(&app.output, app.is_awaiting(), tui.pulse_value)
                .render(frame, panel_area);
        }
    }

    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_input_panel(frame: &mut Frame, area: Rect, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(area.width);
    let [input_area, hint_area] = Layout::vertical([Length(input_height), Min(0)]).areas(area);

    tui.input_box.render(frame, input_area);

    if tui.input_box.buffer.is_empty() {
        let hint = Paragraph::new(INPUT_HINT).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}
