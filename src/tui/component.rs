use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A piece of the screen that knows how to draw itself.
///
/// Props arrive as struct fields; persistent presentation state is held
/// by `&mut` reference so `render` can update caches such as scroll
/// offsets during the draw pass (the `StatefulWidget` pattern).
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns raw terminal events into its own higher-level events.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
