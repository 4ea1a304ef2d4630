//! # TUI Components
//!
//! Every region of the claimcheck screen is a component.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive all data as struct fields and draw it:
//! - `TitleBar`: profile, endpoint, status and pending count
//! - `OutputPanel`: the latest result, placeholder, or failure text
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep local state and emit events:
//! - `InputBox`: the claim being typed
//! - `HistoryList`: scrollable history rows (state in `HistoryListState`)
//!
//! Components receive external data as props rather than reaching into
//! `App`, so each one can be rendered on a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status line)
//! ├── output_panel.rs   (result view)
//! ├── history_panel.rs  (history list + rows)
//! └── input_box/        (claim input with cursor handling)
//! ```

pub mod history_panel;
pub mod input_box;
pub mod output_panel;
mod title_bar;

pub use history_panel::{HistoryList, HistoryListState};
pub use input_box::{InputBox, InputEvent};
pub use output_panel::OutputPanel;
pub use title_bar::TitleBar;
