//! # Application State
//!
//! Core business state for claimcheck. Domain data only; presentation
//! state (input buffer, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn ClaimService>  // remote claim processor
//! ├── profile: ClaimProfile           // endpoint/field/echo settings
//! ├── panel: Panel                    // input or output visible
//! ├── output: String                  // output panel text
//! ├── history: History                // append-only (input, output) log
//! ├── history_panel: HistoryPanel     // visibility + rendered rows
//! ├── reveal: Option<Reveal>          // running echo animation
//! ├── in_flight: usize                // requests awaiting a response
//! └── status_message: String          // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::history::{History, HistoryEntry, HistoryPanel};
use crate::core::profile::ClaimProfile;
use crate::core::reveal::Reveal;
use crate::service::ClaimService;

/// Identifies one accepted submission. Strictly increasing per session.
pub type SubmissionId = u64;

/// Placeholder shown in the output panel while waiting for the service.
pub const PROCESSING_PLACEHOLDER: &str = "Processing...";

/// Which of the two main panels is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Input,
    Output,
}

pub struct App {
    pub service: Arc<dyn ClaimService>,
    pub profile: ClaimProfile,
    pub panel: Panel,
    pub output: String,
    pub history: History,
    pub history_panel: HistoryPanel,
    pub reveal: Option<Reveal>,
    pub in_flight: usize,
    pub status_message: String,
    next_submission: SubmissionId,
}

impl App {
    pub fn new(service: Arc<dyn ClaimService>, profile: ClaimProfile) -> Self {
        Self {
            service,
            profile,
            panel: Panel::Input,
            output: String::new(),
            history: History::new(),
            history_panel: HistoryPanel::default(),
            reveal: None,
            in_flight: 0,
            status_message: String::from("Enter a claim to check"),
            next_submission: 1,
        }
    }

    /// True while at least one request is outstanding.
    pub fn is_awaiting(&self) -> bool {
        self.in_flight > 0
    }

    /// Reserve the id for a new submission.
    pub(crate) fn next_submission_id(&mut self) -> SubmissionId {
        let id = self.next_submission;
        self.next_submission += 1;
        id
    }

    /// Append to the log and, if the history panel is open, to its rows.
    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.history_panel.push_if_visible(&entry);
        self.history.append(entry);
    }
}
