//! Character-by-character reveal of an echoed claim in the output panel.
//!
//! Purely cosmetic. The reducer advances it one character per
//! `RevealTick`; the timer that produces those ticks lives in the TUI.

use crate::core::state::SubmissionId;

#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub submission: SubmissionId,
    text: Vec<char>,
    revealed: usize,
}

impl Reveal {
    pub fn new(submission: SubmissionId, text: &str) -> Self {
        Self {
            submission,
            text: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Returns the next hidden character, or `None` once everything is shown.
    pub fn advance(&mut self) -> Option<char> {
        let next = self.text.get(self.revealed).copied()?;
        self.revealed += 1;
        Some(next)
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.text.len()
    }
}
