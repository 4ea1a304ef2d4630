//! # Claim Profiles
//!
//! The client talks to two flavours of claim service. They differ only in
//! which endpoint is hit, which response field carries the answer, whether
//! the claim is trimmed before sending, and whether the raw claim is echoed
//! back with a typing effect while the request is in flight.
//!
//! A `ClaimProfile` captures those differences as data. The two presets
//! come from [`Profile`]; config file and CLI overrides are layered on top
//! in [`crate::core::config::resolve`].

use std::time::Duration;

use crate::Profile;
use crate::service::ServiceError;

pub const DEFAULT_FALLBACK_RESULT: &str = "No result returned";
pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 100;
const SUBCLAIMS_ERROR_MESSAGE: &str =
    "There was an error processing your request. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
pub struct ClaimProfile {
    pub endpoint_path: String,
    pub result_field: String,
    /// Send (and record) the trimmed claim instead of the raw input.
    pub trim_claim: bool,
    /// Echo the claim into the output panel and history before the service answers.
    pub echo_reveal: bool,
    pub reveal_interval: Duration,
    /// Shown when the response lacks the result field.
    pub fallback_result: String,
    /// Fixed failure text. `None` renders `Error: <reason>`.
    pub error_message: Option<String>,
}

impl ClaimProfile {
    pub fn preset(profile: Profile) -> Self {
        match profile {
            Profile::ProcessClaim => Self {
                endpoint_path: "/process-claim".to_string(),
                result_field: "final_result".to_string(),
                trim_claim: true,
                echo_reveal: false,
                reveal_interval: Duration::from_millis(DEFAULT_REVEAL_INTERVAL_MS),
                fallback_result: DEFAULT_FALLBACK_RESULT.to_string(),
                error_message: None,
            },
            Profile::Subclaims => Self {
                endpoint_path: "/generate_subclaims".to_string(),
                result_field: "verified_subclaims".to_string(),
                trim_claim: false,
                echo_reveal: true,
                reveal_interval: Duration::from_millis(DEFAULT_REVEAL_INTERVAL_MS),
                fallback_result: DEFAULT_FALLBACK_RESULT.to_string(),
                error_message: Some(SUBCLAIMS_ERROR_MESSAGE.to_string()),
            },
        }
    }

    /// The text to submit for `raw` input, or `None` when it is blank.
    pub fn claim_text(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.trim_claim {
            Some(trimmed.to_string())
        } else {
            Some(raw.to_string())
        }
    }

    /// Output panel text for a failed submission.
    pub fn failure_text(&self, error: &ServiceError) -> String {
        match &self.error_message {
            Some(message) => message.clone(),
            None => format!("Error: {error}"),
        }
    }
}
