//! claimcheck library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod service;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which flavour of claim service to talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// `/process-claim`, answers with `final_result`.
    #[default]
    ProcessClaim,
    /// `/generate_subclaims`, answers with `verified_subclaims` and echoes the claim.
    Subclaims,
}

impl Profile {
    pub fn label(&self) -> &'static str {
        match self {
            Profile::ProcessClaim => "process-claim",
            Profile::Subclaims => "subclaims",
        }
    }
}
