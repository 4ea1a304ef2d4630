//! # Claim Service
//!
//! The remote side of claimcheck: one JSON POST per claim, one JSON object
//! back. [`ClaimService`] is the seam the rest of the crate talks to;
//! [`HttpClaimService`] is the reqwest implementation.

pub mod client;
pub mod http;
pub mod types;

pub use client::{ClaimService, ServiceError};
pub use http::HttpClaimService;
pub use types::{ClaimOutcome, ClaimRequest};
