//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::Profile;
use crate::core::profile::ClaimProfile;
use crate::core::state::App;
use crate::service::{ClaimOutcome, ClaimService, ServiceError};

/// A canned claim service that remembers every claim it was given.
pub struct StubService {
    reply: Result<ClaimOutcome, ServiceError>,
    pub claims: Mutex<Vec<String>>,
}

impl StubService {
    pub fn answering(result: &str) -> Self {
        Self::replying(Ok(ClaimOutcome {
            result: Some(result.to_string()),
        }))
    }

    pub fn replying(reply: Result<ClaimOutcome, ServiceError>) -> Self {
        Self {
            reply,
            claims: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ClaimService for StubService {
    fn endpoint(&self) -> &str {
        "stub://claims"
    }

    async fn submit(&self, claim: &str) -> Result<ClaimOutcome, ServiceError> {
        if let Ok(mut claims) = self.claims.lock() {
            claims.push(claim.to_string());
        }
        self.reply.clone()
    }
}

/// Creates a test App for `profile` backed by a StubService.
pub fn test_app(profile: Profile) -> App {
    App::new(
        Arc::new(StubService::answering("stub")),
        ClaimProfile::preset(profile),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_service_records_claims() {
        let service = StubService::answering("TRUE");

        let outcome = tokio_test::block_on(service.submit("claim"));

        assert_eq!(outcome.unwrap().result.as_deref(), Some("TRUE"));
        assert_eq!(*service.claims.lock().unwrap(), vec!["claim".to_string()]);
    }
}
