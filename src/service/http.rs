//! reqwest-backed claim service.
//!
//! Posts `{"claim": ...}` as JSON to `{base_url}{endpoint_path}` and reads
//! the configured result field from the JSON reply. Non-2xx responses are
//! failures; their body is logged but never shown to the user.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use super::client::{ClaimService, ServiceError};
use super::types::{ClaimOutcome, ClaimRequest};

pub struct HttpClaimService {
    url: String,
    result_field: String,
    client: reqwest::Client,
}

impl HttpClaimService {
    /// Build a service for `base_url` + `endpoint_path`.
    ///
    /// `timeout` of `None` waits for the service indefinitely.
    pub fn new(
        base_url: &str,
        endpoint_path: &str,
        result_field: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ServiceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Config(e.to_string()))?;

        Ok(Self {
            url: join_url(base_url, endpoint_path),
            result_field: result_field.into(),
            client,
        })
    }
}

fn join_url(base_url: &str, endpoint_path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint_path.trim_start_matches('/')
    )
}

#[async_trait]
impl ClaimService for HttpClaimService {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn submit(&self, claim: &str) -> Result<ClaimOutcome, ServiceError> {
        info!("POST {} (claim_len={})", self.url, claim.len());

        let response = self
            .client
            .post(&self.url)
            .json(&ClaimRequest { claim })
            .send()
            .await?;

        debug!("Claim service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Claim service error: {} - {}", status, err_body);
            return Err(ServiceError::Http { status });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        let outcome = ClaimOutcome::from_body(&body, &self.result_field);
        if outcome.result.is_none() {
            warn!(
                "Claim service response has no '{}' field: {}",
                self.result_field, body
            );
        }
        Ok(outcome)
    }
}
