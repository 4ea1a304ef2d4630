use std::fmt;

use async_trait::async_trait;

use super::types::ClaimOutcome;

/// Errors that can occur while submitting a claim.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Client misconfigured (bad URL, TLS backend failure).
    Config(String),
    /// Network-level failure (DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status. The body is only logged.
    Http { status: u16 },
    /// A success response whose body was not valid JSON.
    Parse(String),
    /// The configured request timeout elapsed.
    Timeout,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Config(msg) => write!(f, "config error: {msg}"),
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Http { status } => write!(f, "HTTP error! status: {status}"),
            ServiceError::Parse(msg) => write!(f, "parse error: {msg}"),
            ServiceError::Timeout => write!(f, "request timed out"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServiceError::Timeout
        } else if e.is_decode() {
            ServiceError::Parse(e.to_string())
        } else if e.is_builder() {
            ServiceError::Config(e.to_string())
        } else {
            ServiceError::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait ClaimService: Send + Sync {
    /// Full URL claims are posted to (for the title bar and logs).
    fn endpoint(&self) -> &str;

    /// Submit one claim and wait for the service's answer.
    async fn submit(&self, claim: &str) -> Result<ClaimOutcome, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_contains_status() {
        let e = ServiceError::Http { status: 503 };
        assert_eq!(e.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn test_network_error_display() {
        let e = ServiceError::Network("connection refused".to_string());
        assert!(e.to_string().contains("connection refused"));
    }
}
