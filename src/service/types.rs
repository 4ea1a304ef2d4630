use serde::Serialize;
use serde_json::Value;

/// Request body: `{"claim": "<text>"}`.
#[derive(Serialize, Debug, PartialEq)]
pub struct ClaimRequest<'a> {
    pub claim: &'a str,
}

/// What the service said about a claim.
///
/// `result` is `None` when the expected field was absent, `null`, or an
/// empty string. Callers render their own fallback in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub result: Option<String>,
}

impl ClaimOutcome {
    /// Pull `field` out of a JSON response body.
    ///
    /// Strings are taken verbatim; any other JSON value is kept as its
    /// compact JSON text so lists of subclaims still show up.
    pub fn from_body(body: &Value, field: &str) -> Self {
        let result = match body.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self { result }
    }

    pub fn display_text(&self, fallback: &str) -> String {
        self.result
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}
