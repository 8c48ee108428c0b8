use serde::{Deserialize, Serialize};

/// An RFC 7807 problem document, served as `application/problem+json` when a
/// render fails on the server side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProblemDetails {
    /// Problem for an unexpected server-side failure (HTTP 500).
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            kind: "https://tools.ietf.org/html/rfc9110#section-15.6.1".to_string(),
            title: "An error occurred while processing your request.".to_string(),
            status: 500,
            detail: Some(detail.into()),
        }
    }
}
