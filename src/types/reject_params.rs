//! Parameters for rejecting a pending request.

use serde::Serialize;

/// # RejectParams
/// Error description sent when rejecting a login, consent or logout request.
/// Every field is optional and omitted from the body when unset.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RejectParams {
    /// Error id, e.g. `access_denied`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Debug information, never shown to the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_debug: Option<String>,
    /// Human readable description shown to the end user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// Hint on how to resolve the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_hint: Option<String>,
    /// Status code the error page responds with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl RejectParams {
    /// Params rejecting with `error` and a description.
    pub fn error(error: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            error_description: Some(description.into()),
            ..Self::default()
        }
    }
}
