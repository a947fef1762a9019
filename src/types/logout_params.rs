//! Parameters for accepting a logout request.

use serde::Serialize;
use serde_json::Value;

/// # LogoutAcceptParams
/// Body sent when accepting a logout request. Only explicitly supplied
/// optional fields appear in the request body; `remember` is always sent and
/// defaults to false.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LogoutAcceptParams {
    /// Subject being logged out.
    pub subject: String,
    /// Authentication context class reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acr: Option<String>,
    /// Arbitrary context attached to the logout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    /// Forces a pairwise subject identifier for this subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_subject_identifier: Option<String>,
    /// Whether to remember the session.
    pub remember: bool,
    /// How long to remember, in seconds. Zero remembers forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_for: Option<u32>,
}

impl LogoutAcceptParams {
    /// Params accepting the logout of `subject`, everything else default.
    pub fn subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }
}
