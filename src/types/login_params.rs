//! Parameters for accepting a login request.

use serde::Serialize;
use serde_json::Value;

/// # LoginAcceptParams
/// Body sent when accepting a login request. Only explicitly supplied
/// optional fields appear in the request body; `remember` is always sent and
/// defaults to false.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct LoginAcceptParams {
    /// Subject the login is granted for.
    pub subject: String,
    /// Authentication context class reference the login satisfied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acr: Option<String>,
    /// Arbitrary context passed on to the consent request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    /// Forces a pairwise subject identifier for this subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_subject_identifier: Option<String>,
    /// Whether to remember this login and skip the next login request.
    pub remember: bool,
    /// How long to remember the login, in seconds. Zero remembers forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_for: Option<u32>,
}

impl LoginAcceptParams {
    /// Params granting the login to `subject`, everything else default.
    pub fn subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }
}
