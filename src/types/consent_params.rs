//! Parameters for accepting a consent request.

use serde::Serialize;
use serde_json::Value;

/// # ConsentAcceptParams
/// Body sent when accepting a consent request. Only explicitly supplied
/// optional fields appear in the request body; `remember` is always sent and
/// defaults to false.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ConsentAcceptParams {
    /// Audience the granted access token may be issued for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_access_token_audience: Option<Vec<String>>,
    /// Scope granted by the end user, a subset of the requested scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_scope: Option<Vec<String>>,
    /// Whether to remember this consent and skip the next consent request.
    pub remember: bool,
    /// How long to remember the consent, in seconds. Zero remembers forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember_for: Option<u32>,
    /// Session data passed on to tokens issued under this consent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Value>,
}
