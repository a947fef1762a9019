//! OpenID Connect context echoed back with login and consent requests.

use serde_json::{Map, Value};

use crate::model::{self, FromPayload};
use crate::types::Error;

/// Optional OpenID Connect request parameters the end user's authorization
/// request carried. Plain data, no transport binding. Every field defaults
/// to empty when the server omits it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OidcContext {
    /// Requested authentication context class reference values.
    pub acr_values: Vec<String>,
    /// Requested display mode, e.g. `page` or `popup`.
    pub display: String,
    /// Claims of the id token hint, when one was passed.
    pub id_token_hint_claims: Map<String, Value>,
    /// Login hint, e.g. a username the client pre-filled.
    pub login_hint: String,
    /// Requested ui locales.
    pub ui_locales: Vec<String>,
}

impl FromPayload for OidcContext {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            acr_values: model::optional_or_default(data, "acr_values")?,
            display: model::optional_or_default(data, "display")?,
            id_token_hint_claims: model::optional_or_default(data, "id_token_hint_claims")?,
            login_hint: model::optional_or_default(data, "login_hint")?,
            ui_locales: model::optional_or_default(data, "ui_locales")?,
        })
    }
}
