//! Pending logout requests.

use serde_json::{Map, Value};

use crate::helpers::{urljoin, with_query};
use crate::http;
use crate::model::{self, Anchor, Bind, Binding, FromPayload};
use crate::types::{Error, HttpMethod, LogoutAcceptParams, RejectParams};

pub(crate) const ENDPOINT: &str = "/oauth2/auth/requests/logout";

/// # LogoutRequest
/// Snapshot of a pending logout flow. Unlike login and consent the fetch
/// response does not echo the challenge back, so the caller-supplied value
/// is injected into the payload before construction.
#[derive(Debug, Clone)]
pub struct LogoutRequest {
    /// Challenge identifying this pending logout, supplied by the caller.
    pub challenge: String,
    /// Original logout request url.
    pub request_url: String,
    /// Whether the logout was initiated by a relying party.
    pub rp_initiated: bool,
    /// Id of the session being ended.
    pub sid: String,
    /// Subject being logged out.
    pub subject: String,
    binding: Binding,
}

impl FromPayload for LogoutRequest {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            challenge: model::required(data, "challenge")?,
            request_url: model::required(data, "request_url")?,
            rp_initiated: model::required(data, "rp_initiated")?,
            sid: model::required(data, "sid")?,
            subject: model::required(data, "subject")?,
            binding: Binding::default(),
        })
    }
}

impl Bind for LogoutRequest {
    fn endpoint(&self) -> &str {
        ENDPOINT
    }

    fn identifier(&self) -> Option<&str> {
        Some(&self.challenge)
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut Binding {
        &mut self.binding
    }
}

impl LogoutRequest {
    pub(crate) async fn get(parent: &Anchor, challenge: &str) -> Result<Self, Error> {
        let url = with_query(
            urljoin(parent.url(), &[ENDPOINT]),
            &[("logout_challenge", Some(challenge))],
        );
        let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
        let mut payload = http::json_object(&response)?;
        // The endpoint does not return the challenge the way login and
        // consent do; round-trip the caller-supplied one.
        payload.insert(
            "challenge".to_string(),
            Value::String(challenge.to_string()),
        );
        let mut request = Self::from_payload(&payload)?;
        request.bind(parent);
        Ok(request)
    }

    /// Accepts the logout and returns the url to redirect the end user to.
    pub async fn accept(&self, params: LogoutAcceptParams) -> Result<String, Error> {
        let url = urljoin(self.binding.url()?, &["accept"]);
        let body = http::json_body(&params)?;
        let response = self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        model::required(&payload, "redirect_to")
    }

    /// Rejects the logout. The endpoint answers 204 without a redirect.
    pub async fn reject(&self, params: RejectParams) -> Result<(), Error> {
        let url = urljoin(self.binding.url()?, &["reject"]);
        let body = http::json_body(&params)?;
        self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        Ok(())
    }
}
