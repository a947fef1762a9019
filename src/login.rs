//! Pending login requests.

use serde_json::{Map, Value};

use crate::helpers::{urljoin, with_query};
use crate::http;
use crate::model::{self, Anchor, Bind, Binding, FromPayload};
use crate::oauth2::OAuth2Client;
use crate::types::{Error, HttpMethod, LoginAcceptParams, OidcContext, RejectParams};

pub(crate) const ENDPOINT: &str = "/oauth2/auth/requests/login";
pub(crate) const SESSION_ENDPOINT: &str = "/oauth2/auth/sessions/login";

/// # LoginRequest
/// Snapshot of a pending login flow, fetched by its challenge and resolved
/// exactly once via [LoginRequest::accept] or [LoginRequest::reject]. The
/// server enforces the single resolution; a second call fails remotely.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Challenge identifying this pending login.
    pub challenge: String,
    /// Client that initiated the flow, bound to this request.
    pub client: OAuth2Client,
    /// OpenID Connect parameters of the authorization request.
    pub oidc_context: OidcContext,
    /// Original authorization request url.
    pub request_url: String,
    /// Audience the client asked tokens to be issued for.
    pub requested_access_token_audience: Vec<String>,
    /// Scope the client asked for.
    pub requested_scope: Vec<String>,
    /// Id of the login session this challenge belongs to.
    pub session_id: String,
    /// Whether the subject already authenticated and login can be skipped.
    pub skip: bool,
    /// Subject of a remembered session; empty on first login.
    pub subject: String,
    binding: Binding,
}

impl FromPayload for LoginRequest {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            challenge: model::required(data, "challenge")?,
            client: model::required_entity(data, "client")?,
            oidc_context: model::required_entity(data, "oidc_context")?,
            request_url: model::required(data, "request_url")?,
            requested_access_token_audience: model::required(
                data,
                "requested_access_token_audience",
            )?,
            requested_scope: model::required(data, "requested_scope")?,
            session_id: model::required(data, "session_id")?,
            skip: model::required(data, "skip")?,
            subject: model::required(data, "subject")?,
            binding: Binding::default(),
        })
    }
}

impl Bind for LoginRequest {
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

    fn bind_children(&mut self, anchor: &Anchor) {
        self.client.bind(anchor);
    }
}

impl LoginRequest {
    pub(crate) async fn get(parent: &Anchor, challenge: &str) -> Result<Self, Error> {
        let url = urljoin(parent.url(), &[ENDPOINT, challenge]);
        let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
        let payload = http::json_object(&response)?;
        let mut request = Self::from_payload(&payload)?;
        request.bind(parent);
        Ok(request)
    }

    /// Accepts the login and returns the url to redirect the end user to.
    pub async fn accept(&self, params: LoginAcceptParams) -> Result<String, Error> {
        let url = urljoin(self.binding.url()?, &["accept"]);
        let body = http::json_body(&params)?;
        let response = self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        model::required(&payload, "redirect_to")
    }

    /// Rejects the login and returns the url to redirect the end user to.
    pub async fn reject(&self, params: RejectParams) -> Result<String, Error> {
        let url = urljoin(self.binding.url()?, &["reject"]);
        let body = http::json_body(&params)?;
        let response = self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        model::required(&payload, "redirect_to")
    }
}

/// Invalidates every remembered login session of `subject`. The server
/// answers 204 without a body.
pub(crate) async fn invalidate_sessions(parent: &Anchor, subject: &str) -> Result<(), Error> {
    let url = with_query(
        urljoin(parent.url(), &[SESSION_ENDPOINT]),
        &[("subject", Some(subject))],
    );
    http::execute(&parent.session, HttpMethod::DELETE, url, None).await?;
    Ok(())
}
