//! Pending consent requests and granted consent sessions.

use serde_json::{Map, Value};

use crate::helpers::{urljoin, with_query};
use crate::http;
use crate::model::{self, Anchor, Bind, Binding, FromPayload};
use crate::oauth2::OAuth2Client;
use crate::types::{ConsentAcceptParams, Error, HttpMethod, OidcContext, RejectParams};

pub(crate) const ENDPOINT: &str = "/oauth2/auth/requests/consent";
pub(crate) const SESSION_ENDPOINT: &str = "/oauth2/auth/sessions/consent";

/// # ConsentRequest
/// Snapshot of a pending consent flow, fetched by its challenge and resolved
/// exactly once via [ConsentRequest::accept] or [ConsentRequest::reject].
/// The embedded [OAuth2Client] is bound to this request, not to the facade,
/// while sharing the facade's session.
#[derive(Debug, Clone)]
pub struct ConsentRequest {
    /// Authentication context class reference the preceding login satisfied.
    pub acr: String,
    /// Challenge identifying this pending consent.
    pub challenge: String,
    /// Client consent is asked for, bound to this request.
    pub client: OAuth2Client,
    /// Context the login provider attached when accepting the login.
    pub context: Option<Value>,
    /// Challenge of the login request that preceded this consent.
    pub login_challenge: String,
    /// Id of the login session this consent belongs to.
    pub login_session_id: String,
    /// OpenID Connect parameters of the authorization request.
    pub oidc_context: OidcContext,
    /// Original authorization request url.
    pub request_url: String,
    /// Audience the client asked tokens to be issued for.
    pub requested_access_token_audience: Vec<String>,
    /// Scope the client asked for.
    pub requested_scope: Vec<String>,
    /// Whether a remembered consent covers this request already.
    pub skip: bool,
    /// Subject granting the consent.
    pub subject: String,
    binding: Binding,
}

impl FromPayload for ConsentRequest {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            acr: model::required(data, "acr")?,
            challenge: model::required(data, "challenge")?,
            client: model::required_entity(data, "client")?,
            context: model::optional(data, "context")?,
            login_challenge: model::required(data, "login_challenge")?,
            login_session_id: model::required(data, "login_session_id")?,
            oidc_context: model::required_entity(data, "oidc_context")?,
            request_url: model::required(data, "request_url")?,
            requested_access_token_audience: model::required(
                data,
                "requested_access_token_audience",
            )?,
            requested_scope: model::required(data, "requested_scope")?,
            skip: model::required(data, "skip")?,
            subject: model::required(data, "subject")?,
            binding: Binding::default(),
        })
    }
}

impl Bind for ConsentRequest {
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

impl ConsentRequest {
    pub(crate) async fn get(parent: &Anchor, challenge: &str) -> Result<Self, Error> {
        let url = urljoin(parent.url(), &[ENDPOINT, challenge]);
        let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
        let payload = http::json_object(&response)?;
        let mut request = Self::from_payload(&payload)?;
        request.bind(parent);
        Ok(request)
    }

    /// Accepts the consent and returns the url to redirect the end user to.
    pub async fn accept(&self, params: ConsentAcceptParams) -> Result<String, Error> {
        let url = urljoin(self.binding.url()?, &["accept"]);
        let body = http::json_body(&params)?;
        let response = self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        model::required(&payload, "redirect_to")
    }

    /// Rejects the consent and returns the url to redirect the end user to.
    pub async fn reject(&self, params: RejectParams) -> Result<String, Error> {
        let url = urljoin(self.binding.url()?, &["reject"]);
        let body = http::json_body(&params)?;
        let response = self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        model::required(&payload, "redirect_to")
    }
}

/// # ConsentSession
/// A previously granted consent, as listed per subject. Read-only
/// projection; the embedded [ConsentRequest] is bound to this session.
#[derive(Debug, Clone)]
pub struct ConsentSession {
    /// The consent request this grant answered.
    pub consent_request: ConsentRequest,
    /// Audience the granted access token may be issued for.
    pub grant_access_token_audience: Vec<String>,
    /// Scope the end user granted.
    pub grant_scope: Vec<String>,
    /// Whether the consent is remembered.
    pub remember: bool,
    /// How long the consent is remembered, in seconds. Zero means forever.
    pub remember_for: i64,
    /// Session data attached to tokens issued under this consent.
    pub session: Option<Value>,
    binding: Binding,
}

impl FromPayload for ConsentSession {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            consent_request: model::required_entity(data, "consent_request")?,
            grant_access_token_audience: model::required(data, "grant_access_token_audience")?,
            grant_scope: model::required(data, "grant_scope")?,
            remember: model::required(data, "remember")?,
            remember_for: model::required(data, "remember_for")?,
            session: model::optional(data, "session")?,
            binding: Binding::default(),
        })
    }
}

impl Bind for ConsentSession {
    fn endpoint(&self) -> &str {
        SESSION_ENDPOINT
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut Binding {
        &mut self.binding
    }

    fn bind_children(&mut self, anchor: &Anchor) {
        self.consent_request.bind(anchor);
    }
}

impl ConsentSession {
    /// Lists the consents granted by `subject`. Single page; the server does
    /// not expose pagination links for this endpoint.
    pub(crate) async fn list(parent: &Anchor, subject: &str) -> Result<Vec<Self>, Error> {
        let url = with_query(
            urljoin(parent.url(), &[SESSION_ENDPOINT]),
            &[("subject", Some(subject))],
        );
        let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
        let mut sessions = http::json_array(&response)?
            .iter()
            .map(Self::from_payload)
            .collect::<Result<Vec<_>, _>>()?;
        model::bind_all(&mut sessions, parent);
        Ok(sessions)
    }

    /// Revokes the consents `subject` granted, optionally limited to one
    /// client. The server answers 204 without a body.
    pub(crate) async fn revoke(
        parent: &Anchor,
        subject: &str,
        client: Option<&str>,
    ) -> Result<(), Error> {
        let url = with_query(
            urljoin(parent.url(), &[SESSION_ENDPOINT]),
            &[("subject", Some(subject)), ("client", client)],
        );
        http::execute(&parent.session, HttpMethod::DELETE, url, None).await?;
        Ok(())
    }
}
