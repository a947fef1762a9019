//! OAuth2 client registrations.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::helpers::{urljoin, with_query};
use crate::http;
use crate::jwks::JsonWebKeySet;
use crate::model::{self, Anchor, Bind, Binding, FromPayload};
use crate::types::{ClientParams, Error, HttpMethod};

pub(crate) const ENDPOINT: &str = "/clients";

/// # OAuth2Client
/// A client application registered with the server. Fetched through
/// [`HydraAdmin`](crate::admin::HydraAdmin) or embedded in login and consent
/// requests, where it is bound to the embedding request rather than to the
/// facade.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    /// Origins allowed to make CORS requests on behalf of the client.
    pub allowed_cors_origins: Vec<String>,
    /// Audience the client is allowed to request tokens for.
    pub audience: Vec<String>,
    /// Whether the back-channel logout token carries a session id.
    pub backchannel_logout_session_required: bool,
    /// Back-channel logout endpoint of the client.
    pub backchannel_logout_uri: String,
    /// Client id.
    pub client_id: String,
    /// Human readable client name.
    pub client_name: String,
    /// Client secret; only returned on create.
    pub client_secret: Option<String>,
    /// Secret expiry; the unix epoch means no expiry.
    pub client_secret_expires_at: DateTime<Utc>,
    /// Homepage of the client.
    pub client_uri: String,
    /// Contact addresses of the people responsible for the client.
    pub contacts: Vec<String>,
    /// Whether the front-channel logout request carries a session id.
    pub frontchannel_logout_session_required: bool,
    /// Front-channel logout endpoint of the client.
    pub frontchannel_logout_uri: String,
    /// Grant types the client may use.
    pub grant_types: Vec<String>,
    /// Key set registered inline, when there is one.
    pub jwks: Option<JsonWebKeySet>,
    /// Url the client's key set can be fetched from; empty when unset.
    pub jwks_uri: String,
    /// Logo of the client.
    pub logo_uri: String,
    /// Owner of the client registration.
    pub owner: String,
    /// Privacy policy of the client.
    pub policy_uri: String,
    /// Urls the end user may be redirected to after logout.
    pub post_logout_redirect_uris: Vec<String>,
    /// Allowed redirect urls of the client.
    pub redirect_uris: Vec<String>,
    /// Algorithm request objects from this client must be signed with.
    pub request_object_signing_alg: Option<String>,
    /// Pre-registered request object urls; empty when unset.
    pub request_uris: Vec<String>,
    /// Response types the client may use.
    pub response_types: Vec<String>,
    /// Space separated scope the client may request.
    pub scope: String,
    /// Url used to derive pairwise subject identifiers.
    pub sector_identifier_uri: Option<String>,
    /// Subject identifier type: `public` or `pairwise`.
    pub subject_type: String,
    /// How the client authenticates at the token endpoint.
    pub token_endpoint_auth_method: String,
    /// Terms of service of the client.
    pub tos_uri: String,
    /// Last modification time of the registration.
    pub updated_at: DateTime<Utc>,
    /// Algorithm userinfo responses for this client are signed with.
    pub userinfo_signed_response_alg: String,
    binding: Binding,
}

impl FromPayload for OAuth2Client {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            allowed_cors_origins: model::required(data, "allowed_cors_origins")?,
            audience: model::required(data, "audience")?,
            backchannel_logout_session_required: model::optional_or_default(
                data,
                "backchannel_logout_session_required",
            )?,
            backchannel_logout_uri: model::optional_or_default(data, "backchannel_logout_uri")?,
            client_id: model::required(data, "client_id")?,
            client_name: model::required(data, "client_name")?,
            client_secret: model::optional(data, "client_secret")?,
            client_secret_expires_at: model::required_timestamp(data, "client_secret_expires_at")?,
            client_uri: model::required(data, "client_uri")?,
            contacts: model::required(data, "contacts")?,
            frontchannel_logout_session_required: model::optional_or_default(
                data,
                "frontchannel_logout_session_required",
            )?,
            frontchannel_logout_uri: model::optional_or_default(data, "frontchannel_logout_uri")?,
            grant_types: model::required(data, "grant_types")?,
            jwks: model::optional_entity(data, "jwks")?,
            jwks_uri: model::optional_or_default(data, "jwks_uri")?,
            logo_uri: model::required(data, "logo_uri")?,
            owner: model::required(data, "owner")?,
            policy_uri: model::required(data, "policy_uri")?,
            post_logout_redirect_uris: model::optional_or_default(
                data,
                "post_logout_redirect_uris",
            )?,
            redirect_uris: model::optional_or_default(data, "redirect_uris")?,
            request_object_signing_alg: model::optional(data, "request_object_signing_alg")?,
            request_uris: model::optional_or_default(data, "request_uris")?,
            response_types: model::required(data, "response_types")?,
            scope: model::required(data, "scope")?,
            sector_identifier_uri: model::optional(data, "sector_identifier_uri")?,
            subject_type: model::required(data, "subject_type")?,
            token_endpoint_auth_method: model::required(data, "token_endpoint_auth_method")?,
            tos_uri: model::required(data, "tos_uri")?,
            updated_at: model::required(data, "updated_at")?,
            userinfo_signed_response_alg: model::required(data, "userinfo_signed_response_alg")?,
            binding: Binding::default(),
        })
    }
}

impl Bind for OAuth2Client {
    fn endpoint(&self) -> &str {
        ENDPOINT
    }

    fn identifier(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut Binding {
        &mut self.binding
    }
}

impl OAuth2Client {
    pub(crate) async fn list(
        parent: &Anchor,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Self>, Error> {
        let limit = limit.map(|v| v.to_string());
        let offset = offset.map(|v| v.to_string());
        let url = with_query(
            urljoin(parent.url(), &[ENDPOINT]),
            &[("limit", limit.as_deref()), ("offset", offset.as_deref())],
        );
        let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
        let mut clients = http::json_array(&response)?
            .iter()
            .map(Self::from_payload)
            .collect::<Result<Vec<_>, _>>()?;
        model::bind_all(&mut clients, parent);
        Ok(clients)
    }

    pub(crate) async fn create(parent: &Anchor, params: ClientParams) -> Result<Self, Error> {
        let url = urljoin(parent.url(), &[ENDPOINT]);
        let body = http::json_body(&params)?;
        let response = http::execute(&parent.session, HttpMethod::POST, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        let mut client = Self::from_payload(&payload)?;
        client.bind(parent);
        Ok(client)
    }

    pub(crate) async fn get(parent: &Anchor, client_id: &str) -> Result<Self, Error> {
        let url = urljoin(parent.url(), &[ENDPOINT, client_id]);
        let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
        let payload = http::json_object(&response)?;
        let mut client = Self::from_payload(&payload)?;
        client.bind(parent);
        Ok(client)
    }

    /// Puts `params` and replaces this instance with the canonical
    /// post-update representation, re-running every field conversion and
    /// re-binding to the same parent. Only explicitly supplied fields are
    /// sent. A failed update leaves the local state untouched.
    pub async fn update(&mut self, params: ClientParams) -> Result<(), Error> {
        let url = self.binding.url()?.clone();
        let body = http::json_body(&params)?;
        let response = self.binding.request(HttpMethod::PUT, url, Some(body)).await?;
        let payload = http::json_object(&response)?;
        let mut fresh = Self::from_payload(&payload)?;
        fresh.bind(&self.binding.parent()?);
        *self = fresh;
        Ok(())
    }

    /// Deletes the registration. The local value stays usable for
    /// inspection; further remote operations on it fail with not-found.
    pub async fn delete(&self) -> Result<(), Error> {
        let url = self.binding.url()?.clone();
        self.binding.request(HttpMethod::DELETE, url, None).await?;
        Ok(())
    }
}
