//! Admin facade owning the base url and the shared transport session.

use std::sync::Arc;

use url::Url;

use crate::consent::{ConsentRequest, ConsentSession};
use crate::login::{self, LoginRequest};
use crate::logout::LogoutRequest;
use crate::model::{Anchor, Session};
use crate::oauth2::OAuth2Client;
use crate::types::{ClientParams, Error, HttpClient};
use crate::version;

/// # HydraAdmin
/// Entry point for the admin API. Creates the transport session once at
/// construction; every resource fetched through the facade shares that
/// session by reference, however deep in the graph it was produced.
///
/// The shared session carries no internal locking. Use one facade per thread
/// or add external synchronization when resources derived from the same
/// facade are driven concurrently. Calls are not retried and responses are
/// not cached; each operation is a single round trip.
#[derive(Debug, Clone)]
pub struct HydraAdmin {
    url: Url,
    session: Session,
}

impl HydraAdmin {
    /// Connects the facade to the admin API at `url` using the default
    /// reqwest-backed client.
    #[cfg(feature = "http_client")]
    pub fn new(url: &str) -> Result<Self, Error> {
        Self::with_client(url, crate::http_client::DefaultHttpClient::new()?)
    }

    /// Connects the facade using a caller-supplied transport.
    pub fn with_client(url: &str, client: impl HttpClient + 'static) -> Result<Self, Error> {
        Self::with_session(url, Arc::new(client))
    }

    /// Connects the facade using an already shared transport handle.
    pub fn with_session(url: &str, session: Session) -> Result<Self, Error> {
        let url = Url::parse(url)?;
        if url.cannot_be_a_base() {
            return Err(Error::CannotBeABase);
        }
        Ok(Self { url, session })
    }

    /// Base url of the admin API.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub(crate) fn anchor(&self) -> Anchor {
        Anchor::new(self.session.clone(), self.url.clone())
    }

    /// Fetches the pending login request identified by `challenge`.
    pub async fn login_request(&self, challenge: &str) -> Result<LoginRequest, Error> {
        LoginRequest::get(&self.anchor(), challenge).await
    }

    /// Fetches the pending consent request identified by `challenge`.
    pub async fn consent_request(&self, challenge: &str) -> Result<ConsentRequest, Error> {
        ConsentRequest::get(&self.anchor(), challenge).await
    }

    /// Fetches the pending logout request identified by `challenge`.
    pub async fn logout_request(&self, challenge: &str) -> Result<LogoutRequest, Error> {
        LogoutRequest::get(&self.anchor(), challenge).await
    }

    /// Lists registered OAuth2 clients. `limit` and `offset` are omitted
    /// from the query when unset.
    pub async fn clients(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<OAuth2Client>, Error> {
        OAuth2Client::list(&self.anchor(), limit, offset).await
    }

    /// Fetches one OAuth2 client by id.
    pub async fn client(&self, client_id: &str) -> Result<OAuth2Client, Error> {
        OAuth2Client::get(&self.anchor(), client_id).await
    }

    /// Registers a new OAuth2 client. Only explicitly supplied fields are
    /// sent; the server fills in the rest and returns the canonical
    /// representation.
    pub async fn create_client(&self, params: ClientParams) -> Result<OAuth2Client, Error> {
        OAuth2Client::create(&self.anchor(), params).await
    }

    /// Lists the consents granted by `subject`.
    pub async fn consent_sessions(&self, subject: &str) -> Result<Vec<ConsentSession>, Error> {
        ConsentSession::list(&self.anchor(), subject).await
    }

    /// Revokes the consents `subject` granted, optionally limited to one
    /// client.
    pub async fn revoke_consent_sessions(
        &self,
        subject: &str,
        client: Option<&str>,
    ) -> Result<(), Error> {
        ConsentSession::revoke(&self.anchor(), subject, client).await
    }

    /// Invalidates every remembered login session of `subject`.
    pub async fn invalidate_login_sessions(&self, subject: &str) -> Result<(), Error> {
        login::invalidate_sessions(&self.anchor(), subject).await
    }

    /// Returns the server version string.
    pub async fn version(&self) -> Result<String, Error> {
        version::get(&self.anchor()).await
    }
}
