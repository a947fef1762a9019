#![warn(missing_docs)]
//! # Hydra Client
//!
//! Typed client for the ORY Hydra admin API. Remote resources — login,
//! consent and logout requests, OAuth2 client registrations, consent
//! sessions and the server version — are modelled as local values bound to a
//! shared transport session, and every method call is a single http round
//! trip with normalized, typed failures.
//!
//! The transport is pluggable: anything implementing
//! [types::HttpClient] can back a facade, and the `http_client` feature
//! (default) ships a reqwest-based [DefaultHttpClient].
//!
//! ## HydraAdmin
//!
//! - [admin::HydraAdmin::login_request]
//! - [admin::HydraAdmin::consent_request]
//! - [admin::HydraAdmin::logout_request]
//! - [admin::HydraAdmin::clients]
//! - [admin::HydraAdmin::client]
//! - [admin::HydraAdmin::create_client]
//! - [admin::HydraAdmin::consent_sessions]
//! - [admin::HydraAdmin::revoke_consent_sessions]
//! - [admin::HydraAdmin::invalidate_login_sessions]
//! - [admin::HydraAdmin::version]
//!
//! ## Resources
//!
//! - [login::LoginRequest::accept] / [login::LoginRequest::reject]
//! - [consent::ConsentRequest::accept] / [consent::ConsentRequest::reject]
//! - [logout::LogoutRequest::accept] / [logout::LogoutRequest::reject]
//! - [oauth2::OAuth2Client::update] / [oauth2::OAuth2Client::delete]
//!
//! ## Example
//!
//! ```rust,no_run
//! use hydra_client::{HydraAdmin, types::LoginAcceptParams};
//!
//! # async fn run() -> Result<(), hydra_client::types::Error> {
//! let admin = HydraAdmin::new("http://localhost:4445")?;
//! let login = admin.login_request("challenge-token").await?;
//! let redirect_to = login.accept(LoginAcceptParams::subject("user-1")).await?;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod consent;
mod helpers;
mod http;
#[cfg(feature = "http_client")]
mod http_client;
pub mod jwks;
pub mod login;
pub mod logout;
pub mod model;
pub mod oauth2;
#[cfg(test)]
mod tests;
pub mod types;
mod version;

pub use admin::HydraAdmin;
#[cfg(feature = "http_client")]
pub use http_client::DefaultHttpClient;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Value};
    pub use url;
}
