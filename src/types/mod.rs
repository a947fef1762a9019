//! # Types Module
//! Request parameter structs, errors and the http client interface.

mod client_params;
mod consent_params;
mod errors;
mod http_client;
mod login_params;
mod logout_params;
mod oidc_context;
mod reject_params;

pub use client_params::ClientParams;
pub use consent_params::ConsentAcceptParams;
pub use errors::{Error, HttpError, HttpErrorKind};
pub use http_client::{
    HttpClient, HttpClientError, HttpClientFuture, HttpMethod, HttpRequest, HttpResponse,
};
pub use login_params::LoginAcceptParams;
pub use logout_params::LogoutAcceptParams;
pub use oidc_context::OidcContext;
pub use reject_params::RejectParams;
