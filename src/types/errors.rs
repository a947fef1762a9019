//! Error types returned to the end user of this library.

use thiserror::Error;

use super::http_client::HttpResponse;

/// Status codes the admin API is known to answer with. Anything not in the
/// map stays [HttpErrorKind::Other] rather than being treated as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 500
    ServerError,
    /// Any other non-2xx status.
    Other,
}

impl HttpErrorKind {
    fn from_status(status: u16) -> Self {
        match status {
            400 => HttpErrorKind::BadRequest,
            401 => HttpErrorKind::Unauthorized,
            403 => HttpErrorKind::Forbidden,
            404 => HttpErrorKind::NotFound,
            500 => HttpErrorKind::ServerError,
            _ => HttpErrorKind::Other,
        }
    }
}

/// An error status returned by the admin API.
#[derive(Debug, Clone, Error)]
#[error("server responded with status {status}")]
pub struct HttpError {
    /// Mapped status kind.
    pub kind: HttpErrorKind,
    /// Raw status code.
    pub status: u16,
    /// The full response, kept for diagnostics.
    pub response: HttpResponse,
}

impl HttpError {
    pub(crate) fn new(response: HttpResponse) -> Self {
        Self {
            kind: HttpErrorKind::from_status(response.status_code),
            status: response.status_code,
            response,
        }
    }
}

/// # Error
/// Error that will be returned to the end user of this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was attempted on a resource that was never bound to a
    /// parent and therefore has no transport session.
    #[error("resource is not bound to a transport session")]
    Unbound,

    /// The connection could not be established or timed out.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request could not be built or dispatched at all.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server responded with a 4xx/5xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The admin base url did not parse.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The admin base url cannot serve as a base for resource paths.
    #[error("admin url cannot be a base")]
    CannotBeABase,

    /// A required field was absent from a server payload.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A present field could not be converted to its declared type.
    #[error("malformed value for `{field}`: {message}")]
    Conversion {
        /// Field (or payload section) that failed to convert.
        field: &'static str,
        /// Underlying conversion failure.
        message: String,
    },
}

impl Error {
    /// Mapped status kind when this is an http error.
    pub fn http_kind(&self) -> Option<HttpErrorKind> {
        match self {
            Error::Http(err) => Some(err.kind),
            _ => None,
        }
    }
}
