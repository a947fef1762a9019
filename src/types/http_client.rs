//! # Http Client Interface for Custom Http Clients

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use url::Url;

/// The Http methods used by the admin API.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// The GET method is used to retrieve a resource from the server.
    #[default]
    GET,
    /// The POST method is used to create a resource on the server.
    POST,
    /// The PUT method is used to replace a resource on the server.
    PUT,
    /// The DELETE method is used to delete a resource from the server.
    DELETE,
}

/// # Request
/// Request is an internal struct used to create the admin API requests.
#[derive(Debug)]
pub struct HttpRequest {
    /// Url of the request, query included
    pub url: Url,
    /// Http method of the request
    pub method: HttpMethod,
    /// Headers that are sent in the request
    pub headers: HashMap<String, Vec<String>>,
    /// The request body to be sent
    pub body: Option<String>,
}

impl HttpRequest {
    pub(crate) fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            url,
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub(crate) fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();

        if let Some(values) = self.headers.get_mut(&name) {
            values.push(value);
        } else {
            self.headers.insert(name, vec![value]);
        }
        self
    }

    pub(crate) fn json(self, json: String) -> Self {
        self.header("content-type", "application/json").body(json)
    }

    pub(crate) fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// Represents an HTTP response received from the server.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code of the response (e.g., 200 for success, 404 for Not Found).
    pub status_code: u16,
    /// The content type header
    pub content_type: Option<String>,
    /// The optional body content of the response. None if there is no body content (String).
    pub body: Option<String>,
}

/// Failure produced by an [HttpClient] before any response was received.
#[derive(Debug, Clone)]
pub enum HttpClientError {
    /// The connection could not be established or timed out.
    Connection(String),
    /// The request could not be built or dispatched.
    Request(String),
}

/// Future returned by [HttpClient::request].
pub type HttpClientFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError>> + Send + 'a>>;

/// This trait defines the interface for making HTTP requests used by the library.
/// Users who need custom HTTP clients need to implement this trait.
///
/// The boxed future keeps the trait object-safe, so one client instance can be
/// shared as a [`Session`](crate::model::Session) by every resource bound
/// below an admin facade.
pub trait HttpClient: Debug + Send + Sync {
    /// Makes an HTTP request using the provided [HttpRequest] object.
    ///
    /// Connection-level failures (connect, timeout) must be reported as
    /// [HttpClientError::Connection]; anything else that prevented a response
    /// as [HttpClientError::Request]. Error statuses are not failures at this
    /// level: return the [HttpResponse] and let the caller map the status.
    fn request(&self, req: HttpRequest) -> HttpClientFuture<'_>;
}
