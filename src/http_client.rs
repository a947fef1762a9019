//! Default Http Client

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Method, Response};

use crate::types::{
    Error, HttpClient, HttpClientError, HttpClientFuture, HttpMethod, HttpRequest, HttpResponse,
};

/// The default HttpClient. Holds one connection-reusing [reqwest::Client]
/// built at construction, so every request issued through one admin facade
/// shares the same pool.
#[derive(Debug)]
pub struct DefaultHttpClient {
    client: reqwest::Client,
}

impl DefaultHttpClient {
    /// Builds the underlying reqwest client with a 10 second connect
    /// timeout.
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    async fn to_response(response: Response) -> HttpResponse {
        let status_code = response.status().as_u16();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(|s| s.to_string());

        let body = match response.text().await {
            Ok(text) if !text.is_empty() => Some(text),
            _ => None,
        };

        HttpResponse {
            status_code,
            content_type,
            body,
        }
    }
}

impl HttpClient for DefaultHttpClient {
    fn request(&self, req: HttpRequest) -> HttpClientFuture<'_> {
        Box::pin(async move {
            let method = match req.method {
                HttpMethod::GET => Method::GET,
                HttpMethod::POST => Method::POST,
                HttpMethod::PUT => Method::PUT,
                HttpMethod::DELETE => Method::DELETE,
            };

            let mut req_builder = self.client.request(method, req.url);

            if let Some(body) = req.body {
                req_builder = req_builder.body(body);
            }

            for (name, values) in req.headers {
                for value in values {
                    req_builder = req_builder.header(name.clone(), value);
                }
            }

            req_builder = req_builder.header("User-Agent", "hydra-client (rust)");

            match req_builder.send().await {
                Ok(res) => Ok(Self::to_response(res).await),
                Err(e) if e.is_connect() || e.is_timeout() => {
                    Err(HttpClientError::Connection(e.to_string()))
                }
                Err(e) => Err(HttpClientError::Request(e.to_string())),
            }
        })
    }
}
