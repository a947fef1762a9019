use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt,
    future,
};

use assert_json_diff::assert_json_eq;
use serde_json::Value;
use url::Url;

use crate::types::{
    HttpClient, HttpClientError, HttpClientFuture, HttpMethod, HttpRequest, HttpResponse,
};

pub struct TestHttpReqRes {
    pub url: Url,
    pub method: HttpMethod,
    pub body: Option<String>,

    pub response_body: Option<String>,
    pub response_status_code: u16,
    pub response_content_type: Option<String>,
    pub error: Option<HttpClientError>,
}

impl TestHttpReqRes {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Url::parse(&url.into()).unwrap(),
            method: HttpMethod::GET,
            body: None,
            response_body: None,
            response_status_code: 200,
            response_content_type: None,
            error: None,
        }
    }

    pub fn assert_request_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn assert_request_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn set_response_body(mut self, response_body: impl Into<String>) -> Self {
        self.response_body = Some(response_body.into());
        self
    }

    pub fn set_response_status_code(mut self, response_status_code: u16) -> Self {
        self.response_status_code = response_status_code;
        self
    }

    pub fn set_error(mut self, error: HttpClientError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn build(self) -> TestHttpClient {
        TestHttpClient::new().add(self)
    }
}

pub struct TestHttpClient {
    req_res: RefCell<VecDeque<TestHttpReqRes>>,
}

impl TestHttpClient {
    pub fn new() -> Self {
        Self {
            req_res: RefCell::new(VecDeque::with_capacity(5)),
        }
    }

    pub fn add(mut self, req_res: TestHttpReqRes) -> Self {
        self.req_res.get_mut().push_back(req_res);
        self
    }

    pub fn assert(&self) {
        assert!(
            self.req_res.borrow().is_empty(),
            "All requests not fullfilled"
        );
    }
}

unsafe impl Sync for TestHttpClient {}

impl fmt::Debug for TestHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestHttpClient").finish()
    }
}

impl HttpClient for TestHttpClient {
    fn request(&self, req: HttpRequest) -> HttpClientFuture<'_> {
        let req_res = self
            .req_res
            .borrow_mut()
            .pop_front()
            .expect("unexpected request");

        if let Some(error) = req_res.error {
            return Box::pin(future::ready(Err(error)));
        }

        assert_eq!(req.url, req_res.url);
        assert_eq!(req.method, req_res.method);

        match (&req.body, &req_res.body) {
            (Some(actual), Some(expected)) => {
                let actual: Value = serde_json::from_str(actual).unwrap();
                let expected: Value = serde_json::from_str(expected).unwrap();
                assert_json_eq!(actual, expected);
            }
            _ => assert_eq!(req.body, req_res.body),
        }

        Box::pin(future::ready(Ok(HttpResponse {
            status_code: req_res.response_status_code,
            content_type: req_res.response_content_type,
            body: req_res.response_body,
        })))
    }
}
