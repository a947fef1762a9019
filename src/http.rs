//! Request execution and response plumbing.

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::model::Session;
use crate::types::{Error, HttpClientError, HttpError, HttpMethod, HttpRequest, HttpResponse};

/// Executes exactly one round trip through `session` and normalizes failures:
/// connect/timeout failures become [Error::Connection], other dispatch
/// failures [Error::Transport], and non-2xx statuses [Error::Http].
pub(crate) async fn execute(
    session: &Session,
    method: HttpMethod,
    url: Url,
    body: Option<Value>,
) -> Result<HttpResponse, Error> {
    let mut request = HttpRequest::new(method, url);

    if let Some(json) = body {
        let serialized = serde_json::to_string(&json).map_err(|err| Error::Conversion {
            field: "request",
            message: err.to_string(),
        })?;
        request = request.json(serialized);
    }

    let response = session.request(request).await.map_err(|err| match err {
        HttpClientError::Connection(message) => Error::Connection(message),
        HttpClientError::Request(message) => Error::Transport(message),
    })?;

    if !(200..300).contains(&response.status_code) {
        return Err(HttpError::new(response).into());
    }

    Ok(response)
}

/// Serializes a parameter struct into the request body.
pub(crate) fn json_body<T: Serialize>(params: &T) -> Result<Value, Error> {
    serde_json::to_value(params).map_err(|err| Error::Conversion {
        field: "request",
        message: err.to_string(),
    })
}

fn json_value(response: &HttpResponse) -> Result<Value, Error> {
    let body = response.body.as_deref().ok_or(Error::Conversion {
        field: "response",
        message: "empty body".to_string(),
    })?;
    serde_json::from_str(body).map_err(|err| Error::Conversion {
        field: "response",
        message: err.to_string(),
    })
}

/// Parses the response body as a single json object.
pub(crate) fn json_object(response: &HttpResponse) -> Result<Map<String, Value>, Error> {
    match json_value(response)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::Conversion {
            field: "response",
            message: "expected a json object".to_string(),
        }),
    }
}

/// Parses the response body as an array of json objects.
pub(crate) fn json_array(response: &HttpResponse) -> Result<Vec<Map<String, Value>>, Error> {
    match json_value(response)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                _ => Err(Error::Conversion {
                    field: "response",
                    message: "expected an array of json objects".to_string(),
                }),
            })
            .collect(),
        _ => Err(Error::Conversion {
            field: "response",
            message: "expected a json array".to_string(),
        }),
    }
}
