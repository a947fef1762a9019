//! Server version endpoint.

use serde_json::{Map, Value};

use crate::helpers::urljoin;
use crate::http;
use crate::model::{self, Anchor, FromPayload};
use crate::types::{Error, HttpMethod};

pub(crate) const ENDPOINT: &str = "/version";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Version {
    pub version: String,
}

impl FromPayload for Version {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            version: model::required(data, "version")?,
        })
    }
}

pub(crate) async fn get(parent: &Anchor) -> Result<String, Error> {
    let url = urljoin(parent.url(), &[ENDPOINT]);
    let response = http::execute(&parent.session, HttpMethod::GET, url, None).await?;
    let payload = http::json_object(&response)?;
    Ok(Version::from_payload(&payload)?.version)
}
