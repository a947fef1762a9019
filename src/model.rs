//! Entity and resource binding model.
//!
//! Entities are plain values parsed from an untyped json payload: unknown
//! keys are ignored, missing required fields fail construction. Resources are
//! entities that additionally carry a [Binding] — the shared transport
//! session and the url the instance resolves to — inherited from the parent
//! they were bound to. The session is created once by the
//! [`HydraAdmin`](crate::admin::HydraAdmin) facade and propagated by
//! reference down the graph; no resource creates its own.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::helpers::urljoin;
use crate::http;
use crate::types::{Error, HttpClient, HttpMethod, HttpResponse};

/// Shared transport handle. Cloning shares the underlying client.
pub type Session = Arc<dyn HttpClient>;

/// A location in the resource graph a child can bind below: the shared
/// session plus the url child urls are derived from. Stands in for the
/// parent back-reference without forming a cyclic graph.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub(crate) session: Session,
    pub(crate) url: Url,
}

impl Anchor {
    pub(crate) fn new(session: Session, url: Url) -> Self {
        Self { session, url }
    }

    /// Url children derive their own urls from.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Transport binding of a resource. A value parsed from a payload starts out
/// unbound; [Bind::bind] attaches it. Network operations on an unbound
/// resource fail with [Error::Unbound].
#[derive(Debug, Clone, Default)]
pub struct Binding {
    bound: Option<Bound>,
}

#[derive(Debug, Clone)]
struct Bound {
    session: Session,
    url: Url,
    parent_url: Url,
}

impl Binding {
    /// Whether this resource was attached to a parent.
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Resolved url of this resource, computed at bind time.
    pub fn url(&self) -> Result<&Url, Error> {
        self.bound.as_ref().map(|b| &b.url).ok_or(Error::Unbound)
    }

    pub(crate) fn session(&self) -> Result<&Session, Error> {
        self.bound.as_ref().map(|b| &b.session).ok_or(Error::Unbound)
    }

    /// Anchor of the parent this resource was bound to. Used to re-parent a
    /// freshly parsed representation after an update.
    pub(crate) fn parent(&self) -> Result<Anchor, Error> {
        let bound = self.bound.as_ref().ok_or(Error::Unbound)?;
        Ok(Anchor::new(bound.session.clone(), bound.parent_url.clone()))
    }

    pub(crate) fn attach(&mut self, session: Session, url: Url, parent_url: Url) {
        self.bound = Some(Bound {
            session,
            url,
            parent_url,
        });
    }

    /// One round trip through the bound session.
    pub(crate) async fn request(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<Value>,
    ) -> Result<HttpResponse, Error> {
        let session = self.session()?;
        http::execute(session, method, url, body).await
    }
}

/// Construction from an untyped json payload.
///
/// Implementations read only their declared fields; extra keys the server
/// may add in later versions are ignored.
pub trait FromPayload: Sized {
    /// Builds the value from `data`, converting each declared field.
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error>;
}

/// Attaching a resource to a parent: propagates the session, derives the
/// resource url and recursively binds embedded resources.
pub trait Bind {
    /// Path of this resource family, relative to its parent url.
    fn endpoint(&self) -> &str;

    /// Instance identifier appended after the endpoint, when the instance
    /// has one (a client id, a challenge).
    fn identifier(&self) -> Option<&str> {
        None
    }

    /// The transport binding of this resource.
    fn binding(&self) -> &Binding;

    /// Mutable access used by [Bind::bind].
    fn binding_mut(&mut self) -> &mut Binding;

    /// Hook for resources that embed further bindable values. `anchor` is
    /// this resource, already bound: embedded resources are parented to it,
    /// not to its parent.
    fn bind_children(&mut self, _anchor: &Anchor) {}

    /// Resolved url of this resource.
    fn url(&self) -> Result<&Url, Error> {
        self.binding().url()
    }

    /// Binds this resource to `parent`. Idempotent for the same parent;
    /// binding to a different parent rewrites session, url and parent link.
    fn bind(&mut self, parent: &Anchor) {
        let base = urljoin(&parent.url, &[self.endpoint()]);
        let url = match self.identifier() {
            Some(id) => urljoin(&base, &[id]),
            None => base,
        };
        let anchor = Anchor::new(parent.session.clone(), url);
        self.binding_mut()
            .attach(anchor.session.clone(), anchor.url.clone(), parent.url.clone());
        self.bind_children(&anchor);
    }
}

/// Binds every element to the same parent. Binding a collection is the same
/// as binding each element individually.
pub(crate) fn bind_all<T: Bind>(items: &mut [T], parent: &Anchor) {
    for item in items {
        item.bind(parent);
    }
}

fn convert<T: DeserializeOwned>(value: &Value, field: &'static str) -> Result<T, Error> {
    serde_json::from_value(value.clone()).map_err(|err| Error::Conversion {
        field,
        message: err.to_string(),
    })
}

/// Required field: absent or null fails with [Error::MissingField].
pub(crate) fn required<T: DeserializeOwned>(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<T, Error> {
    match data.get(field) {
        None | Some(Value::Null) => Err(Error::MissingField(field)),
        Some(value) => convert(value, field),
    }
}

/// Optional field: absent or null is `None`.
pub(crate) fn optional<T: DeserializeOwned>(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, Error> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => convert(value, field).map(Some),
    }
}

/// Optional field falling back to the type default. The server omits
/// collection fields inconsistently across versions; absent collections
/// consistently become empty here.
pub(crate) fn optional_or_default<T: DeserializeOwned + Default>(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<T, Error> {
    Ok(optional(data, field)?.unwrap_or_default())
}

/// Required embedded entity.
pub(crate) fn required_entity<T: FromPayload>(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<T, Error> {
    match data.get(field) {
        None | Some(Value::Null) => Err(Error::MissingField(field)),
        Some(Value::Object(map)) => T::from_payload(map),
        Some(_) => Err(Error::Conversion {
            field,
            message: "expected a json object".to_string(),
        }),
    }
}

/// Optional embedded entity.
pub(crate) fn optional_entity<T: FromPayload>(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, Error> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => T::from_payload(map).map(Some),
        Some(_) => Err(Error::Conversion {
            field,
            message: "expected a json object".to_string(),
        }),
    }
}

/// List of embedded entities; absent or null is empty.
pub(crate) fn entity_list<T: FromPayload>(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<T>, Error> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Object(map) => T::from_payload(map),
                _ => Err(Error::Conversion {
                    field,
                    message: "expected an array of json objects".to_string(),
                }),
            })
            .collect(),
        Some(_) => Err(Error::Conversion {
            field,
            message: "expected a json array".to_string(),
        }),
    }
}

/// Required unix-seconds timestamp field.
pub(crate) fn required_timestamp(
    data: &Map<String, Value>,
    field: &'static str,
) -> Result<DateTime<Utc>, Error> {
    let seconds: i64 = required(data, field)?;
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| Error::Conversion {
            field,
            message: format!("{seconds} is out of range for a unix timestamp"),
        })
}
