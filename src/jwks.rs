//! Json web key set entities. Pure data, no transport binding.

use serde_json::{Map, Value};

use crate::model::{self, FromPayload};
use crate::types::Error;

/// A single key from a client's registered key set. Only `kty` is always
/// present; the remaining parameters depend on the key type and default to
/// empty when the server omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonWebKey {
    /// Intended algorithm, e.g. `RS256`.
    pub alg: String,
    /// Curve name for EC/OKP keys.
    pub crv: String,
    /// Private exponent.
    pub d: String,
    /// First factor CRT exponent.
    pub dp: String,
    /// Second factor CRT exponent.
    pub dq: String,
    /// Public exponent for RSA keys.
    pub e: String,
    /// Symmetric key value.
    pub k: String,
    /// Key id.
    pub kid: String,
    /// Key type, e.g. `RSA` or `EC`.
    pub kty: String,
    /// Modulus for RSA keys.
    pub n: String,
    /// First prime factor.
    pub p: String,
    /// Second prime factor.
    pub q: String,
    /// First CRT coefficient.
    pub qi: String,
    /// The `use` parameter: `sig` or `enc`.
    pub key_use: String,
    /// X coordinate for EC keys.
    pub x: String,
    /// X.509 certificate chain.
    pub x5c: Vec<String>,
    /// Y coordinate for EC keys.
    pub y: String,
}

impl FromPayload for JsonWebKey {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            alg: model::optional_or_default(data, "alg")?,
            crv: model::optional_or_default(data, "crv")?,
            d: model::optional_or_default(data, "d")?,
            dp: model::optional_or_default(data, "dp")?,
            dq: model::optional_or_default(data, "dq")?,
            e: model::optional_or_default(data, "e")?,
            k: model::optional_or_default(data, "k")?,
            kid: model::optional_or_default(data, "kid")?,
            kty: model::required(data, "kty")?,
            n: model::optional_or_default(data, "n")?,
            p: model::optional_or_default(data, "p")?,
            q: model::optional_or_default(data, "q")?,
            qi: model::optional_or_default(data, "qi")?,
            key_use: model::optional_or_default(data, "use")?,
            x: model::optional_or_default(data, "x")?,
            x5c: model::optional_or_default(data, "x5c")?,
            y: model::optional_or_default(data, "y")?,
        })
    }
}

/// Key set embedded in a client registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonWebKeySet {
    /// Keys in the set; empty when the server omits them.
    pub keys: Vec<JsonWebKey>,
}

impl FromPayload for JsonWebKeySet {
    fn from_payload(data: &Map<String, Value>) -> Result<Self, Error> {
        Ok(Self {
            keys: model::entity_list(data, "keys")?,
        })
    }
}
