//! Url composition helpers shared by every resource.

use url::Url;

/// Joins `parts` onto `base`, preserving scheme, host and any existing path
/// prefix. Parts may themselves contain slashes ("/oauth2/auth/requests").
pub(crate) fn urljoin(base: &Url, parts: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        for part in parts {
            for segment in part.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
    }
    url
}

/// Appends the query pairs that have a value. Pairs with an absent value are
/// omitted entirely, never sent as an empty string.
pub(crate) fn with_query(mut url: Url, pairs: &[(&str, Option<&str>)]) -> Url {
    let present: Vec<(&str, &str)> = pairs
        .iter()
        .filter_map(|(name, value)| value.map(|v| (*name, v)))
        .collect();
    if !present.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in present {
            query.append_pair(name, value);
        }
    }
    url
}
