//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::Result;

/// Join an endpoint path onto a base URL.
///
/// The base is treated as a directory, so `http://host/api` + `events/1`
/// yields `http://host/api/events/1` rather than replacing the last segment.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

/// Percent-encode a single path segment (e.g. a record id).
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
