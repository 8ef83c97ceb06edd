//! Best-effort query-string parsing.
//!
//! Segments are split on `&` and then on the first `=` before any decoding,
//! so percent-encoded delimiters (`%26`, `%3D`) survive as literal characters
//! inside keys and values. `+` is kept as-is. This is a display convenience,
//! not a hardened URL decoder.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Parsed parameters. A key without `=` maps to `None`.
pub type QueryParams = HashMap<String, Option<String>>;

/// Parse `raw` into a key/value mapping. Later duplicate keys win.
///
/// Empty segments (`a&&b`, a leading or trailing `&`) are skipped rather than
/// producing an empty-string key.
pub fn parse_query_string(raw: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for segment in raw.split('&').filter(|segment| !segment.is_empty()) {
        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };
        params.insert(decode_component(key), value.map(decode_component));
    }
    params
}

/// Parameters of the current page URL (`window.location.search`).
///
/// Non-hydrate builds have no location and return an empty mapping.
pub fn current_query_params() -> QueryParams {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        parse_query_string(search.strip_prefix('?').unwrap_or(&search))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        QueryParams::new()
    }
}

fn decode_component(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
