//! Request routing.
//!
//! Every path resolves to a route; paths without a dedicated route are
//! served the index page instead of a 404.

use std::borrow::Cow;

const ERROR_PREFIX: &str = "/error/";

/// Route matched for a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Index,
    /// `/health`
    Health,
    /// `/error/<code>` with an all-digit segment
    Error(u64),
    /// Any other path; rendered like [`Route::Index`]
    CatchAll(String),
}

/// Resolve a URI path to a route.
pub fn resolve(uri_path: &str) -> Route {
    let path = decode_path(uri_path);

    match path.as_ref() {
        "" | "/" => Route::Index,
        "/health" => Route::Health,
        p => match p.strip_prefix(ERROR_PREFIX).and_then(parse_code) {
            Some(code) => Route::Error(code),
            None => Route::CatchAll(p.to_string()),
        },
    }
}

/// Parse an error code segment: ASCII digits only, no sign, no slash.
///
/// Any run of digits is a code; values past `u64::MAX` saturate, which is
/// still outside every valid status.
fn parse_code(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse().unwrap_or(u64::MAX))
}

#[inline]
fn decode_path(uri_path: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(uri_path).decode_utf8_lossy()
}
