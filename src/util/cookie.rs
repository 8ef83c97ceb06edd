//! Read-only cookie access.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the source is `document.cookie`; during SSR the caller can
//! hand in the request's `Cookie` header instead. Every lookup re-reads the
//! source, so values written elsewhere are visible immediately.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::collections::HashMap;

/// Snapshot of cookies. A pair without `=` maps to `None`.
pub type Cookies = HashMap<String, Option<String>>;

/// Supplier of a raw `name=value; name2=value2` cookie string.
pub trait CookieSource {
    fn raw_cookies(&self) -> String;
}

/// The browser's `document.cookie`. Empty outside hydrate builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn raw_cookies(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.dyn_ref::<web_sys::HtmlDocument>().and_then(|html| html.cookie().ok()))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }
}

/// A fixed cookie string, e.g. an HTTP `Cookie` request header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderCookies(pub String);

impl CookieSource for HeaderCookies {
    fn raw_cookies(&self) -> String {
        self.0.clone()
    }
}

/// Lookup view over a [`CookieSource`].
#[derive(Clone, Debug, Default)]
pub struct CookieStore<S = DocumentCookies> {
    source: S,
}

impl CookieStore<DocumentCookies> {
    /// Store backed by `document.cookie`.
    pub fn document() -> Self {
        Self { source: DocumentCookies }
    }
}

impl<S: CookieSource> CookieStore<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read every cookie from the source.
    pub fn find_all(&self) -> Cookies {
        parse_cookie_string(&self.source.raw_cookies())
    }

    /// Value of cookie `name`, or `None` when missing or valueless.
    pub fn find(&self, name: &str) -> Option<String> {
        self.find_all().remove(name).flatten()
    }
}

/// Parse a `document.cookie`-style string.
///
/// Pairs split on `;`, are trimmed, then split on the first `=`. Later
/// duplicates win. Empty pairs (`a=1;;b=2`) are skipped rather than producing
/// an empty-string name.
pub fn parse_cookie_string(raw: &str) -> Cookies {
    let mut cookies = Cookies::new();
    for pair in raw.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
        match pair.split_once('=') {
            Some((name, value)) => cookies.insert(name.to_owned(), Some(value.to_owned())),
            None => cookies.insert(pair.to_owned(), None),
        };
    }
    cookies
}
