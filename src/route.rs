//! Routes
//!
//! Path <-> page mapping. The browser side (history, popstate) lives in
//! `context`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside one path segment
pub const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const DETAIL_PREFIXES: &[&str] = &["/item/", "/pokemon/"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Detail(String),
    NotFound(String),
}

/// Which page component a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Detail,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Route::Catalog;
        }

        for prefix in DETAIL_PREFIXES {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                let segment = rest.strip_suffix('/').unwrap_or(rest);
                if segment.is_empty() || segment.contains('/') {
                    break;
                }
                let name = percent_decode_str(segment).decode_utf8_lossy().into_owned();
                return Route::Detail(name);
            }
        }

        Route::NotFound(trimmed.to_string())
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Detail(name) => format!("/item/{}", utf8_percent_encode(name, PATH_SEGMENT)),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Catalog => Page::Catalog,
            Route::Detail(_) => Page::Detail,
            Route::NotFound(_) => Page::NotFound,
        }
    }

    pub fn item_name(&self) -> Option<&str> {
        match self {
            Route::Detail(name) => Some(name),
            _ => None,
        }
    }
}
