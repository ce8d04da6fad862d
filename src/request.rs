use crate::constants::header;
use crate::headers::Headers;

/// An inbound request as seen by resource handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Headers,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: Headers::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn origin(&self) -> Option<&str> {
        self.header(header::ORIGIN)
    }

    /// Cookies carried by the `Cookie` header, in order of appearance.
    ///
    /// Pairs without a name are dropped; a pair without `=` is a cookie with
    /// an empty value.
    pub fn cookies(&self) -> Vec<(&str, &str)> {
        let Some(raw) = self.header(header::COOKIE) else {
            return Vec::new();
        };

        raw.split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                let name = name.trim();
                if name.is_empty() {
                    None
                } else {
                    Some((name, value.trim().trim_matches('"')))
                }
            })
            .collect()
    }

    pub fn has_cookies(&self) -> bool {
        !self.cookies().is_empty()
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
