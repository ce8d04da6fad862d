use crate::constants::status;
use crate::headers::Headers;

/// The `(body, status, headers)` envelope produced by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub body: String,
    pub status: u16,
    pub headers: Headers,
}

impl Response {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status: status::OK,
            headers: Headers::new(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(name, value);
        self
    }
}

/// Values a handler may return; each normalises into a [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::new(self)
    }
}

impl IntoResponse for &str {
    fn into_response(self) -> Response {
        Response::new(self)
    }
}

impl<B: Into<String>> IntoResponse for (B, u16) {
    fn into_response(self) -> Response {
        let (body, status) = self;
        Response::new(body).with_status(status)
    }
}

impl<B: Into<String>> IntoResponse for (B, Headers) {
    fn into_response(self) -> Response {
        let (body, headers) = self;
        Response {
            headers,
            ..Response::new(body)
        }
    }
}

impl<B: Into<String>> IntoResponse for (B, u16, Headers) {
    fn into_response(self) -> Response {
        let (body, status, headers) = self;
        Response {
            body: body.into(),
            status,
            headers,
        }
    }
}

/// Normalises a handler return value: a bare body becomes `(body, 200, {})`.
pub fn unpack(value: impl IntoResponse) -> Response {
    value.into_response()
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
