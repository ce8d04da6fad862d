#![allow(dead_code)]

use bunner_crossdomain_rs::constants::{header, method};
use bunner_crossdomain_rs::{
    Api, CorsOptions, CrossDomain, Handler, Request, RequestContext, Resource, Response,
    handler_fn,
};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = Some(enabled);
        self
    }

    pub fn allow_headers(mut self, value: impl Into<String>) -> Self {
        self.options.allow_headers = Some(value.into());
        self
    }

    pub fn allow_origin(mut self, value: impl Into<String>) -> Self {
        self.options.allow_origin = Some(value.into());
        self
    }

    pub fn expose_headers(mut self, value: impl Into<String>) -> Self {
        self.options.expose_headers = Some(value.into());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = Some(seconds);
        self
    }

    pub fn reflect_origin(mut self, enabled: bool) -> Self {
        self.options.reflect_origin = Some(enabled);
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build(self) -> CrossDomain {
        CrossDomain::new(self.options)
    }
}

pub struct RequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
    cookie: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            path: "/".into(),
            origin: None,
            cookie: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn build(self) -> Request {
        let RequestBuilder {
            method,
            path,
            origin,
            cookie,
        } = self;

        let mut request = Request::new(method, path);
        if let Some(origin) = origin {
            request = request.with_header(header::ORIGIN, origin);
        }
        if let Some(cookie) = cookie {
            request = request.with_header(header::COOKIE, cookie);
        }
        request
    }

    pub fn dispatch(self, api: &Api) -> Response {
        api.dispatch(&self.build())
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}

pub fn text(body: &'static str) -> impl Handler + Clone {
    handler_fn(move |_: &RequestContext<'_>| body)
}

/// A resource serving `GET` only.
pub fn get_resource() -> Resource {
    Resource::new().route(method::GET, text("data"))
}

pub fn api_with(resource: Resource) -> Api {
    let mut api = Api::new();
    api.add_resource("/", resource);
    api
}
