use crate::constants::{header, method, status};
use crate::context::RequestContext;
use crate::request::Request;
use crate::resource::Resource;
use crate::response::Response;
use indexmap::IndexMap;

/// Routes requests to resources registered on exact paths.
#[derive(Debug, Default, Clone)]
pub struct Api {
    resources: IndexMap<String, Resource>,
}

impl Api {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resource` on `path`, replacing a previous registration.
    pub fn add_resource(&mut self, path: impl Into<String>, resource: Resource) -> &mut Self {
        self.resources.insert(path.into(), resource);
        self
    }

    pub fn resource(&self, path: &str) -> Option<&Resource> {
        self.resources.get(path)
    }

    pub fn dispatch(&self, request: &Request) -> Response {
        let Some(resource) = self.resources.get(request.path.as_str()) else {
            return Response::new("Not Found").with_status(status::NOT_FOUND);
        };

        let allowed = resource.allowed_methods();
        let ctx = RequestContext::new(request, &allowed);
        let requested = request.method.to_ascii_uppercase();

        if let Some(handler) = resource.handler(&requested) {
            return handler.call(&ctx);
        }

        if requested == method::HEAD
            && let Some(get) = resource.handler(method::GET)
        {
            let mut response = get.call(&ctx);
            response.body.clear();
            return response;
        }

        if requested == method::OPTIONS && resource.provides_automatic_options() {
            return Response::new("").with_header(header::ALLOW, allowed);
        }

        Response::new("Method Not Allowed")
            .with_status(status::METHOD_NOT_ALLOWED)
            .with_header(header::ALLOW, allowed)
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
