use crate::request::Request;

/// What a handler sees for one dispatch: the request plus the methods the
/// host reports as allowed for the matched route.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub request: &'a Request,
    pub allowed_methods: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(request: &'a Request, allowed_methods: &'a str) -> Self {
        Self {
            request,
            allowed_methods,
        }
    }

    pub fn origin(&self) -> Option<&'a str> {
        self.request.origin()
    }

    pub fn has_cookies(&self) -> bool {
        self.request.has_cookies()
    }
}
