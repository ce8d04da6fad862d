use crate::config::CorsConfig;
use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::Headers;
use crate::methods::contains_method;

pub(crate) struct HeaderBuilder<'a> {
    config: &'a CorsConfig,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(config: &'a CorsConfig) -> Self {
        Self { config }
    }

    pub(crate) fn build_allow_headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(1);
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.config.allow_headers.as_str(),
        );
        headers
    }

    /// Reflects the request origin when enabled, tagging the response with
    /// `Vary: Origin` so caches do not serve it to another origin.
    pub(crate) fn build_origin_headers(&self, ctx: &RequestContext<'_>) -> Headers {
        match ctx.origin() {
            Some(origin) if self.config.reflect_origin => {
                let mut headers = Headers::with_capacity(2);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                headers.add_vary(header::ORIGIN);
                headers
            }
            _ => {
                let mut headers = Headers::with_capacity(1);
                headers.push(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    self.config.allow_origin.as_str(),
                );
                headers
            }
        }
    }

    pub(crate) fn build_methods_header(
        &self,
        method: &str,
        ctx: &RequestContext<'_>,
    ) -> Headers {
        let current = method.to_ascii_uppercase();
        let allowed = ctx.allowed_methods.trim();
        let methods = if allowed.is_empty() {
            current
        } else if contains_method(allowed, &current) {
            allowed.to_string()
        } else {
            format!("{allowed}, {current}")
        };

        let mut headers = Headers::with_capacity(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> Headers {
        let mut headers = Headers::with_capacity(1);
        headers.push(header::ACCESS_CONTROL_MAX_AGE, self.config.max_age.to_string());
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> Headers {
        if let Some(value) = &self.config.expose_headers {
            let mut headers = Headers::with_capacity(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value.as_str());
            return headers;
        }
        Headers::new()
    }

    pub(crate) fn build_credentials_header(&self, ctx: &RequestContext<'_>) -> Headers {
        if self.config.allow_credentials && ctx.has_cookies() {
            let mut headers = Headers::with_capacity(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            Headers::new()
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
