use crate::config::CorsConfig;
use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::handler::{BoxedHandler, Handler, handler_fn};
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::resource::Resource;
use crate::response::Response;
use std::sync::Arc;

/// Types that can carry the CORS policy they were decorated with.
pub trait CorsAware {
    fn cors_config(&self) -> Option<&CorsConfig>;
}

/// Decorator that attaches CORS headers to handlers and resources.
///
/// One instance corresponds to one decoration site; everything it wraps
/// shares the same immutable [`CorsConfig`].
#[derive(Clone, Debug)]
pub struct CrossDomain {
    config: Arc<CorsConfig>,
}

impl Default for CrossDomain {
    /// Decoration without arguments. Equivalent to
    /// `CrossDomain::new(CorsOptions::default())`.
    fn default() -> Self {
        Self::from_config(CorsConfig::shared_default())
    }
}

impl CrossDomain {
    /// Resolves `options` into a policy. Never fails: options that do not
    /// pass [`CorsOptions::validate`] are logged and used as given.
    pub fn new(options: CorsOptions) -> Self {
        if let Err(err) = options.validate() {
            tracing::warn!(error = %err, "questionable CORS options, decorating anyway");
        }
        Self::from_config(Arc::new(CorsConfig::resolve(options)))
    }

    pub fn from_config(config: Arc<CorsConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }

    /// Wraps the handler serving `method`.
    pub fn wrap_handler<H>(&self, method: &str, handler: H) -> CorsHandler<H>
    where
        H: Handler,
    {
        CorsHandler {
            method: method.to_ascii_uppercase(),
            handler: Arc::new(handler),
            config: Arc::clone(&self.config),
        }
    }

    /// Wraps every handler of `resource` and takes over its OPTIONS handling.
    ///
    /// The automatic OPTIONS responder is switched off and `OPTIONS` is
    /// declared. Without an OPTIONS handler of its own the resource gets one
    /// that answers with an empty body and an `Allow` header, so preflight
    /// responses carry the CORS headers too.
    pub fn wrap_resource(&self, resource: Resource) -> Resource {
        let mut resource = resource.map_handlers(|method, handler| {
            Arc::new(self.wrap_shared(method, handler)) as BoxedHandler
        });

        if resource.handler(method::OPTIONS).is_none() {
            let options = self.wrap_handler(method::OPTIONS, handler_fn(default_options));
            resource = resource.route(method::OPTIONS, options);
        }

        resource = resource.with_automatic_options(false);
        resource.declare(method::OPTIONS);
        resource.tag_cors(Arc::clone(&self.config));

        tracing::debug!(
            methods = ?resource.methods(),
            allow_origin = %self.config.allow_origin,
            "decorated resource with CORS"
        );
        resource
    }

    pub fn compute_headers(&self, method: &str, ctx: &RequestContext<'_>) -> Headers {
        compute_headers(method, &self.config, ctx)
    }

    fn wrap_shared(&self, method: &str, handler: BoxedHandler) -> CorsHandler<dyn Handler> {
        CorsHandler {
            method: method.to_ascii_uppercase(),
            handler,
            config: Arc::clone(&self.config),
        }
    }
}

/// Computes the CORS headers for a response of the handler serving `method`.
pub fn compute_headers(method: &str, config: &CorsConfig, ctx: &RequestContext<'_>) -> Headers {
    let builder = HeaderBuilder::new(config);
    let mut headers = Headers::with_capacity(7);

    headers.extend(builder.build_allow_headers());
    headers.extend(builder.build_origin_headers(ctx));
    headers.extend(builder.build_methods_header(method, ctx));
    headers.extend(builder.build_max_age_header());
    headers.extend(builder.build_exposed_headers());
    headers.extend(builder.build_credentials_header(ctx));

    headers
}

fn default_options(ctx: &RequestContext<'_>) -> Response {
    Response::new("").with_header(header::ALLOW, ctx.allowed_methods)
}

/// A handler bound to one method name and one CORS policy.
pub struct CorsHandler<H: ?Sized> {
    method: String,
    handler: Arc<H>,
    config: Arc<CorsConfig>,
}

impl<H: ?Sized> CorsHandler<H> {
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }
}

impl<H: ?Sized> Clone for CorsHandler<H> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            handler: Arc::clone(&self.handler),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: ?Sized> CorsAware for CorsHandler<H> {
    fn cors_config(&self) -> Option<&CorsConfig> {
        Some(&self.config)
    }
}

impl<H> Handler for CorsHandler<H>
where
    H: Handler + ?Sized,
{
    fn call(&self, ctx: &RequestContext<'_>) -> Response {
        let response = self.handler.call(ctx);

        let Some(origin) = ctx.origin() else {
            tracing::trace!(method = %self.method, "no Origin header, passing response through");
            return response;
        };

        let Response {
            body,
            status,
            headers: own_headers,
        } = response;

        let mut headers = compute_headers(&self.method, &self.config, ctx);
        headers.extend(own_headers);

        tracing::debug!(origin, method = %self.method, status, "applied CORS headers");

        Response {
            body,
            status,
            headers,
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
