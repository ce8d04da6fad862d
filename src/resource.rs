use crate::config::CorsConfig;
use crate::cors::CorsAware;
use crate::handler::{BoxedHandler, Handler};
use crate::methods::allowed_methods;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A routable resource: declared method names and one handler per method.
#[derive(Clone)]
pub struct Resource {
    methods: Vec<String>,
    handlers: IndexMap<String, BoxedHandler>,
    provide_automatic_options: bool,
    cors: Option<Arc<CorsConfig>>,
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            methods: Vec::new(),
            handlers: IndexMap::new(),
            provide_automatic_options: true,
            cors: None,
        }
    }
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `method` and installs its handler, replacing a previous one.
    pub fn route<H>(self, method: &str, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.route_shared(method, Arc::new(handler))
    }

    pub fn route_shared(mut self, method: &str, handler: BoxedHandler) -> Self {
        let method = method.to_ascii_uppercase();
        self.declare(&method);
        self.handlers.insert(method, handler);
        self
    }

    /// Toggles the host's built-in OPTIONS responder (on by default).
    pub fn with_automatic_options(mut self, enabled: bool) -> Self {
        self.provide_automatic_options = enabled;
        self
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn handler(&self, method: &str) -> Option<&BoxedHandler> {
        self.handlers.get(&method.to_ascii_uppercase())
    }

    pub fn provides_automatic_options(&self) -> bool {
        self.provide_automatic_options
    }

    pub fn allowed_methods(&self) -> String {
        allowed_methods(&self.methods, self.provide_automatic_options)
    }

    pub(crate) fn declare(&mut self, method: &str) {
        if !self
            .methods
            .iter()
            .any(|declared| declared.eq_ignore_ascii_case(method))
        {
            self.methods.push(method.to_ascii_uppercase());
        }
    }

    pub(crate) fn map_handlers<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&str, BoxedHandler) -> BoxedHandler,
    {
        self.handlers = self
            .handlers
            .into_iter()
            .map(|(method, handler)| {
                let wrapped = f(&method, handler);
                (method, wrapped)
            })
            .collect();
        self
    }

    pub(crate) fn tag_cors(&mut self, config: Arc<CorsConfig>) {
        self.cors = Some(config);
    }
}

impl CorsAware for Resource {
    fn cors_config(&self) -> Option<&CorsConfig> {
        self.cors.as_deref()
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("methods", &self.methods)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("provide_automatic_options", &self.provide_automatic_options)
            .field("cors", &self.cors)
            .finish()
    }
}

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;
