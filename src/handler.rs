use crate::context::RequestContext;
use crate::response::{IntoResponse, Response, unpack};
use std::sync::Arc;

/// A per-method resource handler.
pub trait Handler: Send + Sync {
    fn call(&self, ctx: &RequestContext<'_>) -> Response;
}

pub type BoxedHandler = Arc<dyn Handler>;

/// Handler built from a closure by [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F> {
    f: F,
}

/// Turns a closure returning anything [`IntoResponse`] into a [`Handler`].
pub fn handler_fn<F, R>(f: F) -> HandlerFn<F>
where
    F: Fn(&RequestContext<'_>) -> R + Send + Sync,
    R: IntoResponse,
{
    HandlerFn { f }
}

impl<F, R> Handler for HandlerFn<F>
where
    F: Fn(&RequestContext<'_>) -> R + Send + Sync,
    R: IntoResponse,
{
    fn call(&self, ctx: &RequestContext<'_>) -> Response {
        unpack((self.f)(ctx))
    }
}
