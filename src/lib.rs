mod api;
mod config;
pub mod constants;
mod context;
mod cors;
mod handler;
mod header_builder;
mod headers;
mod methods;
mod options;
mod request;
mod resource;
mod response;
mod util;

pub use api::Api;
pub use config::CorsConfig;
pub use context::RequestContext;
pub use cors::{CorsAware, CorsHandler, CrossDomain, compute_headers};
pub use handler::{BoxedHandler, Handler, HandlerFn, handler_fn};
pub use headers::Headers;
pub use methods::{allowed_methods, contains_method};
pub use options::{CorsOptions, ValidationError};
pub use request::Request;
pub use resource::Resource;
pub use response::{IntoResponse, Response, unpack};
