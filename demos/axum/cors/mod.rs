use std::sync::Arc;

use bunner_crossdomain_rs::{Api, CorsOptions, CrossDomain};

use crate::routes;

pub type SharedApi = Arc<Api>;

#[derive(Clone)]
pub struct AppState {
    pub api: SharedApi,
}

pub fn build_state() -> AppState {
    let resource_cors = CrossDomain::new(CorsOptions {
        allow_headers: Some("accept, content-type, x-example-trace".into()),
        expose_headers: Some("X-Example-Trace".into()),
        allow_credentials: Some(true),
        ..CorsOptions::default()
    });
    let post_cors = CrossDomain::new(CorsOptions {
        max_age: Some(180),
        ..CorsOptions::default()
    });

    let mut api = Api::new();
    api.add_resource("/greet", routes::greet(&resource_cors, &post_cors))
        .add_resource("/health", routes::health(&CrossDomain::default()));

    AppState { api: Arc::new(api) }
}

pub mod middleware;
