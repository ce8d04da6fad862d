use bunner_crossdomain_rs::constants::method;
use bunner_crossdomain_rs::{CrossDomain, Headers, RequestContext, Resource, Response, handler_fn};

/// `/greet`: the whole resource is decorated, `POST` keeps a shorter max age.
pub fn greet(resource_cors: &CrossDomain, post_cors: &CrossDomain) -> Resource {
    let get = handler_fn(|_: &RequestContext<'_>| {
        let headers: Headers = [("Content-Type", "text/html")].into_iter().collect();
        (
            "<h1>Welcome to the Axum CrossDomain example!</h1>".to_string(),
            headers,
        )
    });
    let post = post_cors.wrap_handler(
        method::POST,
        handler_fn(|_: &RequestContext<'_>| Response::new("created").with_status(201)),
    );

    resource_cors.wrap_resource(
        Resource::new()
            .route(method::GET, get)
            .route(method::POST, post),
    )
}

/// `/health`: only `GET` is decorated.
pub fn health(cors: &CrossDomain) -> Resource {
    Resource::new().route(
        method::GET,
        cors.wrap_handler(method::GET, handler_fn(|_: &RequestContext<'_>| "ok")),
    )
}
