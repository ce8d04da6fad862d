use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::Response,
};
use bunner_crossdomain_rs::Headers;

use super::AppState;

/// Bridges an axum request into [`bunner_crossdomain_rs::Api::dispatch`].
pub async fn dispatch(State(state): State<AppState>, request: Request) -> Response {
    let request = into_api_request(&request);
    let reply = state.api.dispatch(&request);

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = Response::builder()
        .status(status)
        .body(Body::from(reply.body))
        .unwrap();

    apply_headers(response.headers_mut(), &reply.headers);
    response
}

fn into_api_request(request: &Request) -> bunner_crossdomain_rs::Request {
    let mut converted =
        bunner_crossdomain_rs::Request::new(request.method().as_str(), request.uri().path());

    for name in request.headers().keys() {
        let separator = if *name == header::COOKIE { "; " } else { ", " };
        let joined = request
            .headers()
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join(separator);
        if !joined.is_empty() {
            converted = converted.with_header(name.as_str(), joined);
        }
    }
    converted
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            map.insert(header_name, header_value);
        }
    }
}
