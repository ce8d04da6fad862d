#![allow(dead_code)]

use bunner_crossdomain_rs::Headers;
use bunner_crossdomain_rs::constants::header;
use std::collections::HashSet;

pub const MANDATORY_CORS_HEADERS: [&str; 4] = [
    header::ACCESS_CONTROL_ALLOW_HEADERS,
    header::ACCESS_CONTROL_ALLOW_ORIGIN,
    header::ACCESS_CONTROL_ALLOW_METHODS,
    header::ACCESS_CONTROL_MAX_AGE,
];

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn list_values(headers: &Headers, name: &str) -> HashSet<String> {
    header_value(headers, name)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}

pub fn allowed_methods(headers: &Headers) -> HashSet<String> {
    list_values(headers, header::ACCESS_CONTROL_ALLOW_METHODS)
}
