use crate::constants::method;
use crate::util::split_list;
use std::collections::BTreeSet;

/// Computes the `Allow` value a route reports for its declared methods.
///
/// `HEAD` is implied by `GET`, and `OPTIONS` is implied while the host answers
/// OPTIONS requests itself. Entries are upper-cased, deduplicated, sorted and
/// joined with `", "`.
pub fn allowed_methods<I, S>(declared: I, automatic_options: bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut methods: BTreeSet<String> = declared
        .into_iter()
        .map(|name| name.as_ref().trim().to_ascii_uppercase())
        .filter(|name| !name.is_empty())
        .collect();

    if methods.contains(method::GET) {
        methods.insert(method::HEAD.to_string());
    }
    if automatic_options {
        methods.insert(method::OPTIONS.to_string());
    }

    methods.into_iter().collect::<Vec<_>>().join(", ")
}

/// Whether `method` is one of the entries of a methods list such as `"GET, HEAD"`.
pub fn contains_method(methods: &str, method: &str) -> bool {
    split_list(methods).any(|entry| entry.eq_ignore_ascii_case(method))
}

#[cfg(test)]
#[path = "methods_test.rs"]
mod methods_test;
