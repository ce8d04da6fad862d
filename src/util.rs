pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Splits a comma and/or whitespace separated header list into its entries.
pub(crate) fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|ch: char| ch == ',' || ch.is_ascii_whitespace())
        .filter(|entry| !entry.is_empty())
}

/// Accepts `null` or `scheme://host[:port]` with no path, query or fragment.
pub(crate) fn is_serialized_origin(value: &str) -> bool {
    if value == "null" {
        return true;
    }

    let Some((scheme, authority)) = value.split_once("://") else {
        return false;
    };

    let scheme_ok = scheme
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'));

    let (host, port) = if authority.starts_with('[') {
        match authority.split_once(']') {
            Some((_, "")) => (authority, None),
            Some((_, rest)) => match rest.strip_prefix(':') {
                Some(port) => (&authority[..authority.len() - rest.len()], Some(port)),
                None => return false,
            },
            None => return false,
        }
    } else {
        match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    let host_ok = !host.is_empty()
        && !host
            .chars()
            .any(|ch| ch.is_ascii_whitespace() || matches!(ch, '/' | '?' | '#' | '@'));
    let port_ok = port.is_none_or(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()));

    scheme_ok && host_ok && port_ok
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
