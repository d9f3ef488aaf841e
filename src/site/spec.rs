use crate::site::{is_host_char, is_name_char};

/// Recognize a site specification.
///
/// Accepted forms:
/// - `user@server`, optionally followed by `/path` and/or `#uri`
/// - `/path#uri`
/// - `#uri`
pub fn is_site_spec(token: &str) -> bool {
    if let Some(uri) = token.strip_prefix('#') {
        return is_uri(uri);
    }
    if token.starts_with('/') {
        return match token.split_once('#') {
            Some((_, uri)) => is_uri(uri),
            None => false,
        };
    }
    is_remote_spec(token)
}

fn is_remote_spec(token: &str) -> bool {
    let Some((user, rest)) = token.split_once('@') else {
        return false;
    };
    if user.is_empty() || !user.chars().all(|c| is_name_char(c) || c == '.') {
        return false;
    }

    let (location, uri) = match rest.split_once('#') {
        Some((location, uri)) => (location, Some(uri)),
        None => (rest, None),
    };
    if let Some(uri) = uri {
        if !is_uri(uri) {
            return false;
        }
    }

    let server = match location.find('/') {
        Some(idx) => &location[..idx],
        None => location,
    };
    !server.is_empty() && server.chars().all(is_host_char)
}

fn is_uri(uri: &str) -> bool {
    !uri.is_empty() && uri.chars().all(is_host_char)
}
