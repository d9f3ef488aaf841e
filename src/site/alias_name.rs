use crate::site::is_name_char;

/// `@name`, `@name.env` or `@group.name.env`.
pub fn is_alias_name(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('@') else {
        return false;
    };

    let segments: Vec<&str> = rest.split('.').collect();
    if segments.len() > 3 {
        return false;
    }

    segments
        .iter()
        .all(|s| !s.is_empty() && s.chars().all(is_name_char))
}
