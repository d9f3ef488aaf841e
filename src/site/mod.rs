//! Site alias and site specification recognition.
//!
//! The preprocessor only needs a yes/no answer for a single token; how a
//! site is later resolved is somebody else's job.

mod alias_name;
mod spec;

pub use alias_name::is_alias_name;
pub use spec::is_site_spec;

/// Decides whether a token names a site.
pub trait SiteClassifier {
    fn is_alias_or_spec(&self, token: &str) -> bool;
}

impl<F> SiteClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_alias_or_spec(&self, token: &str) -> bool {
        self(token)
    }
}

/// Accepts `@alias` names and `user@server/path#uri` style site specs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteAliasClassifier;

impl SiteClassifier for SiteAliasClassifier {
    fn is_alias_or_spec(&self, token: &str) -> bool {
        is_alias_name(token) || is_site_spec(token)
    }
}

/// Classifier that never recognizes a site.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSites;

impl SiteClassifier for NoSites {
    fn is_alias_or_spec(&self, _token: &str) -> bool {
        false
    }
}

/// Characters allowed in alias segments and user names.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Characters allowed in host names and uris.
pub(crate) fn is_host_char(c: char) -> bool {
    is_name_char(c) || c == '.'
}
