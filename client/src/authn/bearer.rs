//! Bearer token handling

use secrecy::{ExposeSecret, SecretString};

const BEARER_PREFIX: &str = "Bearer ";

/// Value for the `Authorization` header.
///
/// A token that already carries the `Bearer ` prefix is sent as-is.
pub fn authorization_value(token: &SecretString) -> String {
    let raw = token.expose_secret().trim();
    let has_prefix = raw
        .get(..BEARER_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(BEARER_PREFIX));
    if has_prefix {
        raw.to_string()
    } else {
        format!("{}{}", BEARER_PREFIX, raw)
    }
}

/// Whether a token string carries anything usable
pub fn is_blank(token: &SecretString) -> bool {
    let raw = token.expose_secret().trim();
    raw.is_empty() || raw.eq_ignore_ascii_case(BEARER_PREFIX.trim())
}
