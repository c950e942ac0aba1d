//! Authenticated source URLs.

use crate::constants::AUTH_TOKEN_QUERY_PARAM;

/// Append the encrypted auth token as a query parameter.
///
/// Uses `&` when the URL already carries a query string, `?` otherwise.
pub fn add_encrypted_auth_token_to_url(url: &str, token: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!(
        "{url}{separator}{AUTH_TOKEN_QUERY_PARAM}={}",
        urlencoding::encode(token)
    )
}

/// Resolve the URL the pager should load for a source.
///
/// Only sources that require authentication are decorated, and only when a token is known.
pub fn resolve_source_url(source: &str, requires_auth: bool, token: Option<&str>) -> String {
    match token {
        Some(token) if requires_auth => add_encrypted_auth_token_to_url(source, token),
        _ => source.to_string(),
    }
}
