//! Session cookie helpers

/// Name of the cookie the API server sets on login.
pub const SESSION_COOKIE: &str = "gup-shup-tkn";

/// Extract the session token from a `Cookie` header value.
///
/// Pairs are separated by `"; "`. The first pair named [`SESSION_COOKIE`]
/// wins; an empty value counts as no token.
pub fn token_from_cookie(header: &str) -> Option<String> {
    cookie_value(header, SESSION_COOKIE)
}

/// Value of the first cookie called `name` in a `Cookie` header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
