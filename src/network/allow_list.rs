//! URL allow-list matching.
//!
//! An entry is an origin plus an optional path prefix. Origins compare
//! exactly; a bare origin (or one ending in `/`) admits every path.

struct UrlParts<'a> {
    origin: &'a str,
    path: &'a str,
}

fn split_url(url: &str) -> Option<UrlParts<'_>> {
    let scheme_end = url.find("://")?;
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    if authority_len == 0 {
        return None;
    }
    let origin = &url[..authority_start + authority_len];
    let path = &rest[authority_len..];
    let path = path.split(['?', '#']).next().unwrap_or("");
    Some(UrlParts {
        origin,
        path: if path.is_empty() { "/" } else { path },
    })
}

/// Does `url` fall under the allow-list entry `prefix`?
pub fn matches_prefix(url: &str, prefix: &str) -> bool {
    let (Some(url), Some(prefix)) = (split_url(url), split_url(prefix)) else {
        return false;
    };
    url.origin == prefix.origin && (prefix.path == "/" || url.path.starts_with(prefix.path))
}

/// Is `url` admitted by any of `allowed_url_prefixes`? An empty list admits
/// nothing.
pub fn is_url_allowed(url: &str, allowed_url_prefixes: &[String]) -> bool {
    allowed_url_prefixes.iter().any(|prefix| matches_prefix(url, prefix))
}
