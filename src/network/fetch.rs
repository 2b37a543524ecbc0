// src/network/fetch.rs

use tracing::{debug, info};

use super::allow_list::is_url_allowed;
use super::types::{FetchFn, FetchResponse, NetworkConfig, NetworkError};

const DEFAULT_MAX_REDIRECTS: usize = 20;
const REDIRECT_CODES: &[u16] = &[301, 302, 303, 307, 308];

/// GET `url` through `raw_fetch`, enforcing the allow-list, following
/// redirects, and requiring a 2xx final status. Never retries.
pub async fn fetch_text(
    config: &NetworkConfig,
    raw_fetch: &FetchFn,
    url: &str,
) -> Result<FetchResponse, NetworkError> {
    let max_redirects = config.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS);
    check_url_allowed(config, url)?;

    let mut current_url = url.to_string();
    let mut redirect_count = 0;

    loop {
        debug!(url = %current_url, "GET");
        let response = raw_fetch(current_url.clone())
            .await
            .map_err(|message| NetworkError::FetchError { message })?;

        if REDIRECT_CODES.contains(&response.status) {
            if let Some(location) = response.headers.get("location") {
                let next = resolve_redirect_url(&current_url, location);
                check_url_allowed(config, &next)?;

                redirect_count += 1;
                if redirect_count > max_redirects {
                    return Err(NetworkError::TooManyRedirects { max: max_redirects });
                }
                current_url = next;
                continue;
            }
        }

        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                status_text: response.status_text,
            });
        }
        info!(url = %current_url, bytes = response.body.len(), "fetched");
        return Ok(response);
    }
}

fn check_url_allowed(config: &NetworkConfig, url: &str) -> Result<(), NetworkError> {
    if config.dangerously_allow_full_internet_access
        || is_url_allowed(url, &config.allowed_url_prefixes)
    {
        Ok(())
    } else {
        Err(NetworkError::AccessDenied { url: url.to_string() })
    }
}

/// Resolve a `location` header (absolute, root-relative, or relative)
/// against the URL that produced it.
fn resolve_redirect_url(base_url: &str, location: &str) -> String {
    if location.starts_with("http://") || location.starts_with("https://") {
        return location.to_string();
    }
    let Some(scheme_end) = base_url.find("://") else {
        return location.to_string();
    };
    let after_scheme = scheme_end + 3;
    let path_start = base_url[after_scheme..]
        .find('/')
        .map(|i| after_scheme + i);

    if location.starts_with('/') {
        let origin = &base_url[..path_start.unwrap_or(base_url.len())];
        return format!("{}{}", origin, location);
    }
    match path_start {
        Some(_) => {
            let dir_end = base_url.rfind('/').unwrap_or(base_url.len());
            format!("{}/{}", &base_url[..dir_end], location)
        }
        None => format!("{}/{}", base_url, location),
    }
}
