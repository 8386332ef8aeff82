//! URL Classification
//!
//! Recognises cache URLs and reads the validation format hint carried in a
//! URL fragment, e.g. `https://example.com/page.html#development=AMP4EMAIL`.

use url::{form_urlencoded, Url};

use crate::validation::DEFAULT_FORMAT;

/// Content-delivery mirror whose URLs must not be validated directly
pub const CACHE_DOMAIN: &str = "cdn.ampproject.org";

/// Fragment key selecting the validation format
const DEVELOPMENT_KEY: &str = "development";

/// True only when the URL's domain is exactly [`CACHE_DOMAIN`].
///
/// Subdomains such as `example-com.cdn.ampproject.org` do not count, and
/// input that does not parse as a URL is never a cache URL.
pub fn is_known_cache_url(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.domain().map(|domain| domain == CACHE_DOMAIN))
        .unwrap_or(false)
}

/// Format named by the `development` key of the URL fragment.
///
/// `development=1` means the default format, any other value (empty
/// included) is the format itself. Without the key, the default format is used.
pub fn select_format_from_url(url: &str) -> String {
    let Some((_, fragment)) = url.split_once('#') else {
        return DEFAULT_FORMAT.to_string();
    };

    match form_urlencoded::parse(fragment.as_bytes()).find(|(key, _)| key == DEVELOPMENT_KEY) {
        Some((_, value)) if value != "1" => value.into_owned(),
        _ => DEFAULT_FORMAT.to_string(),
    }
}

/// `url` without its `#fragment`; works on file paths too
pub fn strip_fragment(url: &str) -> &str {
    url.split_once('#').map_or(url, |(before, _)| before)
}
