use crate::error::FetchError;
use url::Url;

/// Scheme assumed when the user leaves it off
pub const DEFAULT_SCHEME: &str = "https://";

/// Normalize a user-supplied site address into a fetchable URL
///
/// Surrounding whitespace is dropped and `https://` is prepended when the
/// input carries no scheme. Schemes other than http and https are rejected.
pub fn normalize_url(input: &str) -> Result<Url, FetchError> {
    let trimmed = input.trim();

    let candidate = match explicit_scheme(trimmed) {
        Some(scheme) if is_web_scheme(scheme) => trimmed.to_string(),
        Some(scheme) => {
            return Err(FetchError::UnsupportedScheme {
                scheme: scheme.to_string(),
                url: trimmed.to_string(),
            });
        }
        None => {
            ::log::debug!("No scheme on '{}', defaulting to {}", trimmed, DEFAULT_SCHEME);
            format!("{}{}", DEFAULT_SCHEME, trimmed)
        }
    };

    let url = Url::parse(&candidate).map_err(|source| FetchError::InvalidUrl {
        url: candidate.clone(),
        source,
    })?;

    if !is_web_scheme(url.scheme()) {
        return Err(FetchError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
            url: candidate,
        });
    }
    Ok(url)
}

/// The `scheme` part of `scheme://rest`, if the input starts with one
fn explicit_scheme(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

/// Whether the URL was requested over TLS
pub fn is_secure(url: &Url) -> bool {
    url.scheme() == "https"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_is_defaulted() {
        let url = normalize_url("example.com.au").unwrap();
        assert_eq!(url.as_str(), "https://example.com.au/");
        assert!(is_secure(&url));
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        let http = normalize_url("http://example.com/contact").unwrap();
        assert_eq!(http.scheme(), "http");
        assert!(!is_secure(&http));

        let https = normalize_url("  https://example.com  ").unwrap();
        assert_eq!(https.as_str(), "https://example.com/");
    }

    #[test]
    fn test_other_schemes_are_rejected() {
        match normalize_url("ftp://example.com/file") {
            Err(FetchError::UnsupportedScheme { scheme, .. }) => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
        assert!(matches!(
            normalize_url("file:///etc/hosts"),
            Err(FetchError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_scheme_case_is_ignored() {
        let url = normalize_url("HTTPS://Example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_path_containing_scheme_marker_is_not_a_scheme() {
        let url = normalize_url("example.com/?next=http://other.com").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            normalize_url(""),
            Err(FetchError::InvalidUrl { .. })
        ));
        assert!(matches!(
            normalize_url("https://exa mple.com"),
            Err(FetchError::InvalidUrl { .. })
        ));
    }
}
