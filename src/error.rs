use thiserror::Error;

/// Message shown to the user whenever a site analysis fails, whatever the cause
pub const ANALYZE_FAILED: &str = "Failed to analyze site";

/// Errors raised while retrieving a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The target could not be parsed as a URL
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The input names a scheme other than http or https
    #[error("unsupported scheme '{scheme}' in {url}")]
    UnsupportedScheme { scheme: String, url: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    /// The fetch did not finish within the configured timeout
    #[error("timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Could not open a WebDriver session
    #[error("WebDriver session failed: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed after the session was opened
    #[error("WebDriver command failed: {0}")]
    Command(#[from] fantoccini::error::CmdError),
}

/// Errors raised while turning a fetched body into a page document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("page body is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Failure of one analysis invocation
///
/// The variants keep the detail for logging. Users only ever see
/// [`AnalyzeError::user_message`].
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}

impl AnalyzeError {
    /// The opaque message to present, identical for fetch and parse failures
    pub fn user_message(&self) -> &'static str {
        ANALYZE_FAILED
    }
}

/// Rejected profit calculator input
#[derive(Debug, Error, PartialEq)]
pub enum ProfitError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("hours worked must be at least 1 (got {value})")]
    Hours { value: f64 },

    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_opaque() {
        let fetch: AnalyzeError = FetchError::Timeout { secs: 10 }.into();
        let parse: AnalyzeError = ParseError::Selector {
            selector: "h1[".to_string(),
            reason: "unexpected end".to_string(),
        }
        .into();

        assert_eq!(fetch.user_message(), ANALYZE_FAILED);
        assert_eq!(parse.user_message(), ANALYZE_FAILED);

        // Detail is still available for logs
        assert!(fetch.to_string().contains("timed out after 10s"));
        assert!(parse.to_string().contains("h1["));
    }

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status {
            status: 404,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(err.to_string(), "https://example.com/ returned HTTP 404");
    }
}
