use crate::config::FetchConfig;
use crate::error::AnalyzeError;
use crate::fetch::{Fetcher, PageFetcher};
use crate::parsers::{PageDocument, Parser};
use crate::results::SiteReport;
use crate::scoring::{self, Variant};
use crate::target;
use url::Url;

/// Runs site analyses: normalize the URL, fetch once, parse, score
///
/// Each call is independent. A failure in one analysis never affects the
/// next one.
pub struct Analyzer<F = Fetcher> {
    fetcher: F,
}

impl Analyzer<Fetcher> {
    /// Create an analyzer using the backend named in the configuration
    pub fn from_config(config: &FetchConfig) -> Result<Self, AnalyzeError> {
        Ok(Self::new(Fetcher::from_config(config)?))
    }
}

impl<F: PageFetcher> Analyzer<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Analyze the site at `input`
    ///
    /// `input` may omit its scheme, in which case `https://` is assumed.
    pub async fn analyze(
        &self,
        input: &str,
        variant: Variant,
        keyword: Option<&str>,
    ) -> Result<SiteReport, AnalyzeError> {
        let result = self.try_analyze(input, variant, keyword).await;
        if let Err(e) = &result {
            ::log::error!("Analysis of '{}' failed: {}", input, e);
        }
        result
    }

    async fn try_analyze(
        &self,
        input: &str,
        variant: Variant,
        keyword: Option<&str>,
    ) -> Result<SiteReport, AnalyzeError> {
        let url = target::normalize_url(input)?;
        let body = self.fetcher.fetch(&url).await?;
        let doc = Parser::parse_bytes(&body)?.with_url(url);

        let score = scoring::score(&doc, variant, keyword);
        ::log::info!(
            "{} for {}: {}/{}",
            variant.display_name(),
            input,
            score.score,
            score.total
        );

        Ok(SiteReport::new(&doc, score))
    }
}

/// Score markup that is already in hand, without fetching
///
/// `url` feeds URL-based signals such as the Health `https` check.
pub fn analyze_html(
    html: &str,
    url: Option<&Url>,
    variant: Variant,
    keyword: Option<&str>,
) -> Result<SiteReport, AnalyzeError> {
    score_document(Parser::parse(html)?, url, variant, keyword)
}

/// Like [`analyze_html`], for a body that has not been decoded yet
///
/// Bytes that are not valid UTF-8 fail as [`AnalyzeError::Parse`].
pub fn analyze_bytes(
    body: &[u8],
    url: Option<&Url>,
    variant: Variant,
    keyword: Option<&str>,
) -> Result<SiteReport, AnalyzeError> {
    score_document(Parser::parse_bytes(body)?, url, variant, keyword)
}

fn score_document(
    mut doc: PageDocument,
    url: Option<&Url>,
    variant: Variant,
    keyword: Option<&str>,
) -> Result<SiteReport, AnalyzeError> {
    if let Some(url) = url {
        doc = doc.with_url(url.clone());
    }

    let score = scoring::score(&doc, variant, keyword);
    Ok(SiteReport::new(&doc, score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ANALYZE_FAILED, FetchError, ParseError};
    use crate::scoring::Signal;
    use std::cell::RefCell;

    /// Serves canned bodies and records requested URLs
    struct StubFetcher {
        body: Result<Vec<u8>, u16>,
        requested: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn ok(html: &str) -> Self {
            Self {
                body: Ok(html.as_bytes().to_vec()),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn bytes(body: &[u8]) -> Self {
            Self {
                body: Ok(body.to_vec()),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn status(status: u16) -> Self {
            Self {
                body: Err(status),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            match &self.body {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(FetchError::Status {
                    status: *status,
                    url: url.to_string(),
                }),
            }
        }
    }

    const PAGE: &str = r#"<html><head><title>Melbourne Plumber | ABC Plumbing</title>
        <meta name="viewport" content="width=device-width"></head>
        <body><h1>Plumbing</h1><img src="logo.png" alt="ABC">
        <p>0412 345 678 info@abc.com.au</p></body></html>"#;

    #[tokio::test]
    async fn test_analyze_defaults_scheme() {
        let analyzer = Analyzer::new(StubFetcher::ok(PAGE));
        let report = analyzer
            .analyze("abcplumbing.com.au", Variant::Health, None)
            .await
            .unwrap();

        assert_eq!(
            analyzer.fetcher.requested.borrow().as_slice(),
            ["https://abcplumbing.com.au/"]
        );
        assert_eq!(report.url.as_deref(), Some("https://abcplumbing.com.au/"));
        assert_eq!((report.score.score, report.score.total), (6, 6));
    }

    #[tokio::test]
    async fn test_analyze_http_site_fails_https_signal() {
        let analyzer = Analyzer::new(StubFetcher::ok(PAGE));
        let report = analyzer
            .analyze("http://abcplumbing.com.au", Variant::Health, None)
            .await
            .unwrap();

        assert!(!report.score.passed(Signal::Https));
        assert_eq!(report.score.score, 5);
    }

    #[tokio::test]
    async fn test_analyze_seo_with_keyword() {
        let analyzer = Analyzer::new(StubFetcher::ok(PAGE));
        let report = analyzer
            .analyze("https://abcplumbing.com.au", Variant::Seo, Some("melbourne plumber"))
            .await
            .unwrap();

        assert_eq!(report.title.as_deref(), Some("Melbourne Plumber | ABC Plumbing"));
        assert_eq!(report.meta_description, None);
        let keyword = report.score.keyword.unwrap();
        assert!(keyword.in_title);
        assert!(!keyword.in_headings);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_opaque() {
        let analyzer = Analyzer::new(StubFetcher::status(503));
        let err = analyzer
            .analyze("abcplumbing.com.au", Variant::Seo, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Fetch(FetchError::Status { status: 503, .. })));
        assert_eq!(err.user_message(), ANALYZE_FAILED);
    }

    #[tokio::test]
    async fn test_parse_failure_is_opaque() {
        let analyzer = Analyzer::new(StubFetcher::bytes(&[0xff, 0xfe, 0xfd]));
        let err = analyzer
            .analyze("abcplumbing.com.au", Variant::Seo, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Parse(_)));
        assert_eq!(err.user_message(), ANALYZE_FAILED);
    }

    #[tokio::test]
    async fn test_invalid_url_never_fetches() {
        let analyzer = Analyzer::new(StubFetcher::ok(PAGE));
        let err = analyzer
            .analyze("   ", Variant::Seo, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Fetch(FetchError::InvalidUrl { .. })));
        assert!(analyzer.fetcher.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_scheme_never_fetches() {
        let analyzer = Analyzer::new(StubFetcher::ok(PAGE));
        let err = analyzer
            .analyze("ftp://abcplumbing.com.au/index.html", Variant::Seo, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AnalyzeError::Fetch(FetchError::UnsupportedScheme { .. })));
        assert_eq!(err.user_message(), ANALYZE_FAILED);
        assert!(analyzer.fetcher.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failure_does_not_affect_next_analysis() {
        let failing = Analyzer::new(StubFetcher::status(500));
        assert!(failing.analyze("a.com", Variant::Seo, None).await.is_err());

        let working = Analyzer::new(StubFetcher::ok(PAGE));
        assert!(working.analyze("a.com", Variant::Seo, None).await.is_ok());
    }

    #[test]
    fn test_analyze_html_offline() {
        let report = analyze_html(PAGE, None, Variant::Health, None).unwrap();
        assert_eq!(report.url, None);
        assert!(!report.score.passed(Signal::Https));
        assert_eq!(report.score.score, 5);

        let url = Url::parse("https://abcplumbing.com.au/").unwrap();
        let report = analyze_html(PAGE, Some(&url), Variant::Health, None).unwrap();
        assert_eq!(report.score.score, 6);
    }

    #[test]
    fn test_analyze_bytes() {
        let report = analyze_bytes(PAGE.as_bytes(), None, Variant::Health, None).unwrap();
        assert_eq!(report.score.score, 5);

        // Latin-1 "café"
        let err = analyze_bytes(b"<h1>caf\xe9</h1>", None, Variant::Seo, None).unwrap_err();
        assert!(matches!(err, AnalyzeError::Parse(ParseError::Encoding(_))));
        assert_eq!(err.user_message(), ANALYZE_FAILED);
    }
}
