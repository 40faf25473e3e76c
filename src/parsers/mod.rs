pub mod html;

#[cfg(test)]
mod tests;

use crate::error::ParseError;
use url::Url;

/// Parsed view of one fetched HTML page
///
/// Built once per analysis and never mutated afterwards. Every scoring
/// signal is a function of these fields alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDocument {
    /// URL the page was fetched from (absent when scoring local markup)
    pub url: Option<Url>,

    /// Full document text, used for raw substring scans
    pub raw_html: String,

    /// Trimmed text of the first `<title>`, absent if missing or empty
    pub title: Option<String>,

    /// `content` of `<meta name="description">`, present whenever the tag is
    pub meta_description: Option<String>,

    /// Whether `<meta name="viewport">` exists
    pub has_viewport_meta: bool,

    /// Text of every h1, h2 and h3 in document order
    pub headings: Vec<String>,

    /// Number of `<img>` elements with a non-empty `alt`
    pub images_with_alt: usize,

    /// Whether any `<img src>` contains "logo"
    pub has_logo_image: bool,

    /// Number of `<h1>` elements
    pub h1_count: usize,

    /// Every text node in the document, concatenated
    pub body_text: String,
}

impl PageDocument {
    /// Attach the URL the markup came from
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }
}

/// Entry point for turning fetched content into a [`PageDocument`]
pub struct Parser;

impl Parser {
    /// Parse HTML text
    pub fn parse(content: &str) -> Result<PageDocument, ParseError> {
        html::parse(content)
    }

    /// Decode a response body as UTF-8 and parse it
    pub fn parse_bytes(body: &[u8]) -> Result<PageDocument, ParseError> {
        let content = String::from_utf8(body.to_vec())?;
        Self::parse(&content)
    }

    /// Parse HTML text fetched from `url`
    pub fn parse_from_url(content: &str, url: &Url) -> Result<PageDocument, ParseError> {
        Ok(Self::parse(content)?.with_url(url.clone()))
    }
}
