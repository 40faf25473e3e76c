use crate::parsers::PageDocument;
use crate::scoring::ScoreReport;
use serde::Serialize;

/// Result of analyzing one site, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteReport {
    /// URL that was analyzed (absent for local markup)
    pub url: Option<String>,

    /// Title of the page (if available)
    pub title: Option<String>,

    /// Meta description content (if the tag exists)
    pub meta_description: Option<String>,

    /// Itemized score
    pub score: ScoreReport,
}

impl SiteReport {
    /// Create a report from the scored document
    pub fn new(doc: &PageDocument, score: ScoreReport) -> Self {
        Self {
            url: doc.url.as_ref().map(|u| u.to_string()),
            title: doc.title.clone(),
            meta_description: doc.meta_description.clone(),
            score,
        }
    }
}
