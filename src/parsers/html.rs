use crate::error::ParseError;
use crate::parsers::PageDocument;
use scraper::{ElementRef, Html, Selector};

/// Parses HTML content into the fields the scorer reads
pub fn parse(html: &str) -> Result<PageDocument, ParseError> {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc)?;
    let meta_description = extract_meta_description(&doc)?;
    let has_viewport_meta = doc.select(&selector("meta[name=\"viewport\"]")?).next().is_some();
    let headings = extract_headings(&doc)?;
    let h1_count = doc.select(&selector("h1")?).count();

    let img_selector = selector("img")?;
    let images_with_alt = doc
        .select(&img_selector)
        .filter(|img| img.value().attr("alt").is_some_and(|alt| !alt.is_empty()))
        .count();
    let has_logo_image = doc
        .select(&img_selector)
        .filter_map(|img| img.value().attr("src"))
        .any(|src| src.contains("logo"));

    let body_text = doc.root_element().text().collect::<String>();

    ::log::debug!(
        "HTML parser found {} headings, {} h1, {} images with alt",
        headings.len(),
        h1_count,
        images_with_alt
    );

    Ok(PageDocument {
        url: None,
        raw_html: html.to_string(),
        title,
        meta_description,
        has_viewport_meta,
        headings,
        images_with_alt,
        has_logo_image,
        h1_count,
        body_text,
    })
}

/// Text of the first `<title>`, trimmed; `None` when absent or blank
pub fn extract_title(doc: &Html) -> Result<Option<String>, ParseError> {
    let title = doc
        .select(&selector("title")?)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty());
    Ok(title)
}

/// `content` attribute of the description meta tag
///
/// A tag without `content` still counts as present and yields an empty string.
pub fn extract_meta_description(doc: &Html) -> Result<Option<String>, ParseError> {
    let meta = doc
        .select(&selector("meta[name=\"description\"]")?)
        .next()
        .map(|el| el.value().attr("content").unwrap_or_default().to_string());
    Ok(meta)
}

/// Whitespace-normalized text of every h1, h2 and h3 in document order
pub fn extract_headings(doc: &Html) -> Result<Vec<String>, ParseError> {
    Ok(doc
        .select(&selector("h1, h2, h3")?)
        .map(element_text)
        .collect())
}

/// Child text nodes joined as-is, without separators or trimming
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}
