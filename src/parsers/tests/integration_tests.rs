use crate::error::ParseError;
use crate::parsers::Parser;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_utf8() {
        let body = "<html><head><title>Café Örebro</title></head></html>".as_bytes();
        let doc = Parser::parse_bytes(body).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Café Örebro"));
        assert!(doc.url.is_none());
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let body = [0x3c, 0x68, 0x31, 0x3e, 0xff, 0xfe, 0x3c, 0x2f];
        let result = Parser::parse_bytes(&body);
        assert!(matches!(result, Err(ParseError::Encoding(_))));
    }

    #[test]
    fn test_parse_from_url_attaches_url() {
        let url = Url::parse("https://example.com.au/").unwrap();
        let doc = Parser::parse_from_url("<h1>Hi</h1>", &url).unwrap();
        assert_eq!(doc.url, Some(url));
        assert_eq!(doc.h1_count, 1);
    }

    #[test]
    fn test_empty_document() {
        let doc = Parser::parse("").unwrap();
        assert_eq!(doc.title, None);
        assert_eq!(doc.meta_description, None);
        assert!(!doc.has_viewport_meta);
        assert!(doc.headings.is_empty());
        assert_eq!(doc.images_with_alt, 0);
        assert_eq!(doc.h1_count, 0);
    }
}
