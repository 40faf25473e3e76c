//! Text and markup patterns shared by the scoring checks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Australian phone shape used by the SEO variant: +61 or a leading 0,
/// then at least 8 digits, parentheses, spaces or hyphens
pub static SEO_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?61\s*|0)[\(\)\d\s\-]{8,}").unwrap());

/// Phone shape used by the Health variant: +61 or 0, then at least 9
/// digits or spaces
pub static HEALTH_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?61|0)[\s\d]{9,}").unwrap());

/// Street address ending in a known street-type token
pub static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\d+\s+)?[\w\s]+(St|Street|Rd|Road|Ave|Avenue|Blvd|Boulevard|Parade|Drive|Dr)\b",
    )
    .unwrap()
});

/// Loose email shape, not RFC exact
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

/// Google Maps iframe embed marker
pub const MAP_EMBED_MARKER: &str = "www.google.com/maps/embed";

/// schema.org business type marker
pub const LOCAL_BUSINESS_MARKER: &str = "LocalBusiness";

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_phone() {
        assert!(SEO_PHONE_RE.is_match("Call us on 0412 345 678"));
        assert!(SEO_PHONE_RE.is_match("Phone +61 3 9123 4567"));
        assert!(SEO_PHONE_RE.is_match("(03) 9123-4567"));
        assert!(!SEO_PHONE_RE.is_match("Call us today"));
        assert!(!SEO_PHONE_RE.is_match("Open 9 to 5"));
    }

    #[test]
    fn test_phone_thresholds_differ() {
        // 0 followed by exactly eight digit/space characters
        let text = "0412 3456";
        assert!(SEO_PHONE_RE.is_match(text));
        assert!(!HEALTH_PHONE_RE.is_match(text));

        // Hyphens count for SEO but break the Health run
        let hyphenated = "0412-345-678";
        assert!(SEO_PHONE_RE.is_match(hyphenated));
        assert!(!HEALTH_PHONE_RE.is_match(hyphenated));

        assert!(HEALTH_PHONE_RE.is_match("0412 345 678"));
    }

    #[test]
    fn test_address() {
        assert!(ADDRESS_RE.is_match("123 Example Street"));
        assert!(ADDRESS_RE.is_match("45 high st, Fitzroy"));
        assert!(ADDRESS_RE.is_match("7 Marine Parade"));
        assert!(!ADDRESS_RE.is_match("123 Example Way"));
    }

    #[test]
    fn test_email() {
        assert!(EMAIL_RE.is_match("mail info@example.com.au today"));
        assert!(EMAIL_RE.is_match("first.last-name@sub.domain.io"));
        assert!(!EMAIL_RE.is_match("info at example dot com"));
        assert!(!EMAIL_RE.is_match("user@localhost"));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case(
            "Melbourne Plumber | ABC Plumbing",
            "melbourne PLUMBER"
        ));
        assert!(!contains_ignore_case("Sydney Electrician", "plumber"));
    }
}
