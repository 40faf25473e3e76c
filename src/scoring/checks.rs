use crate::parsers::PageDocument;
use crate::scoring::patterns::{
    ADDRESS_RE, EMAIL_RE, HEALTH_PHONE_RE, LOCAL_BUSINESS_MARKER, MAP_EMBED_MARKER, SEO_PHONE_RE,
};
use crate::scoring::{Signal, SignalValue};
use crate::target;

/// Minimum number of images with alt text for the SEO check to pass
pub const MIN_ALT_IMAGES: usize = 3;

/// Minimum number of h1 elements for the Health check to pass
pub const MIN_H1: usize = 1;

/// One row of a variant's scoring table
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub signal: Signal,
    pub weight: u32,
    pub evaluate: fn(&PageDocument) -> SignalValue,
}

/// Equal-weight check
const fn check(signal: Signal, evaluate: fn(&PageDocument) -> SignalValue) -> Check {
    Check {
        signal,
        weight: 1,
        evaluate,
    }
}

/// Checks for the Local SEO analyzer, in display order
pub const SEO_CHECKS: &[Check] = &[
    check(Signal::Title, title_present),
    check(Signal::MetaDescription, meta_description_present),
    check(Signal::Viewport, viewport_present),
    check(Signal::Phone, seo_phone_present),
    check(Signal::Address, address_present),
    check(Signal::MapEmbed, map_embed_present),
    check(Signal::LocalBusinessSchema, local_business_schema_present),
    check(Signal::AltImages, alt_images),
];

/// Checks for the business health report, in display order
pub const HEALTH_CHECKS: &[Check] = &[
    check(Signal::Https, https_enabled),
    check(Signal::Viewport, viewport_present),
    check(Signal::Phone, health_phone_present),
    check(Signal::Email, email_present),
    check(Signal::LogoImage, logo_image_present),
    check(Signal::H1, h1_elements),
];

pub fn title_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.title.as_deref().is_some_and(|t| !t.is_empty()))
}

pub fn meta_description_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.meta_description.is_some())
}

pub fn viewport_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.has_viewport_meta)
}

pub fn seo_phone_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(SEO_PHONE_RE.is_match(&doc.body_text))
}

pub fn health_phone_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(HEALTH_PHONE_RE.is_match(&doc.body_text))
}

pub fn address_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(ADDRESS_RE.is_match(&doc.body_text))
}

pub fn email_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(EMAIL_RE.is_match(&doc.body_text))
}

/// Scans the raw markup, so iframes and attributes count
pub fn map_embed_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.raw_html.contains(MAP_EMBED_MARKER))
}

/// Scans the raw markup, so JSON-LD script blocks count
pub fn local_business_schema_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.raw_html.contains(LOCAL_BUSINESS_MARKER))
}

pub fn alt_images(doc: &PageDocument) -> SignalValue {
    SignalValue::count(doc.images_with_alt, MIN_ALT_IMAGES)
}

pub fn https_enabled(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.url.as_ref().is_some_and(target::is_secure))
}

pub fn logo_image_present(doc: &PageDocument) -> SignalValue {
    SignalValue::Flag(doc.has_logo_image)
}

pub fn h1_elements(doc: &PageDocument) -> SignalValue {
    SignalValue::count(doc.h1_count, MIN_H1)
}
