//! Heuristic site scoring.
//!
//! A [`Variant`] names a table of [`checks::Check`] rows. Scoring runs each
//! row against a [`PageDocument`] and sums the weights of the rows that
//! pass. It never performs I/O and never fails.

pub mod checks;
pub mod patterns;

use crate::parsers::PageDocument;
use checks::{Check, HEALTH_CHECKS, SEO_CHECKS};
use serde::Serialize;

/// The two scoring configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Local SEO analyzer (8 signals, optional keyword checks)
    Seo,
    /// Business health report (6 signals)
    Health,
}

impl Variant {
    /// Checks run for this variant, in display order
    pub fn checks(&self) -> &'static [Check] {
        match self {
            Variant::Seo => SEO_CHECKS,
            Variant::Health => HEALTH_CHECKS,
        }
    }

    /// Maximum achievable score
    pub fn total(&self) -> u32 {
        self.checks().iter().map(|c| c.weight).sum()
    }

    /// Heading shown next to the score
    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::Seo => "Local SEO Score",
            Variant::Health => "Health Score",
        }
    }
}

/// A single fact extracted from a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Title,
    MetaDescription,
    Viewport,
    Phone,
    Address,
    MapEmbed,
    LocalBusinessSchema,
    AltImages,
    Https,
    Email,
    LogoImage,
    H1,
}

impl Signal {
    /// Stable identifier, also used as the JSON key
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Title => "title",
            Signal::MetaDescription => "meta_description",
            Signal::Viewport => "viewport",
            Signal::Phone => "phone",
            Signal::Address => "address",
            Signal::MapEmbed => "map_embed",
            Signal::LocalBusinessSchema => "local_business_schema",
            Signal::AltImages => "alt_images",
            Signal::Https => "https",
            Signal::Email => "email",
            Signal::LogoImage => "logo_image",
            Signal::H1 => "h1",
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignalValue {
    Flag(bool),
    Count { count: usize, passed: bool },
}

impl SignalValue {
    /// Count signal that passes at `min` or above
    pub fn count(count: usize, min: usize) -> Self {
        SignalValue::Count {
            count,
            passed: count >= min,
        }
    }

    pub fn passed(&self) -> bool {
        match self {
            SignalValue::Flag(passed) => *passed,
            SignalValue::Count { passed, .. } => *passed,
        }
    }
}

/// A signal paired with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub value: SignalValue,
}

/// Keyword presence checks (SEO only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordSignals {
    pub keyword: String,
    pub in_title: bool,
    pub in_headings: bool,
}

/// Itemized, bounded result of scoring one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub variant: Variant,
    pub signals: Vec<SignalResult>,
    pub score: u32,
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<KeywordSignals>,
}

impl ScoreReport {
    /// Look up the outcome of one signal
    pub fn get(&self, signal: Signal) -> Option<SignalValue> {
        self.signals
            .iter()
            .find(|r| r.signal == signal)
            .map(|r| r.value)
    }

    /// Whether `signal` was checked and passed
    pub fn passed(&self, signal: Signal) -> bool {
        self.get(signal).is_some_and(|v| v.passed())
    }
}

/// Score a page with the given variant
///
/// A keyword is only considered by [`Variant::Seo`]. An empty keyword is
/// treated as absent; any other keyword is matched exactly as given.
pub fn score(doc: &PageDocument, variant: Variant, keyword: Option<&str>) -> ScoreReport {
    let checks = variant.checks();
    let mut signals = Vec::with_capacity(checks.len());
    let mut score = 0;

    for check in checks {
        let value = (check.evaluate)(doc);
        ::log::debug!("{:?} check {}: {:?}", variant, check.signal.name(), value);
        if value.passed() {
            score += check.weight;
        }
        signals.push(SignalResult {
            signal: check.signal,
            value,
        });
    }

    let keyword = keyword.filter(|k| !k.is_empty());
    let keyword = match (variant, keyword) {
        (Variant::Seo, Some(keyword)) => Some(keyword_signals(doc, keyword)),
        (Variant::Health, Some(keyword)) => {
            ::log::debug!("Ignoring keyword '{}' for health report", keyword);
            None
        }
        (_, None) => None,
    };

    ScoreReport {
        variant,
        signals,
        score,
        total: variant.total(),
        keyword,
    }
}

/// Case-insensitive keyword checks against the title and each heading
pub fn keyword_signals(doc: &PageDocument, keyword: &str) -> KeywordSignals {
    let in_title = doc
        .title
        .as_deref()
        .is_some_and(|title| patterns::contains_ignore_case(title, keyword));
    let in_headings = doc
        .headings
        .iter()
        .any(|heading| patterns::contains_ignore_case(heading, keyword));

    KeywordSignals {
        keyword: keyword.to_string(),
        in_title,
        in_headings,
    }
}
