//! Plain-text rendering of reports for the terminal.

use crate::profit::{ProfitReport, format_currency, format_percent};
use crate::results::SiteReport;
use crate::scoring::{Signal, SignalResult, SignalValue, Variant};
use std::fmt::Write;

const PASS: &str = "✅";
const FAIL: &str = "❌";
const RULE: &str = "---";

/// Label shown for a signal in the given report
pub fn label(signal: Signal, variant: Variant) -> &'static str {
    match (variant, signal) {
        (Variant::Seo, Signal::Viewport) => "Mobile Friendly (Viewport Tag)",
        (Variant::Seo, Signal::Phone) => "Phone Number on Page",
        (Variant::Health, Signal::Viewport) => "Mobile Friendly",
        (Variant::Health, Signal::Phone) => "Phone Number Visible",
        (_, Signal::Title) => "Title Tag",
        (_, Signal::MetaDescription) => "Meta Description",
        (_, Signal::Address) => "Address Present (NAP)",
        (_, Signal::MapEmbed) => "Google Maps Embed",
        (_, Signal::LocalBusinessSchema) => "Schema.org Markup (LocalBusiness)",
        (_, Signal::AltImages) => "Images with Alt Tags",
        (_, Signal::Https) => "SSL Enabled",
        (_, Signal::Email) => "Email Address Present",
        (_, Signal::LogoImage) => "Logo Image Present",
        (_, Signal::H1) => "At least one H1 Tag",
    }
}

/// Render a site report with one line per signal
pub fn render_site_report(report: &SiteReport) -> String {
    let score = &report.score;
    let mut out = String::new();

    if let Some(url) = &report.url {
        let _ = writeln!(out, "Site: {}", url);
    }
    let _ = writeln!(
        out,
        "{}: {}/{}",
        score.variant.display_name(),
        score.score,
        score.total
    );
    let _ = writeln!(out, "{}", RULE);

    for result in &score.signals {
        let _ = writeln!(
            out,
            "{}: {}",
            label(result.signal, score.variant),
            describe(report, score.variant, result)
        );
    }

    if let Some(keyword) = &score.keyword {
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Keyword Presence Check ({})", keyword.keyword);
        let _ = writeln!(out, "Keyword in Title: {}", yes_no(keyword.in_title));
        let _ = writeln!(out, "Keyword in H1-H3 Tags: {}", yes_no(keyword.in_headings));
    }

    out
}

/// Value column for one signal line
fn describe(report: &SiteReport, variant: Variant, result: &SignalResult) -> String {
    match (variant, result.signal, result.value) {
        (Variant::Seo, Signal::Title, _) => report.title.clone().unwrap_or_else(|| "N/A".to_string()),
        (Variant::Seo, Signal::MetaDescription, _) => match &report.meta_description {
            Some(content) => content.clone(),
            None => format!("{} Missing", FAIL),
        },
        (Variant::Seo, Signal::Phone, value) => {
            if value.passed() {
                format!("{} Found", PASS)
            } else {
                format!("{} Not Found", FAIL)
            }
        }
        (Variant::Seo, Signal::AltImages, SignalValue::Count { count, .. }) => count.to_string(),
        (Variant::Seo, _, value) => yes_no(value.passed()),
        (Variant::Health, _, value) => mark(value.passed()).to_string(),
    }
}

fn mark(passed: bool) -> &'static str {
    if passed { PASS } else { FAIL }
}

fn yes_no(passed: bool) -> String {
    if passed {
        format!("{} Yes", PASS)
    } else {
        format!("{} No", FAIL)
    }
}

/// Render profit calculator results
pub fn render_profit(report: &ProfitReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gross Profit: {}", format_currency(report.gross_profit));
    let _ = writeln!(out, "Net Monthly Profit: {}", format_currency(report.net_profit));
    let _ = writeln!(out, "Profit Margin: {}", format_percent(report.profit_margin));
    let _ = writeln!(
        out,
        "Annual Profit Estimate: {}",
        format_currency(report.annual_profit)
    );
    let _ = writeln!(
        out,
        "Breakeven Revenue Needed: {}",
        format_currency(report.breakeven_revenue)
    );
    let _ = writeln!(
        out,
        "Effective Hourly Rate: {}",
        format_currency(report.hourly_rate)
    );
    out
}
