// Re-export modules
pub mod analyzer;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parsers;
pub mod profit;
pub mod render;
pub mod results;
pub mod scoring;
pub mod target;

// Re-export commonly used types for convenience
pub use analyzer::{Analyzer, analyze_bytes, analyze_html};
pub use error::{AnalyzeError, FetchError, ParseError};
pub use parsers::PageDocument;
pub use results::SiteReport;
pub use scoring::{ScoreReport, Variant};
