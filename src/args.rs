use bizkit::config::{FetchBackend, FetchConfig};
use bizkit::scoring::Variant;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bizkit")]
#[command(about = "Small business website checks and profit calculator")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    #[command(flatten)]
    pub fetch: FetchArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Local SEO analysis of a website
    Seo {
        /// Website URL (https:// is assumed when missing)
        url: String,

        /// Local keyword to look for in the title and headings (e.g. "Melbourne plumber")
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Business health report for a website
    Health {
        /// Website URL (https:// is assumed when missing)
        url: String,
    },

    /// Score a saved HTML file without fetching anything
    Score {
        /// Path to the HTML file
        file: PathBuf,

        /// Which report to produce
        #[arg(long, value_enum, default_value_t = VariantArg::Seo)]
        variant: VariantArg,

        /// URL the file was saved from (used by the https check)
        #[arg(long)]
        url: Option<String>,

        /// Local keyword (SEO only)
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Monthly profit metrics
    Profit {
        /// Monthly revenue ($)
        #[arg(long)]
        revenue: f64,

        /// Cost of goods sold ($)
        #[arg(long)]
        cost: f64,

        /// Monthly overheads / fixed costs ($)
        #[arg(long)]
        overheads: f64,

        /// Monthly work hours, for the hourly rate
        #[arg(long, default_value_t = 160.0)]
        hours: f64,
    },
}

/// Overrides for the fetch configuration, used by `seo` and `health`
#[derive(clap::Args, Debug, Default)]
pub struct FetchArgs {
    /// Fetch timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// How to retrieve the page
    #[arg(long, value_enum, global = true)]
    pub backend: Option<BackendArg>,
}

impl FetchArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut FetchConfig) {
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(backend) = self.backend {
            config.backend = convert_backend(backend);
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Seo,
    Health,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Http,
    Webdriver,
}

/// Convert from CLI argument variant to scoring variant
pub fn convert_variant(arg: VariantArg) -> Variant {
    match arg {
        VariantArg::Seo => Variant::Seo,
        VariantArg::Health => Variant::Health,
    }
}

/// Convert from CLI argument backend to configured backend
pub fn convert_backend(arg: BackendArg) -> FetchBackend {
    match arg {
        BackendArg::Http => FetchBackend::Http,
        BackendArg::Webdriver => FetchBackend::WebDriver,
    }
}
