use bizkit::config::ToolkitConfig;
use bizkit::profit::{self, ProfitInputs};
use bizkit::render;
use bizkit::scoring::Variant;
use bizkit::{Analyzer, SiteReport, analyze_bytes, target};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

mod args;
use args::{Args, Command, FetchArgs, FormatArg, convert_variant};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ToolkitConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                eprintln!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ToolkitConfig::default(),
    }
    .with_env_overrides();

    match args.command {
        Command::Seo {
            ref url,
            ref keyword,
        } => {
            let keyword = keyword.as_deref();
            run_analysis(&config, &args.fetch, url, Variant::Seo, keyword, args.format).await
        }
        Command::Health { ref url } => {
            run_analysis(&config, &args.fetch, url, Variant::Health, None, args.format).await
        }
        Command::Score {
            ref file,
            variant,
            ref url,
            ref keyword,
        } => {
            let body = match std::fs::read(file) {
                Ok(body) => body,
                Err(e) => {
                    ::log::error!("Failed to read {}: {}", file.display(), e);
                    eprintln!("Failed to read {}: {}", file.display(), e);
                    return ExitCode::FAILURE;
                }
            };
            let url = match url.as_deref().map(target::normalize_url).transpose() {
                Ok(url) => url,
                Err(e) => {
                    ::log::error!("{}", e);
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            match analyze_bytes(&body, url.as_ref(), convert_variant(variant), keyword.as_deref()) {
                Ok(report) => print_site_report(&report, args.format),
                Err(e) => {
                    ::log::error!("Scoring {} failed: {}", file.display(), e);
                    eprintln!("{}", e.user_message());
                    ExitCode::FAILURE
                }
            }
        }
        Command::Profit {
            revenue,
            cost,
            overheads,
            hours,
        } => {
            let inputs = ProfitInputs::new(revenue, cost, overheads).with_hours_worked(hours);
            match profit::calculate(&inputs) {
                Ok(report) => match args.format {
                    FormatArg::Text => {
                        print!("{}", render::render_profit(&report));
                        ExitCode::SUCCESS
                    }
                    FormatArg::Json => print_json(&report),
                },
                Err(e) => {
                    eprintln!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Fetch, score and print one site
async fn run_analysis(
    config: &ToolkitConfig,
    overrides: &FetchArgs,
    url: &str,
    variant: Variant,
    keyword: Option<&str>,
    format: FormatArg,
) -> ExitCode {
    let mut fetch_config = config.fetch.clone();
    overrides.apply(&mut fetch_config);

    ::log::info!(
        "Starting {} for {} ({:?} backend, {}s timeout)",
        variant.display_name(),
        url,
        fetch_config.backend,
        fetch_config.timeout_secs
    );

    let result = match Analyzer::from_config(&fetch_config) {
        Ok(analyzer) => analyzer.analyze(url, variant, keyword).await,
        Err(e) => {
            ::log::error!("Failed to set up {:?} fetcher: {}", fetch_config.backend, e);
            Err(e)
        }
    };

    match result {
        Ok(report) => print_site_report(&report, format),
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn print_site_report(report: &SiteReport, format: FormatArg) -> ExitCode {
    match format {
        FormatArg::Text => {
            print!("{}", render::render_site_report(report));
            ExitCode::SUCCESS
        }
        FormatArg::Json => print_json(report),
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Failed to serialize report: {}", e);
            eprintln!("Failed to serialize report: {}", e);
            ExitCode::FAILURE
        }
    }
}
