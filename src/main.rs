//! `hsts-check`: check domains against the HSTS preload list requirements.
//!
//! ```text
//! hsts-check preloadable example.com      (may it be added?)
//! hsts-check removable example.com        (may it be removed?)
//! hsts-check header "max-age=31536000; includeSubDomains; preload"
//! ```
//!
//! Exits with status 1 when any check reports an error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use hsts_preload::config::{load_config, validate_config, CheckerConfig, ConfigError, OutputFormat};
use hsts_preload::fetch::{build_client, fetch_headers};
use hsts_preload::observability::init_logging;
use hsts_preload::{
    preloadable_header, preloadable_response, removable_header, removable_response, Issues,
};

#[derive(Parser)]
#[command(name = "hsts-check")]
#[command(about = "Check Strict-Transport-Security headers against the HSTS preload list rules", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether domains may be added to the preload list
    Preloadable {
        #[arg(required = true)]
        domains: Vec<String>,
    },
    /// Check whether domains may be removed from the preload list
    Removable {
        #[arg(required = true)]
        domains: Vec<String>,
    },
    /// Evaluate a header value without fetching anything
    Header {
        #[arg(long, value_enum, default_value_t = RuleSet::Preloadable)]
        rules: RuleSet,
        header: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RuleSet {
    Preloadable,
    Removable,
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    header: Option<String>,
    issues: Issues,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Report {
    fn failed(&self) -> bool {
        self.error.is_some() || self.issues.has_errors()
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CheckerConfig::default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability.log_level);
    tracing::debug!(?config, "configuration loaded");

    let reports = match cli.command {
        Commands::Header { rules, header } => {
            let issues = match rules {
                RuleSet::Preloadable => preloadable_header(&header),
                RuleSet::Removable => removable_header(&header),
            };
            vec![Report {
                domain: None,
                header: Some(header),
                issues,
                error: None,
            }]
        }
        Commands::Preloadable { domains } => check_domains(&config, &domains, RuleSet::Preloadable).await?,
        Commands::Removable { domains } => check_domains(&config, &domains, RuleSet::Removable).await?,
    };

    print_reports(&reports, config.output.format)?;

    if reports.iter().any(Report::failed) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

async fn check_domains(
    config: &CheckerConfig,
    domains: &[String],
    rules: RuleSet,
) -> Result<Vec<Report>, Box<dyn std::error::Error>> {
    let client = build_client(&config.http)?;
    let mut reports = Vec::with_capacity(domains.len());

    for domain in domains {
        let report = match fetch_headers(&client, domain).await {
            Ok(headers) => {
                let (header, issues) = match rules {
                    RuleSet::Preloadable => preloadable_response(&headers),
                    RuleSet::Removable => removable_response(&headers),
                };
                Report {
                    domain: Some(domain.clone()),
                    header,
                    issues,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(domain = %domain, error = %e, "could not fetch domain");
                Report {
                    domain: Some(domain.clone()),
                    header: None,
                    issues: Issues::new(),
                    error: Some(e.to_string()),
                }
            }
        };
        reports.push(report);
    }

    Ok(reports)
}

fn print_reports(reports: &[Report], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
        OutputFormat::Text => {
            for report in reports {
                if let Some(domain) = &report.domain {
                    println!("{}", domain);
                }
                match &report.header {
                    Some(header) => println!("  header: {}", header),
                    None => println!("  header: (none)"),
                }
                if let Some(error) = &report.error {
                    println!("  fetch error: {}", error);
                    continue;
                }
                for line in report.issues.to_string().lines() {
                    println!("  {}", line);
                }
            }
        }
    }
    Ok(())
}
