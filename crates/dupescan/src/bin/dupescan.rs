//! dupescan CLI
//!
//! Runs duplicate detection, health scoring and merge planning over JSON
//! exports. Results are printed to stdout as JSON; logs go to stderr and
//! are controlled with `RUST_LOG`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use dupescan::{
    calculate_health_score, find_duplicates_with_config, load_contacts, plan_merges,
    score_with_config, ConfigError, ContactId, DupescanConfig, DupescanError, DuplicatePair,
    ScanReport, ScanStats,
};

#[derive(Parser)]
#[command(name = "dupescan")]
#[command(about = "Find duplicate contacts in CRM exports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a contacts file and print a duplicate report
    Scan {
        /// Contacts JSON (flat array or CRM list page)
        input: PathBuf,

        /// Config file (TOML, or JSON with a .json extension)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Maximum pairs in the report (overrides the config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Report every pair instead of one page
        #[arg(long, conflicts_with = "page_size")]
        all: bool,
    },

    /// Score two contacts from a contacts file against each other
    Compare {
        /// Contacts JSON (flat array or CRM list page)
        input: PathBuf,

        /// Id of the first contact
        a: String,

        /// Id of the second contact
        b: String,

        /// Config file (TOML, or JSON with a .json extension)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Compute the CRM health score from scan stats or a scan report
    Health {
        /// Stats JSON or a report produced by `scan`
        input: PathBuf,
    },

    /// Choose primary and secondary contacts for detected pairs
    PlanMerges {
        /// Report produced by `scan`, or a JSON array of pairs
        input: PathBuf,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatsInput {
    Report(ScanReport),
    Stats(ScanStats),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PairsInput {
    Report(ScanReport),
    Pairs(Vec<DuplicatePair>),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("dupescan v{}", dupescan::version());

    let cli = Cli::parse();
    match cli.command {
        Command::Scan {
            input,
            config,
            page_size,
            all,
        } => {
            let mut config = load_config(config.as_deref())?;
            override_page_size(&mut config, page_size)?;
            let contacts = load_contacts(&input)?;
            let pairs = find_duplicates_with_config(&contacts, &config.detection);

            let page_size = if all {
                pairs.len()
            } else {
                config.scan.page_size
            };

            print_json(&ScanReport::new(&contacts, pairs, page_size))
        }

        Command::Compare {
            input,
            a,
            b,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let contacts = load_contacts(&input)?;

            let find = |id: &str| {
                let id = ContactId::new(id);
                contacts
                    .iter()
                    .find(|c| c.id == id)
                    .ok_or_else(|| DupescanError::NotFound(id.to_string()))
            };
            let (first, second) = (find(&a)?, find(&b)?);

            print_json(&score_with_config(first, second, &config.detection))
        }

        Command::Health { input } => {
            let stats = match serde_json::from_str::<StatsInput>(&std::fs::read_to_string(&input)?)?
            {
                StatsInput::Report(report) => report.stats,
                StatsInput::Stats(stats) => stats,
            };
            print_json(&calculate_health_score(&stats))
        }

        Command::PlanMerges { input } => {
            let pairs = match serde_json::from_str::<PairsInput>(&std::fs::read_to_string(&input)?)?
            {
                PairsInput::Report(report) => report.duplicates,
                PairsInput::Pairs(pairs) => pairs,
            };
            print_json(&plan_merges(&pairs))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DupescanConfig, DupescanError> {
    match path {
        Some(path) => DupescanConfig::load(path),
        None => Ok(DupescanConfig::default()),
    }
}

/// Apply `--page-size` and re-check the config it lands in
fn override_page_size(
    config: &mut DupescanConfig,
    page_size: Option<usize>,
) -> Result<(), ConfigError> {
    if let Some(page_size) = page_size {
        config.scan.page_size = page_size;
        config.validate()?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
