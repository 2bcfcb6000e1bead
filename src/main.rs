//! Chest X-ray dataset reorganizer
//!
//! Splits the `PNEUMONIA` class of every dataset split into `VIRAL` (files
//! whose name contains "virus") and `BACTERIAL` (everything else), leaving
//! `NORMAL` untouched.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

mod config;
mod core;
mod logging;

use crate::config::ReorganizeConfig;
use crate::core::{reorganize_dataset, ReorganizeSummary};

#[derive(Parser, Debug)]
#[command(name = "chest-xray-reorganizer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split PNEUMONIA into VIRAL and BACTERIAL classes", long_about = None)]
struct Cli {
    /// Path to the chest_xray dataset (default: ./data/chest_xray)
    #[arg(short, long, env = "CHEST_XRAY_DIR")]
    path: Option<PathBuf>,

    /// Also write logs to a timestamped file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn dataset_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                Ok(ReorganizeConfig::default_dataset_path(&cwd))
            }
        }
    }
}

fn write_summary(summary: &ReorganizeSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    fs::write(path, json).with_context(|| format!("Failed to write summary to {:?}", path))?;
    info!("Summary written to: {:?}", path);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::setup_logging(cli.verbose, cli.log_dir.as_deref())
        .context("Failed to initialize logging")?;

    let dataset_path = cli.dataset_path()?;

    if !dataset_path.exists() {
        error!("Directory not found at {:?}", dataset_path);
        error!("Pass the dataset location explicitly, or run from the folder containing 'data/chest_xray'.");
        return Ok(());
    }

    info!("Starting reorganization in: {:?}", dataset_path);
    let summary = reorganize_dataset(&dataset_path, &ReorganizeConfig::default());

    if let Some(path) = &cli.summary_json {
        write_summary(&summary, path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["chest-xray-reorganizer"]).unwrap();
        assert!(cli.log_dir.is_none());
        assert!(cli.summary_json.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_explicit_path() {
        let cli = Cli::try_parse_from([
            "chest-xray-reorganizer",
            "--path",
            "/data/chest_xray",
            "--summary-json",
            "out.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.dataset_path().unwrap(), PathBuf::from("/data/chest_xray"));
        assert_eq!(cli.summary_json, Some(PathBuf::from("out.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_short_path_flag() {
        let cli = Cli::try_parse_from(["chest-xray-reorganizer", "-p", "ds"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("ds")));
    }

    #[test]
    fn test_cli_rejects_positional_path() {
        assert!(Cli::try_parse_from(["chest-xray-reorganizer", "ds"]).is_err());
    }

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let summary = reorganize_dataset(dir.path(), &ReorganizeConfig::default());
        let out = dir.path().join("summary.json");

        write_summary(&summary, &out).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value["splits"].as_array().unwrap().len(), 3);
        assert_eq!(value["splits"][2]["status"], "missing_split");
    }
}
