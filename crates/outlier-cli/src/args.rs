//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use outlier_core::config::CliOverrides;
use outlier_core::types::{MadScale, MethodKind, MissingPolicy, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "outlier")]
#[command(about = "Detect outliers in a CSV column using statistical methods", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview a CSV file and list its numeric columns
    Columns {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of rows to preview
        #[arg(short, long)]
        preview: Option<usize>,

        /// Directory searched for outlier.toml
        #[arg(long, default_value = ".")]
        config_root: PathBuf,
    },

    /// Detect outliers in one numeric column
    Detect(DetectArgs),
}

#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column name or index (default: first numeric column)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Detection method (z-score, iqr, modified-z-score)
    #[arg(short, long)]
    pub method: Option<MethodKind>,

    /// Threshold for z-score and modified z-score (ignored by iqr)
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Tukey fence multiplier for iqr
    #[arg(long, allow_negative_numbers = true)]
    pub iqr_multiplier: Option<f64>,

    /// Missing value policy (skip, reject)
    #[arg(long)]
    pub missing: Option<MissingPolicy>,

    /// MAD scaling for modified z-score (raw, normal)
    #[arg(long)]
    pub mad_scale: Option<MadScale>,

    /// Output format (table, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Directory searched for outlier.toml
    #[arg(long, default_value = ".")]
    pub config_root: PathBuf,
}

impl DetectArgs {
    /// Flags that override every other config layer.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            method: self.method,
            threshold: self.threshold,
            iqr_multiplier: self.iqr_multiplier,
            missing: self.missing,
            mad_scale: self.mad_scale,
            format: self.format,
            preview_rows: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from([
            "outlier", "detect", "-i", "data.csv", "-c", "price", "-m", "modified-z-score", "-t",
            "3.5", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Detect(args) => {
                assert_eq!(args.column.as_deref(), Some("price"));
                assert_eq!(args.method, Some(MethodKind::ModifiedZScore));
                assert_eq!(args.threshold, Some(3.5));
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.overrides().iqr_multiplier, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_negative_threshold_reaches_validation() {
        let cli = Cli::try_parse_from(["outlier", "detect", "-i", "d.csv", "-t", "-1"]).unwrap();
        match cli.command {
            Commands::Detect(args) => assert_eq!(args.threshold, Some(-1.0)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        assert!(Cli::try_parse_from(["outlier", "detect", "-i", "d.csv", "-m", "grubbs"]).is_err());
    }
}
