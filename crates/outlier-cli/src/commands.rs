//! Subcommand execution.

use std::io::Write;
use std::path::Path;

use outlier_analysis::{Method, OutlierDetector, OutlierReport};
use outlier_core::config::{CliOverrides, OutlierConfig};
use outlier_core::errors::{AppError, LoadError};
use outlier_core::types::OutputFormat;

use crate::args::{Cli, Commands, DetectArgs};
use crate::loader::Table;
use crate::render;

/// Process exit code for a failed run.
///
/// 2 when the file holds nothing to analyze, 1 for every other failure.
pub fn exit_code(error: &AppError) -> u8 {
    match error {
        AppError::Load(LoadError::NoNumericColumns { .. }) => 2,
        _ => 1,
    }
}

pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), AppError> {
    match cli.command {
        Commands::Columns {
            input,
            preview,
            config_root,
        } => {
            let overrides = CliOverrides {
                preview_rows: preview,
                ..Default::default()
            };
            let config = OutlierConfig::load(&config_root, Some(&overrides))?;
            columns(&input, &config, out)
        }
        Commands::Detect(args) => {
            let config = OutlierConfig::load(&args.config_root, Some(&args.overrides()))?;
            detect(&args, &config, out)
        }
    }
}

fn columns<W: Write>(input: &Path, config: &OutlierConfig, out: &mut W) -> Result<(), AppError> {
    let table = Table::from_path(input)?;
    render::write_preview(out, &table, config.output.effective_preview_rows())?;
    writeln!(out)?;

    let names = table.numeric_column_names();
    if names.is_empty() {
        return Err(LoadError::NoNumericColumns {
            path: table.source.clone(),
        }
        .into());
    }
    render::write_numeric_columns(out, &names)?;
    Ok(())
}

fn detect<W: Write>(args: &DetectArgs, config: &OutlierConfig, out: &mut W) -> Result<(), AppError> {
    let table = Table::from_path(&args.input)?;
    let col = table.resolve_column(args.column.as_deref())?;
    let column = table.headers[col].clone();
    let values = table.column_values(col)?;

    let detector = OutlierDetector::from_config(&config.detection);
    let method = Method::from_config(&config.detection);
    tracing::info!(column = %column, method = %method, rows = values.len(), "running detection");

    let detection = detector.detect(&values, method)?;

    match config.output.effective_format() {
        OutputFormat::Table => {
            render::write_detection_table(out, &table, &column, &detection)?;
        }
        OutputFormat::Json => {
            let report = OutlierReport::from_detection(column, &values, &detection);
            render::write_report_json(out, &report)?;
        }
    }
    Ok(())
}
