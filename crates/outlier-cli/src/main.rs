use std::process::ExitCode;

use clap::Parser;
use outlier_cli::{exit_code, run, Cli};
use outlier_core::errors::OutlierErrorCode;
use outlier_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(code = e.error_code(), "run failed");
            eprintln!("warning: {}", e.coded_string());
            ExitCode::from(exit_code(&e))
        }
    }
}
