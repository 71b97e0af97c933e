//! `secret-santa` entry point.

use santa_cli::{run, telemetry, CliResult, SantaConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match load_and_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Secret Santa failed");
            ExitCode::FAILURE
        }
    }
}

fn load_and_run() -> CliResult<()> {
    let config = SantaConfig::load()?;
    let summary = run(&config)?;
    tracing::info!(
        records = summary.records_written,
        output_dir = %summary.output_dir.display(),
        "Secret Santa matches saved"
    );
    Ok(())
}
