use anyhow::Context;
use basic_calc::utils::logger;
use basic_calc::{CalcError, CalculatorSession, CliConfig, LogFormat};
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format == LogFormat::Json);
    tracing::debug!("CLI config: {:?}", config);

    let session = CalculatorSession::new(io::stdin().lock(), io::stdout().lock());

    match session.run() {
        Ok(calculation) => {
            tracing::info!("Computed {}", calculation);
            Ok(ExitCode::SUCCESS)
        }
        Err(CalcError::IoError(e)) => {
            // stdout may be the broken end, so the report goes through main's Err
            Err(e).context("Failed to talk to the terminal")
        }
        Err(e) => {
            tracing::info!(
                "Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

            Ok(ExitCode::from(e.exit_code(config.strict_exit)))
        }
    }
}
