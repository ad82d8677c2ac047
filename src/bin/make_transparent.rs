//! Clears near-white pixels from every PNG in a folder, in place

use clap::Parser;
use pngprep::batch::BadgeProcessor;
use pngprep::io::cli::TransparencyCli;
use pngprep::io::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = TransparencyCli::parse();
    init_logging(cli.verbose);

    let config = cli.config();
    if let Err(e) = config.validate() {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }

    // Per-file failures are already logged and never change the exit code
    let report = BadgeProcessor::new(config, cli.should_show_progress()).process();
    if !report.is_clean() {
        tracing::warn!(
            "{} of {} files could not be processed",
            report.failed.len(),
            report.attempted()
        );
    }
    ExitCode::SUCCESS
}
