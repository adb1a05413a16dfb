use pdfmark_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // File logging is best-effort; fall back to stderr when the state dir is
    // unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("pdfmark error: {:#}", err);
        std::process::exit(1);
    }
}
