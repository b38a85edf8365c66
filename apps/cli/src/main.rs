//! # Kasir Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Parse flags and load configuration
//! 3. Open the data directory and load the catalog
//! 4. Run the menu until the operator exits or stdin closes

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match kasir_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kasir: {}", err);
            ExitCode::FAILURE
        }
    }
}
