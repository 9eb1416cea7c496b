//! format-docs - Format and plugin listings for imaging library docs

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = format_docs::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
