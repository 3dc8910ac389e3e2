//! CI launcher for the companion `action.ps1` script.
//!
//! Resolves the script next to the launcher's installation root (one level
//! above the `dist` bundle directory when present), runs it with `pwsh`, and
//! reports any failure on the host automation system's failure channel.

use clap::Parser;
use launcher::{exit_codes, launch, logging, report};

#[derive(Parser)]
#[command(
    name = "launcher",
    version,
    about = "Runs the companion action.ps1 with pwsh"
)]
struct Cli {}

fn main() {
    logging::init();
    let _cli = Cli::parse();

    if let Err(err) = launch::launch() {
        report::set_failed(&format!("{err:#}"));
        std::process::exit(exit_codes::FAILED);
    }
}
