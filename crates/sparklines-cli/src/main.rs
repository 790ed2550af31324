//! Sparklines CLI - Render sparkline charts to SVG

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is set up in run() once flags and environment are known
    let mut app = cli::SparklinesApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
