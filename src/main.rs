use std::path::Path;

use clap::Parser;
use jot::cli::commands::Cli;
use jot::cli::handlers;
use jot::store;

fn main() {
    let cli = Cli::parse();
    let data_dir = store::data_dir(cli.dir.as_deref().map(Path::new));

    // Log to a file under the data dir; the TUI owns the terminal.
    // A failed logger init is not fatal, log macros become no-ops.
    let _logger = jot::logging::init(&data_dir).ok();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = jot::tui::run(&data_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(command) => {
            if let Err(e) = handlers::dispatch(command, &data_dir, cli.json) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
