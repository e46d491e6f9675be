use std::env;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod clipboard;
mod error;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn main() -> ExitCode {
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();
    let flags = match CliFlags::try_parse_from(&args) {
        Ok(flags) => flags,
        Err(e) => e.exit(),
    };

    if let Err(e) = logging::init(flags.quiet) {
        terminal::print_error(&e.to_string());
    }

    if args.len() == 1 || flags.tui {
        return match tui::run(&flags.settings()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                terminal::reset_terminal();
                terminal::print_error(&e.to_string());
                ExitCode::FAILURE
            }
        };
    }

    cli::run(&flags)
}
