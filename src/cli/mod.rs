mod context;
mod flags;
mod prompts;

use std::process::ExitCode;

pub use context::{Context, Status};
pub use flags::CliFlags;
use prompts::Prompts;

use crate::terminal::print_error;

/// One-shot generation. Exit status is non-zero when nothing usable came out.
pub fn run(flags: &CliFlags) -> ExitCode {
    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(Status::Done | Status::Aborted) => ExitCode::SUCCESS,
        Ok(Status::NoClassSelected | Status::ClipboardFailed) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
