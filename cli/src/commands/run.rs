//! The `run` command - run a script file.

use std::process::ExitCode;

use crate::cli::RunArgs;
use crate::common::error::report;
use crate::common::input::read_input;

use super::eval::interpret_input;

/// Run the run command.
pub fn run(args: RunArgs, no_color: bool) -> ExitCode {
    let (content, display_name) = match read_input(&args.file) {
        Ok(c) => c,
        Err(e) => {
            report(e);
            return ExitCode::FAILURE;
        }
    };

    interpret_input(&content, Some(&display_name), &args.session, no_color)
}
