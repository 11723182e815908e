//! The `eval` command - run an inline script.

use std::process::ExitCode;

use arraykit::Session;

use crate::cli::{EvalArgs, SessionArgs};
use crate::common::error::{render_script_error, report};

/// Run the eval command.
pub fn run(args: EvalArgs, no_color: bool) -> ExitCode {
    interpret_input(
        &args.script,
        None, // eval command has no filename
        &args.session,
        no_color,
    )
}

/// Parse and execute a script, printing each command's output as it runs.
///
/// Nothing runs if the script fails to parse. A runtime error stops the
/// script; output of the commands before it has already been printed.
pub fn interpret_input(
    input: &str,
    filename: Option<&str>,
    session_args: &SessionArgs,
    no_color: bool,
) -> ExitCode {
    let mut session = match Session::new(session_args.kind.into(), session_args.options()) {
        Ok(session) => session,
        Err(e) => {
            report(e);
            return ExitCode::FAILURE;
        }
    };

    match session.run_with(input, |line| println!("{}", line)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            render_script_error(&e, input, filename, no_color);
            ExitCode::FAILURE
        }
    }
}
