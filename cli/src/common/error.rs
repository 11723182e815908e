//! Error reporting utilities for the CLI.

use arraykit::{RenderConfig, ScriptError, render_error_to};

/// Render a script error to stderr.
pub fn render_script_error(
    error: &ScriptError,
    source: &str,
    filename: Option<&str>,
    no_color: bool,
) {
    let config = RenderConfig {
        color: !no_color,
        filename,
        ..Default::default()
    };
    render_error_to(error, source, &mut std::io::stderr(), &config).ok();
}

/// Report an error that has no source location.
pub fn report(error: impl std::fmt::Display) {
    eprintln!("error: {}", error);
}
