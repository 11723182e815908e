//! Script error rendering using ariadne
//!
//! Renders a [`ScriptError`] as an annotated snippet of the script that
//! produced it, with the error code, the failing command underlined and a
//! help line where one applies.

use crate::ScriptError;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<script>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &ScriptError, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use arraykit::{ContainerKind, RenderConfig, Session, render_error_to};
///
/// let source = "add a\nget 3";
/// let mut session = Session::new(ContainerKind::List, Default::default()).unwrap();
/// let error = session.run(source).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&error, source, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("index 3 out of range for length 1"));
/// ```
pub fn render_error_to(
    error: &ScriptError,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<script>");
    let message = error.kind.to_string();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(ariadne::IndexType::Byte);

    let span = error.span.0.clone();
    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(error.kind.code())
        .with_message(&message)
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(&message)
                .with_color(colors.next()),
        );

    if let Some(help) = error.kind.help() {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}
