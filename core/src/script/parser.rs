//! Script parser.

use super::{ScriptError, ScriptErrorKind, Span};

/// One operation in a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Add(String),
    Get(usize),
    /// An index for lists, a value for sets.
    Remove(String),
    Contains(String),
    Size,
    Capacity,
    Clear,
    Print,
    Iter,
    Purge(String),
    Stats,
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Add(_) => "add",
            Op::Get(_) => "get",
            Op::Remove(_) => "remove",
            Op::Contains(_) => "contains",
            Op::Size => "size",
            Op::Capacity => "capacity",
            Op::Clear => "clear",
            Op::Print => "print",
            Op::Iter => "iter",
            Op::Purge(_) => "purge",
            Op::Stats => "stats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub op: Op,
    pub span: Span,
}

/// Parses a whole script. Stops at the first malformed command.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    split_commands(source)?
        .into_iter()
        .map(|(offset, text)| parse_command(offset, text))
        .collect()
}

/// Splits the source at newlines and unquoted `;`, dropping comments and blank
/// commands. Returns each command with its byte offset.
///
/// A quote still open at the end of a line or of the source is an error.
fn split_commands(source: &str) -> Result<Vec<(usize, &str)>, ScriptError> {
    let mut commands = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut in_comment = false;
    for (i, ch) in source.char_indices() {
        match ch {
            '\n' => {
                if in_quotes {
                    return Err(unterminated_quote(source, start, i));
                }
                if !in_comment {
                    commands.extend(trimmed(source, start, i));
                }
                start = i + 1;
                in_comment = false;
            }
            _ if in_comment => {}
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                commands.extend(trimmed(source, start, i));
                start = i + 1;
            }
            '#' if !in_quotes => {
                commands.extend(trimmed(source, start, i));
                in_comment = true;
            }
            _ => {}
        }
    }
    if in_quotes {
        return Err(unterminated_quote(source, start, source.len()));
    }
    if !in_comment {
        commands.extend(trimmed(source, start, source.len()));
    }
    Ok(commands)
}

/// The non-blank command text in `start..end`, with its byte offset.
fn trimmed(source: &str, start: usize, end: usize) -> Option<(usize, &str)> {
    let raw = &source[start..end];
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    Some((start + (raw.len() - raw.trim_start().len()), text))
}

fn unterminated_quote(source: &str, start: usize, end: usize) -> ScriptError {
    // The command holds at least the opening quote, so it is never blank.
    let (offset, text) = trimmed(source, start, end).unwrap_or((start, ""));
    ScriptError::new(
        ScriptErrorKind::UnterminatedQuote,
        Span::new(offset, offset + text.len()),
    )
}

fn parse_command(offset: usize, text: &str) -> Result<Command, ScriptError> {
    let span = Span::new(offset, offset + text.len());
    let fail = |kind| Err(ScriptError::new(kind, span.clone()));

    let (keyword, rest) = match text.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (text, ""),
    };

    let argument = |name: &'static str| {
        if rest.is_empty() {
            Err(ScriptError::new(
                ScriptErrorKind::MissingArgument(name),
                span.clone(),
            ))
        } else {
            Ok(unquote(rest).to_string())
        }
    };
    let bare = |op: Op| {
        if rest.is_empty() {
            Ok(op)
        } else {
            Err(ScriptError::new(
                ScriptErrorKind::UnexpectedArgument(op.name()),
                span.clone(),
            ))
        }
    };

    let op = match keyword.to_ascii_lowercase().as_str() {
        "add" => Op::Add(argument("add")?),
        "get" => {
            let raw = argument("get")?;
            match parse_index(&raw) {
                Some(index) => Op::Get(index),
                None => return fail(ScriptErrorKind::InvalidIndex(raw)),
            }
        }
        "remove" => Op::Remove(argument("remove")?),
        "contains" => Op::Contains(argument("contains")?),
        "purge" => Op::Purge(argument("purge")?),
        "size" => bare(Op::Size)?,
        "capacity" => bare(Op::Capacity)?,
        "clear" => bare(Op::Clear)?,
        "print" => bare(Op::Print)?,
        "iter" => bare(Op::Iter)?,
        "stats" => bare(Op::Stats)?,
        _ => return fail(ScriptErrorKind::UnknownCommand(keyword.to_string())),
    };

    Ok(Command { op, span })
}

/// Parses a list index. Negative and non-numeric input yields `None`.
pub(crate) fn parse_index(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}
