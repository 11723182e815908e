//! Operation scripts: a tiny command language that drives a list or a set.
//!
//! A script is a sequence of commands separated by newlines or `;`. Each
//! command is a keyword optionally followed by one argument, which runs to the
//! end of the command. Wrap an argument in double quotes to keep a `;` or `#`
//! inside it. `#` outside quotes starts a comment.
//!
//! ```
//! use arraykit_core::script::{ContainerKind, Session};
//!
//! let mut session = Session::new(ContainerKind::List, Default::default()).unwrap();
//! let output = session
//!     .run("add Apple; add Banana; add Cherry\nremove 1  # Banana\nprint")
//!     .unwrap();
//! assert_eq!(output, vec!["Banana", "[Apple, Cherry]"]);
//! ```

mod error;
mod parser;
mod session;

pub use error::{ScriptError, ScriptErrorKind};
pub use parser::{Command, Op, parse};
pub use session::{Container, ContainerKind, Session};

use core::ops::Range;

/// Byte range of a command in its source text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span(start..end)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}
