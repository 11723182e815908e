//! Executes parsed commands against a container.

use core::fmt;

use super::parser::parse_index;
use super::{Command, Op, ScriptError, ScriptErrorKind, parse};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::options::StoreOptions;
use crate::{ArrayList, ArraySet};

/// Which container a session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainerKind {
    #[default]
    List,
    Set,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => f.write_str("list"),
            ContainerKind::Set => f.write_str("set"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Container {
    List(ArrayList<String>),
    Set(ArraySet<String>),
}

impl Container {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::List(_) => ContainerKind::List,
            Container::Set(_) => ContainerKind::Set,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::List(list) => fmt::Display::fmt(list, f),
            Container::Set(set) => fmt::Display::fmt(set, f),
        }
    }
}

/// A container driven by script commands.
#[derive(Debug, Clone)]
pub struct Session {
    container: Container,
}

impl Session {
    /// Creates a session over an empty container.
    ///
    /// Fails with [`Error::InvalidCapacity`](crate::Error::InvalidCapacity)
    /// for a zero initial capacity.
    pub fn new(kind: ContainerKind, options: StoreOptions) -> Result<Self> {
        let container = match kind {
            ContainerKind::List => Container::List(ArrayList::with_options(options)?),
            ContainerKind::Set => Container::Set(ArraySet::with_options(options)?),
        };
        Ok(Self { container })
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Parses and runs `source`, collecting output lines.
    ///
    /// Execution stops at the first error; commands before it have already
    /// taken effect, but their output is discarded with the error. Use
    /// [`Session::run_with`] to keep it.
    pub fn run(&mut self, source: &str) -> Result<Vec<String>, ScriptError> {
        let mut output = Vec::new();
        self.run_with(source, |line| output.push(line))?;
        Ok(output)
    }

    /// Parses and runs `source`, handing each output line to `emit` as soon as
    /// its command finishes.
    ///
    /// Nothing runs if the script fails to parse. A runtime error stops the
    /// script after the lines of every earlier command have been emitted.
    pub fn run_with(
        &mut self,
        source: &str,
        mut emit: impl FnMut(String),
    ) -> Result<(), ScriptError> {
        let commands = parse(source)?;
        tracing::debug!(commands = commands.len(), "parsed script");
        for command in &commands {
            self.execute(command)?.into_iter().for_each(&mut emit);
        }
        Ok(())
    }

    /// Runs one command and returns the lines it prints.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<String>, ScriptError> {
        tracing::debug!(command = command.op.name(), kind = %self.container.kind(), "executing");
        let fail = |kind: ScriptErrorKind| ScriptError::new(kind, command.span.clone());

        let lines = match (&mut self.container, &command.op) {
            (Container::List(list), Op::Add(value)) => {
                list.push(value.clone());
                vec![]
            }
            (Container::Set(set), Op::Add(value)) => vec![set.insert(value.clone()).to_string()],

            (Container::List(list), Op::Get(index)) => {
                vec![list.get(*index).map_err(|e| fail(e.into()))?.clone()]
            }
            (Container::Set(set), Op::Get(index)) => {
                vec![set.get(*index).map_err(|e| fail(e.into()))?.clone()]
            }

            (Container::List(list), Op::Remove(raw)) => {
                let index =
                    parse_index(raw).ok_or_else(|| fail(ScriptErrorKind::InvalidIndex(raw.clone())))?;
                vec![list.remove(index).map_err(|e| fail(e.into()))?]
            }
            (Container::Set(set), Op::Remove(value)) => vec![set.remove(value).to_string()],

            (Container::List(list), Op::Contains(value)) => vec![list.contains(value).to_string()],
            (Container::Set(set), Op::Contains(value)) => vec![set.contains(value).to_string()],

            (Container::List(list), Op::Size) => vec![list.len().to_string()],
            (Container::Set(set), Op::Size) => vec![set.len().to_string()],

            (Container::List(list), Op::Capacity) => vec![list.capacity().to_string()],
            (Container::Set(set), Op::Capacity) => vec![set.capacity().to_string()],

            (Container::List(_), Op::Clear) => {
                return Err(fail(ScriptErrorKind::Unsupported {
                    command: "clear",
                    kind: ContainerKind::List,
                }));
            }
            (Container::Set(set), Op::Clear) => {
                set.clear();
                vec![]
            }

            (container, Op::Print) => vec![container.to_string()],

            (Container::List(list), Op::Iter) => list.iter().cloned().collect(),
            (Container::Set(set), Op::Iter) => set.iter().cloned().collect(),

            (Container::List(list), Op::Purge(value)) => {
                vec![purge(list.cursor(), value).map_err(|e| fail(e.into()))?.to_string()]
            }
            (Container::Set(set), Op::Purge(value)) => {
                vec![purge(set.cursor(), value).map_err(|e| fail(e.into()))?.to_string()]
            }

            (Container::List(list), Op::Stats) => vec![list.stats().to_string()],
            (Container::Set(set), Op::Stats) => vec![set.stats().to_string()],
        };
        Ok(lines)
    }
}

/// Walks the cursor to the end, removing every element equal to `value`.
fn purge<T: PartialEq>(mut cursor: Cursor<'_, T>, value: &T) -> Result<usize> {
    let mut removed = 0;
    while cursor.has_next() {
        if cursor.next()? == value {
            cursor.remove()?;
            removed += 1;
        }
    }
    Ok(removed)
}
