//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use arraykit_core::script::ContainerKind;
use arraykit_core::{GrowthPolicy, StoreOptions};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// arraykit - growable array containers driven by operation scripts
#[derive(Parser, Debug)]
#[command(name = "arraykit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an inline script
    Eval(EvalArgs),

    /// Run a script file (use - for stdin)
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Script to run, commands separated by `;` or newlines
    pub script: String,

    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the script file (use - for stdin)
    pub file: String,

    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Container options shared by `eval` and `run`.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Container the script operates on
    #[arg(long, default_value = "list")]
    pub kind: Kind,

    /// Initial number of slots
    #[arg(long, default_value_t = arraykit_core::DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// How capacity grows when the container is full
    #[arg(long, default_value = "one-and-half")]
    pub growth: Growth,
}

impl SessionArgs {
    pub fn options(&self) -> StoreOptions {
        StoreOptions {
            initial_capacity: self.capacity,
            growth: self.growth.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Kind {
    /// Ordered, indexed, duplicates allowed
    #[default]
    List,
    /// Ordered by insertion, duplicates rejected
    Set,
}

impl From<Kind> for ContainerKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::List => ContainerKind::List,
            Kind::Set => ContainerKind::Set,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Growth {
    /// New capacity is 1.5x the old one
    #[default]
    OneAndHalf,
    /// New capacity is 2x the old one
    Double,
}

impl From<Growth> for GrowthPolicy {
    fn from(growth: Growth) -> Self {
        match growth {
            Growth::OneAndHalf => GrowthPolicy::OneAndHalf,
            Growth::Double => GrowthPolicy::Double,
        }
    }
}
