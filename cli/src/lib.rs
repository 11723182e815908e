//! arraykit CLI library.
//!
//! This crate provides the command-line interface for running arraykit
//! operation scripts. The public modules are primarily exposed for testing
//! purposes.

pub mod cli;
pub mod commands;
pub mod common;
