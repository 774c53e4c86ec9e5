//! CLI module
//!
//! Command-line interface: one positional pool argument, URLs on stdout,
//! diagnostics and logs on stderr.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
