//! Command-line interface for the `gpath` tool.

pub mod commands;
pub mod input;
