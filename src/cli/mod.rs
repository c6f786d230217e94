//! Command-line surface for the `sgraph` binary.

pub mod commands;
