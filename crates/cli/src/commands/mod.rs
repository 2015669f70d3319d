//! Subcommand implementations.

pub mod audit;
pub mod recommend;
