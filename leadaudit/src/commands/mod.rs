// leadaudit/src/commands/mod.rs
//! Command implementations for the leadaudit CLI.

pub mod audit;
