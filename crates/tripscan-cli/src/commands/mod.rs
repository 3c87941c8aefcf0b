//! Subcommands of the `tripscan` binary.

pub mod batch;
pub mod config;
pub mod process;
