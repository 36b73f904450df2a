//! CLI subcommands.

pub mod board;
pub mod fetch;
pub mod init;
pub mod snapshot;
