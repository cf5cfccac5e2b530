//! Command-line interface.

pub mod args;
pub mod build;
pub mod check;
pub mod init;
pub mod serve;

pub use args::{Cli, Commands};
