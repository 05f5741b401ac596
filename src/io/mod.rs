//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Reading group documents and source text
//! - Consistent exit codes

pub mod exit_code;
pub mod input;

pub use exit_code::ExitCode;
pub use input::{read_groups, read_stdin};
