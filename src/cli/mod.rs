//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod file;
pub mod site;

pub use args::{Cli, Commands};
