pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod result;
pub mod rules;
pub mod scanner;

pub use error::{Result, SiteLintError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LINT_ERRORS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
