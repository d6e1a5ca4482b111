//! Shared parsing infrastructure.
//!
//! This module provides error handling for the Newick parser, along with
//! helpers to interpret literal tokens.

pub mod parsing_error;
pub mod utils;

pub use parsing_error::{ParsingError, ParsingErrorType};
