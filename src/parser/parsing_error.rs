//! Error types for the Newick parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while building a tree from a Newick string.

use thiserror::Error;

/// Default length of context provided by error from parser
pub(crate) const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur during Newick parsing.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    /// A `)` or `,` without an open branchset, or a `(` that is never closed.
    #[error("Structural imbalance - {0}")]
    StructuralImbalance(String),
    /// A branch length without numeric prefix (only in strict mode).
    #[error("Invalid branch length {0:?}")]
    InvalidNumericLength(String),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and surrounding input).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at position {position}{}", context_suffix(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} chars): {}", context.chars().count(), context)
    }
}

impl ParsingError {
    /// Creates a ParsingError for `kind` at byte offset `position` of `input`.
    ///
    /// The context holds up to [DEFAULT_CONTEXT_LENGTH] characters of `input`
    /// starting at `position`.
    pub fn at(kind: ParsingErrorType, input: &str, position: usize) -> Self {
        let context = input
            .get(position..)
            .unwrap_or_default()
            .chars()
            .take(DEFAULT_CONTEXT_LENGTH)
            .collect();
        Self { kind, position, context }
    }

    /// Convenience constructor for InvalidNumericLength
    pub fn invalid_numeric_length(input: &str, position: usize, literal: &str) -> Self {
        Self::at(
            ParsingErrorType::InvalidNumericLength(literal.to_string()),
            input,
            position,
        )
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the byte offset where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the input following the error position
    pub fn context(&self) -> &str {
        &self.context
    }
}
