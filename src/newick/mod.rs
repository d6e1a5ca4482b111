//! Newick format parser for phylogenetic trees.
//!
//! This module provides [NewickParser] to parse Newick format strings
//! into [Node] trees. Parsing happens in two layers: the [tokenizer] splits
//! the string at its structural characters, and the parser feeds the tokens
//! into a [TreeBuilder](crate::model::TreeBuilder).
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses a single string, returns its root [Node]
//! * [`parse_all`] - parses a `;`-separated list of trees
//!
//! # Full API
//! For more control, configure a [NewickParser]:
//! * [`NewickParser::parse_str`] - parse a single tree
//! * [`NewickParser::parse_all`] - parse all trees
//! * [`NewickParser::iter`] - obtain an iterator over trees
//!
//! # Format
//! The accepted Newick grammar is minimal:
//! * `tree ::= node [';']`
//! * `node ::= [ '(' node { ',' node } ')' ] [name] [':' length]`
//!
//! Furthermore:
//! * Whitespace around structural characters is ignored,
//!   whitespace inside a name is kept
//! * Any number of children per internal node, including one
//! * Names, lengths and even the `;` are optional:
//!   `(,,(,));` is a valid tree of unnamed nodes
//! * Lengths use the leading numeric prefix of their literal (`0.5kya` is 0.5)
//!
//! Comments, quoted labels and annotations are not supported; their
//! characters simply become part of names.

mod defs;
pub mod parser;
pub mod tokenizer;

pub use parser::{NewickIterator, NewickParser};

use crate::model::Node;
use crate::parser::ParsingError;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a single Newick string to obtain the root [Node].
///
/// This is a convenience function for quick parsing of a single Newick string
/// using default settings and thus not requiring configuration of a parser.
///
/// # Arguments
/// * `newick` - The Newick format string to parse
///
/// # Returns
/// * [Node] - Root of the tree parsed from the string
/// * [ParsingError] - If the parentheses of the string are unbalanced
///
/// # Example
/// ```
/// use branchset::newick::parse_str;
///
/// let root = parse_str("(Fratercula_cirrhata,(Fratercula_arctica,Fratercula_corniculata));")?;
/// assert_eq!(root.num_children(), 2);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_str<S: AsRef<str>>(newick: S) -> Result<Node, ParsingError> {
    NewickParser::new().parse_str(newick.as_ref())
}

/// Parses a string containing a semicolon-separated list of Newick trees.
///
/// # Arguments
/// * `newick` - Newick strings, each terminated by `;`
///
/// # Returns
/// * `Vec<Node>` - Roots of all trees, in input order
/// * [ParsingError] - If any of the trees is malformed
///
/// # Example
/// ```
/// use branchset::newick::parse_all;
///
/// let trees = parse_all("(A,B);\n(C,(D,E));\n")?;
/// assert_eq!(trees.len(), 2);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_all<S: AsRef<str>>(newick: S) -> Result<Vec<Node>, ParsingError> {
    NewickParser::new().parse_all(newick.as_ref())
}
