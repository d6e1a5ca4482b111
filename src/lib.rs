//! Branchset is a library to parse phylogenetic trees from Newick strings
//! into nested, owned node trees.
//!
//! Each [Node] has an optional name, an optional branch length and, if it
//! is an internal node, an ordered branchset of children.
//! Core functionality provided:
//! - Newick: Parse a single Newick string or a `;`-separated list of them.
//! - Tree model: [Node] owns its subtree; leaves and internal nodes with an
//!   empty branchset stay distinguishable.
//! - Tree builder: explicit ancestor stack, so nesting depth is not limited
//!   by the call stack (neither for parsing nor for dropping a tree).
//! - Configurability: lenient (default) or strict branch length parsing.
//! - Serialization: [Node] implements `serde` traits, producing the common
//!   JSON shape with a `branchset` array.
//!
//! Limitations:
//! - No comments, quoted labels or annotations
//! - No writer, no tree algorithms
//!
//! # Usage patterns
//! 1. [parse] (or [newick::parse_str]) parses a string with default settings.
//! 2. Configure a [NewickParser](crate::newick::NewickParser) for strict
//!    branch lengths or to parse several trees.
//!
//! ## Example Default Configuration
//! ```
//! use branchset::parse;
//!
//! let root = parse("(A:0.1,B:0.2,(C:0.3,D:0.4)E:0.5)F;").unwrap();
//! assert_eq!(root.name(), Some("F"));
//!
//! let e = &root.children().unwrap()[2];
//! assert_eq!(e.name(), Some("E"));
//! assert_eq!(e.length(), Some(0.5));
//! assert_eq!(e.num_children(), 2);
//! ```
//!
//! ## Example Parser Configuration
//! ```
//! use branchset::newick::NewickParser;
//! use branchset::parser::ParsingErrorType;
//!
//! let parser = NewickParser::new().with_strict_lengths();
//! let err = parser.parse_str("(A:abc,B:1.0);").unwrap_err();
//! assert!(matches!(err.kind(), ParsingErrorType::InvalidNumericLength(_)));
//! ```

pub mod model;
pub mod newick;
pub mod parser;

pub use crate::model::Node;
pub use crate::parser::ParsingError;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a Newick string using default settings, returning the root [Node].
///
/// See [`newick::parse_str`] for full documentation.
pub fn parse(newick: &str) -> Result<Node, ParsingError> {
    newick::parse_str(newick)
}
