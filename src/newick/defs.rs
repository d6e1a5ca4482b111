//! Constants for the Newick parser.

/// Structural characters of the Newick grammar: parentheses, comma, colon, semicolon
pub(crate) const NEWICK_STRUCTURAL_DELIMITERS: &[u8] = b"(),:;";
