//! Structs and logic to parse Newick strings.
//!
//! This module provides the [NewickParser] struct, which offers methods
//! to parse single strings or semicolon-separated lists of trees, as well as
//! lazy parsing via a [NewickIterator].

use crate::model::{Node, TreeBuilder};
use crate::newick::tokenizer::{TokenKind, Tokenizer, tokenize};
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use crate::parser::utils::parse_float_prefix;
use tracing::{debug, warn};

// =#========================================================================#=
// NEWICK PARSER
// =#========================================================================#=
/// Parser (configuration) for Newick format phylogenetic trees with
/// arbitrary branching.
///
/// The parser holds no state besides its configuration; every call builds
/// its tree with a fresh [TreeBuilder]. It is [Copy] and can be shared
/// freely between threads.
///
/// # Construction
/// * [`new()`](Self::new) / [`Default`] - lenient branch lengths
///
/// # Configuration
/// * [`with_strict_lengths()`](Self::with_strict_lengths)
///     - Branch lengths without numeric prefix (e.g. `:abc`) fail with
///       [InvalidNumericLength](crate::parser::ParsingErrorType::InvalidNumericLength)
///       instead of being stored as NaN.
///
/// # Parsing
/// * [`parse_str`](Self::parse_str) - Parse single tree
/// * [`parse_all`](Self::parse_all) - Parse all trees eagerly
/// * [`iter`](Self::iter) - Parse trees lazily
///
/// # Example
/// ```
/// use branchset::newick::NewickParser;
///
/// let parser = NewickParser::new();
/// let root = parser.parse_str("(A:0.1,B:0.2,(C:0.3,D:0.4)E:0.5)F;").unwrap();
///
/// assert_eq!(root.name(), Some("F"));
/// assert_eq!(root.num_children(), 3);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NewickParser {
    strict_lengths: bool,
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl NewickParser {
    /// Creates a new [NewickParser] with default settings:
    /// - Lenient branch lengths (no numeric prefix is stored as NaN)
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the parser to reject branch lengths without numeric prefix.
    pub fn with_strict_lengths(mut self) -> Self {
        self.strict_lengths = true;
        self
    }

    /// Configures the parser whether or not to reject branch lengths
    /// without numeric prefix.
    pub fn set_strict_lengths(&mut self, strict_lengths: bool) -> &mut Self {
        self.strict_lengths = strict_lengths;
        self
    }

    /// Returns whether branch lengths are parsed strictly.
    pub fn strict_lengths(&self) -> bool {
        self.strict_lengths
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl NewickParser {
    /// Parses a single Newick tree.
    ///
    /// Parsing stops at the first `;`; anything after it is ignored.
    /// A missing `;` is fine. Empty or whitespace-only input yields an empty
    /// root node.
    ///
    /// # Arguments
    /// * `newick` - The Newick string
    ///
    /// # Returns
    /// * `Ok(Node)` - The root of the parsed tree
    /// * `Err(ParsingError)` - If the nesting is unbalanced or, in strict
    ///   mode, a branch length is not numeric
    pub fn parse_str(&self, newick: &str) -> Result<Node, ParsingError> {
        debug!(input_len = newick.len(), "Parsing Newick string");
        let mut tokens = tokenize(newick);
        let root = self.parse_tree(&mut tokens)?;

        if !remaining(&tokens).trim().is_empty() {
            debug!(
                position = tokens.position(),
                "Ignoring content after terminating ';'"
            );
        }

        Ok(root)
    }

    /// Parses all `;`-separated Newick trees of the given string.
    ///
    /// # Arguments
    /// * `newick` - Newick strings, each terminated by `;`
    ///   (the terminator of the last one is optional)
    ///
    /// # Returns
    /// * `Ok(Vec<Node>)` - The roots of all parsed trees; empty for blank input
    /// * `Err(ParsingError)` - If any tree fails to parse
    pub fn parse_all(&self, newick: &str) -> Result<Vec<Node>, ParsingError> {
        let trees = self.iter(newick).collect::<Result<Vec<_>, _>>()?;
        debug!(num_trees = trees.len(), "Parsed Newick trees");
        Ok(trees)
    }

    /// Returns an iterator parsing the `;`-separated trees of `newick` lazily.
    ///
    /// # Arguments
    /// * `newick` - Newick strings, each terminated by `;`
    ///
    /// # Returns
    /// A [NewickIterator] yielding one `Result<Node, ParsingError>` per tree
    pub fn iter<'a>(&self, newick: &'a str) -> NewickIterator<'a> {
        NewickIterator {
            parser: *self,
            tokens: tokenize(newick),
            done: newick.trim().is_empty(),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================
/// Structural event preceding a literal, deciding what the literal means.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LastEvent {
    /// Nothing seen yet for this tree
    Start,
    Open,
    Close,
    Comma,
    Colon,
}

impl NewickParser {
    /// Consumes tokens up to and including the next `;` (or EOF)
    /// and builds the tree they describe.
    ///
    /// Transitions:
    /// - `(` opens a branchset on the current node
    /// - `,` starts the next sibling
    /// - `)` closes the innermost branchset
    /// - `:` marks the next literal as branch length
    /// - `;` ends the tree
    /// - literal names the current node, or is its length after `:`
    fn parse_tree(&self, tokens: &mut Tokenizer<'_>) -> Result<Node, ParsingError> {
        let input = tokens.input();
        let mut builder = TreeBuilder::new();
        let mut last = LastEvent::Start;
        let mut end = input.len();

        for token in tokens.by_ref() {
            let at = |kind: ParsingErrorType| ParsingError::at(kind, input, token.position);
            match token.kind {
                TokenKind::Open => {
                    builder.open_branchset();
                    last = LastEvent::Open;
                }
                TokenKind::Comma => {
                    builder.add_sibling().map_err(at)?;
                    last = LastEvent::Comma;
                }
                TokenKind::Close => {
                    builder.close_branchset().map_err(at)?;
                    last = LastEvent::Close;
                }
                TokenKind::Colon => last = LastEvent::Colon,
                TokenKind::Semicolon => {
                    end = token.position;
                    break;
                }
                TokenKind::Literal(text) => match last {
                    LastEvent::Start | LastEvent::Open | LastEvent::Close | LastEvent::Comma => {
                        builder.set_name(text);
                    }
                    LastEvent::Colon => {
                        let length = self.parse_branch_length(text, input, token.position)?;
                        builder.set_length(length);
                    }
                },
            }
        }

        builder
            .finish_tree()
            .map_err(|kind| ParsingError::at(kind, input, end))
    }

    /// Interprets the literal following a `:`.
    ///
    /// An empty literal (`A:`) has no numeric prefix either.
    ///
    /// # Returns
    /// - `Ok(length)` with the value of the literal's numeric prefix,
    ///   or NaN if there is none and lengths are lenient
    /// - [ParsingError] if there is no numeric prefix and lengths are strict
    fn parse_branch_length(
        &self,
        text: &str,
        input: &str,
        position: usize,
    ) -> Result<f64, ParsingError> {
        match parse_float_prefix(text) {
            Some(length) => Ok(length),
            None if self.strict_lengths => {
                Err(ParsingError::invalid_numeric_length(input, position, text))
            }
            None => {
                warn!(position, literal = text, "Branch length is not numeric, storing NaN");
                Ok(f64::NAN)
            }
        }
    }
}

/// Returns the input not yet consumed by the tokenizer.
fn remaining<'a>(tokens: &Tokenizer<'a>) -> &'a str {
    &tokens.input()[tokens.position()..]
}

// =#========================================================================#=
// NEWICK ITERATOR (lazy parser)
// =#========================================================================#=
/// Iterator to parse `;`-separated Newick trees.
///
/// Created by [NewickParser::iter()].
/// Yields `Result<Node, ParsingError>` for each tree and stops after
/// the first error. Stray terminators (`;;` or `; ;`) do not yield
/// empty trees.
pub struct NewickIterator<'a> {
    parser: NewickParser,
    tokens: Tokenizer<'a>,
    done: bool,
}

impl NewickIterator<'_> {
    /// Returns the configuration of the underlying [NewickParser].
    pub fn parser(&self) -> &NewickParser {
        &self.parser
    }
}

impl Iterator for NewickIterator<'_> {
    type Item = Result<Node, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.parser.parse_tree(&mut self.tokens) {
                Ok(tree) => {
                    // Only whitespace left means no further tree
                    if remaining(&self.tokens).trim().is_empty() {
                        self.done = true;
                    }
                    if tree.is_empty() {
                        debug!(position = self.tokens.position(), "Skipping empty tree");
                        continue;
                    }
                    return Some(Ok(tree));
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}
