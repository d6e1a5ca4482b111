//! Tokenizer splitting a Newick string at its structural characters.
//!
//! Each of `(`, `)`, `,`, `:` and `;` becomes a token of its own. The text
//! between two structural characters becomes a [Literal](TokenKind::Literal)
//! token with surrounding whitespace trimmed. A literal is emitted before the
//! first structural character, between any two of them, and after the last
//! one, even if it is empty:
//!
//! ```text
//! "(A, B);"  →  ""  (  "A"  ,  "B"  )  ""  ;  ""
//! ""         →  ""
//! ```
//!
//! The tokenizer performs no validation and never fails.

use crate::newick::defs::NEWICK_STRUCTURAL_DELIMITERS;

// =#========================================================================#=
// TOKEN
// =#========================================================================#=
/// Kind of a token, borrowing literal text from the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// `(` - opens a branchset
    Open,
    /// `)` - closes a branchset
    Close,
    /// `,` - separates siblings
    Comma,
    /// `:` - precedes a branch length
    Colon,
    /// `;` - terminates a tree
    Semicolon,
    /// Trimmed text between structural characters, possibly empty
    Literal(&'a str),
}

impl TokenKind<'_> {
    fn from_delimiter(byte: u8) -> Self {
        match byte {
            b'(' => TokenKind::Open,
            b')' => TokenKind::Close,
            b',' => TokenKind::Comma,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            _ => unreachable!("not a structural delimiter: {:?}", byte as char),
        }
    }
}

/// A token together with the byte offset where it starts in the input.
///
/// For literals, the offset points at the first non-whitespace character
/// (or where the empty literal sits).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub position: usize,
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================#=
/// Iterator over the [Token]s of a Newick string.
///
/// Created by [tokenize].
///
/// # Example
/// ```
/// use branchset::newick::tokenizer::{tokenize, TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("(A,B);").map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![
///     TokenKind::Literal(""),
///     TokenKind::Open,
///     TokenKind::Literal("A"),
///     TokenKind::Comma,
///     TokenKind::Literal("B"),
///     TokenKind::Close,
///     TokenKind::Literal(""),
///     TokenKind::Semicolon,
///     TokenKind::Literal(""),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    pending_delimiter: Option<Token<'a>>,
    done: bool,
}

/// Creates a [Tokenizer] over `input`.
pub fn tokenize(input: &str) -> Tokenizer<'_> {
    Tokenizer {
        input,
        pos: 0,
        pending_delimiter: None,
        done: false,
    }
}

impl<'a> Tokenizer<'a> {
    /// Returns the input this tokenizer scans.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the byte offset just after the last structural character
    /// consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scans the literal starting at the current position up to the next
    /// structural character (which is stashed for the following call) or EOF.
    fn scan_literal(&mut self) -> Token<'a> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        // Structural characters are ASCII, so every offset found here
        // is a char boundary of the input.
        let end = bytes[start..]
            .iter()
            .position(|b| NEWICK_STRUCTURAL_DELIMITERS.contains(b))
            .map(|offset| start + offset);

        let raw = match end {
            Some(end) => {
                self.pending_delimiter = Some(Token {
                    kind: TokenKind::from_delimiter(bytes[end]),
                    position: end,
                });
                self.pos = end + 1;
                &self.input[start..end]
            }
            None => {
                self.done = true;
                self.pos = self.input.len();
                &self.input[start..]
            }
        };

        let leading = raw.len() - raw.trim_start().len();
        Token {
            kind: TokenKind::Literal(raw.trim()),
            position: start + leading,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(delimiter) = self.pending_delimiter.take() {
            return Some(delimiter);
        }
        if self.done {
            return None;
        }
        Some(self.scan_literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(input: &str) -> Vec<TokenKind<'_>> {
        tokenize(input).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(""), vec![Literal("")]);
        assert_eq!(kinds("  \n\t "), vec![Literal("")]);
    }

    #[test]
    fn test_adjacent_delimiters_yield_empty_literals() {
        assert_eq!(
            kinds("(,);"),
            vec![
                Literal(""),
                Open,
                Literal(""),
                Comma,
                Literal(""),
                Close,
                Literal(""),
                Semicolon,
                Literal(""),
            ]
        );
    }

    #[test]
    fn test_whitespace_trimmed_inner_kept() {
        assert_eq!(
            kinds(" ( Homo sapiens : 0.5 ) ; "),
            vec![
                Literal(""),
                Open,
                Literal("Homo sapiens"),
                Colon,
                Literal("0.5"),
                Close,
                Literal(""),
                Semicolon,
                Literal(""),
            ]
        );
    }

    #[test]
    fn test_single_leaf_without_delimiters() {
        assert_eq!(kinds("A"), vec![Literal("A")]);
        assert_eq!(kinds("A:1.5;"), vec![Literal("A"), Colon, Literal("1.5"), Semicolon, Literal("")]);
    }

    #[test]
    fn test_positions() {
        let tokens: Vec<Token> = tokenize("(A, B)").collect();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        // "" ( A , B ) ""
        assert_eq!(positions, vec![0, 0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_multibyte_labels() {
        assert_eq!(
            kinds("(Ürsus,Æ:1);"),
            vec![
                Literal(""),
                Open,
                Literal("Ürsus"),
                Comma,
                Literal("Æ"),
                Colon,
                Literal("1"),
                Close,
                Literal(""),
                Semicolon,
                Literal(""),
            ]
        );
    }
}
