//! Token types for text analysis.
//!
//! A [`Token`] is the unit flowing through the analysis pipeline: the
//! tokenizer produces them, filters rewrite or drop them, and the vectorizer
//! counts their text.
//!
//! # Examples
//!
//! ```
//! use autojudge::analysis::token::Token;
//!
//! let token = Token::with_offsets("graph", 1, 6, 11);
//! assert_eq!(token.text, "graph");
//! assert_eq!(token.start_offset, 6);
//! assert!(!token.is_stopped());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content.
    pub text: String,

    /// Position in the token stream (0-based).
    pub position: usize,

    /// Byte offset of the token start in the analyzed text.
    pub start_offset: usize,

    /// Byte offset one past the token end in the analyzed text.
    pub end_offset: usize,

    /// Whether a filter marked this token as removed.
    pub stopped: bool,

    /// Number of source positions this token spans (2 for a bigram).
    pub position_length: usize,
}

impl Token {
    /// Create a new token at the given position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
            position_length: 1,
        }
    }

    /// Create a new token with byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
            position_length: 1,
        }
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Clone this token with different text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Set the number of positions this token spans.
    pub fn with_position_length(mut self, length: usize) -> Self {
        self.position_length = length;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("dfs", 3);
        assert_eq!(token.text, "dfs");
        assert_eq!(token.position, 3);
        assert_eq!(token.position_length, 1);
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_stop_and_rewrite() {
        let token = Token::new("The", 0).stop();
        assert!(token.is_stopped());

        let rewritten = token.with_text("the");
        assert_eq!(rewritten.text, "the");
        assert!(rewritten.is_stopped());
    }

    #[test]
    fn test_into_token_stream() {
        let stream = vec![Token::new("a", 0), Token::new("b", 1)].into_token_stream();
        assert_eq!(stream.count(), 2);
    }
}
