//! Token types handed over by the host tokenizer.
//!
//! Rules receive tokens one at a time, in file order. The span is an opaque
//! position reference: rules copy it into diagnostics untouched and never
//! interpret it.

use serde::{Deserialize, Serialize};

/// A span representing a range in the scanned source.
///
/// Uses byte offsets (0-indexed). Rules only pass spans through to
/// diagnostics; resolving them to line/column locations is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (0-indexed, inclusive).
    pub start: u32,
    /// End byte offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Token categories a rule can register for.
///
/// The host dispatch table routes each token only to the rules whose
/// manifest declares its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// A line or block comment.
    Comment,
    /// A documentation comment.
    DocComment,
    /// A string literal.
    StringLiteral,
    /// A run of whitespace.
    Whitespace,
}

/// One lexical unit produced by the host tokenizer.
///
/// The content is the raw token text; comment delimiters such as `//` or
/// `/*` are not stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's category.
    pub category: TokenCategory,
    /// Raw UTF-8 text of the token.
    pub content: String,
    /// Position of the token in the scanned source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(category: TokenCategory, content: impl Into<String>, span: Span) -> Self {
        Self {
            category,
            content: content.into(),
            span,
        }
    }

    /// Creates a comment token.
    pub fn comment(content: impl Into<String>, span: Span) -> Self {
        Self::new(TokenCategory::Comment, content, span)
    }
}
