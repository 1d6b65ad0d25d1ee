// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The immutable token model.
//!
//! A [`Token`] is one lexical unit of source text: its semantic category, the
//! exact text it covers, and its 1-based position. Tokens carry no identity
//! beyond their fields; two tokens with equal fields are interchangeable.

use std::fmt;

/// Semantic categories for lexical tokens.
///
/// This is a closed set. Each category has two stable string renderings:
/// a short code used as the CSS class in compact output mode (kept
/// bit-compatible with widely deployed stylesheets) and a long descriptive
/// class name used in semantic mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenType {
    /// Language keyword (`if`, `return`, ...)
    Keyword,
    /// Declaration keyword (`def`, `fn`, `class`, ...)
    KeywordDeclaration,
    /// Plain identifier
    Name,
    /// Function name at its definition site
    NameFunction,
    /// Class or type name at its definition site
    NameClass,
    /// Built-in function or value
    NameBuiltin,
    /// String literal
    String,
    /// Documentation string or doc comment
    StringDoc,
    /// Escape sequence or character entity
    StringEscape,
    /// Integer literal
    Number,
    /// Floating-point literal
    NumberFloat,
    /// Operator
    Operator,
    /// Punctuation and delimiters
    Punctuation,
    /// Comment (block form)
    Comment,
    /// Single-line comment
    CommentSingle,
    /// Whitespace
    Whitespace,
    /// Text no rule matched; the scanner never drops it
    Error,
    /// Text that is valid but carries no particular category
    Other,
}

impl TokenType {
    /// All token types, in declaration order.
    pub const ALL: [TokenType; 18] = [
        TokenType::Keyword,
        TokenType::KeywordDeclaration,
        TokenType::Name,
        TokenType::NameFunction,
        TokenType::NameClass,
        TokenType::NameBuiltin,
        TokenType::String,
        TokenType::StringDoc,
        TokenType::StringEscape,
        TokenType::Number,
        TokenType::NumberFloat,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Comment,
        TokenType::CommentSingle,
        TokenType::Whitespace,
        TokenType::Error,
        TokenType::Other,
    ];

    /// The compact CSS class code for this type.
    ///
    /// This table is a stable external contract; stylesheets authored against
    /// it must keep working unmodified.
    pub const fn css_code(self) -> &'static str {
        match self {
            TokenType::Keyword => "k",
            TokenType::KeywordDeclaration => "kd",
            TokenType::Name => "n",
            TokenType::NameFunction => "nf",
            TokenType::NameClass => "nc",
            TokenType::NameBuiltin => "nb",
            TokenType::String => "s",
            TokenType::StringDoc => "sd",
            TokenType::StringEscape => "se",
            TokenType::Number => "m",
            TokenType::NumberFloat => "mf",
            TokenType::Operator => "o",
            TokenType::Punctuation => "p",
            TokenType::Comment => "c",
            TokenType::CommentSingle => "c1",
            TokenType::Whitespace => "w",
            TokenType::Error => "err",
            TokenType::Other => "x",
        }
    }

    /// The long descriptive CSS class name for this type (semantic mode).
    pub const fn semantic_class(self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::KeywordDeclaration => "keyword-declaration",
            TokenType::Name => "name",
            TokenType::NameFunction => "name-function",
            TokenType::NameClass => "name-class",
            TokenType::NameBuiltin => "name-builtin",
            TokenType::String => "string",
            TokenType::StringDoc => "string-doc",
            TokenType::StringEscape => "string-escape",
            TokenType::Number => "number",
            TokenType::NumberFloat => "number-float",
            TokenType::Operator => "operator",
            TokenType::Punctuation => "punctuation",
            TokenType::Comment => "comment",
            TokenType::CommentSingle => "comment-single",
            TokenType::Whitespace => "whitespace",
            TokenType::Error => "error",
            TokenType::Other => "other",
        }
    }

    /// The dotted category path, e.g. `keyword.declaration`.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::KeywordDeclaration => "keyword.declaration",
            TokenType::Name => "name",
            TokenType::NameFunction => "name.function",
            TokenType::NameClass => "name.class",
            TokenType::NameBuiltin => "name.builtin",
            TokenType::String => "string",
            TokenType::StringDoc => "string.doc",
            TokenType::StringEscape => "string.escape",
            TokenType::Number => "number",
            TokenType::NumberFloat => "number.float",
            TokenType::Operator => "operator",
            TokenType::Punctuation => "punctuation",
            TokenType::Comment => "comment",
            TokenType::CommentSingle => "comment.single",
            TokenType::Whitespace => "whitespace",
            TokenType::Error => "error",
            TokenType::Other => "other",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit of source text.
///
/// Tokens are produced once per matched span during a scan and never mutated.
/// Concatenating the `text` of every token yielded for an input reproduces
/// that input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Semantic category.
    pub kind: TokenType,
    /// The exact source text this token covers.
    pub text: String,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character, in characters, with tabs
    /// expanded to the configured tab stops.
    pub column: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenType, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self { kind, text: text.into(), line, column }
    }

    /// Returns the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {:?}", self.line, self.column, self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_equality_is_field_wise() {
        let a = Token::new(TokenType::Keyword, "if", 1, 1);
        let b = Token::new(TokenType::Keyword, "if", 1, 1);
        assert_eq!(a, b);

        let c = Token::new(TokenType::Keyword, "if", 1, 2);
        assert_ne!(a, c);
    }

    #[test]
    fn test_compact_codes_are_stable() {
        assert_eq!(TokenType::Keyword.css_code(), "k");
        assert_eq!(TokenType::KeywordDeclaration.css_code(), "kd");
        assert_eq!(TokenType::Name.css_code(), "n");
        assert_eq!(TokenType::NameFunction.css_code(), "nf");
        assert_eq!(TokenType::NameClass.css_code(), "nc");
        assert_eq!(TokenType::NameBuiltin.css_code(), "nb");
        assert_eq!(TokenType::String.css_code(), "s");
        assert_eq!(TokenType::StringDoc.css_code(), "sd");
        assert_eq!(TokenType::StringEscape.css_code(), "se");
        assert_eq!(TokenType::Number.css_code(), "m");
        assert_eq!(TokenType::NumberFloat.css_code(), "mf");
        assert_eq!(TokenType::Operator.css_code(), "o");
        assert_eq!(TokenType::Punctuation.css_code(), "p");
        assert_eq!(TokenType::Comment.css_code(), "c");
        assert_eq!(TokenType::CommentSingle.css_code(), "c1");
        assert_eq!(TokenType::Whitespace.css_code(), "w");
        assert_eq!(TokenType::Error.css_code(), "err");
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in TokenType::ALL.iter().enumerate() {
            for b in &TokenType::ALL[i + 1..] {
                assert_ne!(a.css_code(), b.css_code());
                assert_ne!(a.semantic_class(), b.semantic_class());
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenType::KeywordDeclaration.to_string(), "keyword.declaration");
        let tok = Token::new(TokenType::Name, "x", 2, 5);
        assert_eq!(tok.to_string(), "2:5 name \"x\"");
    }
}
