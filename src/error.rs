// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error types for lexer lookup and lexer definition.
//!
//! There is deliberately no "tokenization failed" variant: scanning arbitrary
//! source text never fails. Malformed input degrades to `error`-typed tokens
//! inside the token stream instead of aborting the caller.

use thiserror::Error;

/// Failures surfaced by the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested language matched neither a canonical name nor an alias.
    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    /// A rule table violated a construction-time bound or failed to compile.
    ///
    /// This is fatal for the affected lexer and is never deferred to a
    /// scanning call.
    #[error("invalid lexer definition for `{language}`: {reason}")]
    LexerDefinition {
        /// Canonical name of the lexer being defined.
        language: String,
        /// Human-readable description of the violated bound.
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownLanguage("klingon".to_string());
        assert_eq!(err.to_string(), "unknown language `klingon`");

        let err = Error::LexerDefinition {
            language: "python".to_string(),
            reason: "too many rules".to_string(),
        };
        assert!(err.to_string().contains("python"));
        assert!(err.to_string().contains("too many rules"));
    }
}
