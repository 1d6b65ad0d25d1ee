// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Capability interfaces and configuration records.
//!
//! [`Lexer`] and [`Formatter`] are implemented by stateless objects: the same
//! instance may be invoked from any number of threads concurrently, and each
//! call keeps all mutable state local to its returned iterator.

use std::collections::BTreeSet;

use crate::token::Token;

/// Options controlling a tokenization pass.
///
/// Every field has a default; configs are plain immutable values and passing
/// one never affects another call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexerConfig {
    /// Tab stop width used for column accounting. Defaults to 4.
    pub tab_size: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self { tab_size: 4 }
    }
}

/// CSS class naming scheme for formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassMode {
    /// Short class codes (`k`, `nf`, `s`, ...) compatible with external
    /// stylesheets targeting the published code table.
    #[default]
    Compact,
    /// Long descriptive class names (`keyword`, `name-function`, ...).
    Semantic,
}

/// Options controlling formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatConfig {
    /// Which class naming scheme to emit. Defaults to [`ClassMode::Compact`].
    pub class_mode: ClassMode,
    /// 1-based line numbers to visually highlight.
    pub hl_lines: BTreeSet<usize>,
    /// Whether to render a line-number gutter. Defaults to false.
    pub line_numbers: bool,
    /// CSS class on the outermost wrapper element. Defaults to `highlight`.
    pub wrapper_class: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            class_mode: ClassMode::default(),
            hl_lines: BTreeSet::new(),
            line_numbers: false,
            wrapper_class: "highlight".to_string(),
        }
    }
}

/// The tokenization capability.
///
/// `tokenize` produces a finite, lazy token sequence scanned front to back.
/// The sequence is not restartable; to re-iterate, call `tokenize` again.
pub trait Lexer: Send + Sync {
    /// Canonical language name.
    fn name(&self) -> &str;

    /// Alternate names resolving to this lexer.
    fn aliases(&self) -> &[&'static str];

    /// Tokenizes `code`, yielding tokens in strictly increasing source
    /// position order. The concatenated token text reproduces `code` exactly.
    fn tokenize<'a>(
        &'a self,
        code: &'a str,
        config: &LexerConfig,
    ) -> Box<dyn Iterator<Item = Token> + 'a>;
}

/// The rendering capability.
///
/// `format` consumes the token sequence exactly once, in order, and yields
/// output fragments lazily; the full sequence is never required in memory.
pub trait Formatter: Send + Sync {
    /// Formatter name, e.g. `html`.
    fn name(&self) -> &str;

    /// Renders a token stream into a lazy sequence of output fragments.
    fn format<'a>(
        &self,
        tokens: Box<dyn Iterator<Item = Token> + 'a>,
        config: &FormatConfig,
    ) -> Box<dyn Iterator<Item = String> + 'a>;

    /// Convenience wrapper that concatenates all fragments into one string.
    fn format_to_string<'a>(
        &self,
        tokens: Box<dyn Iterator<Item = Token> + 'a>,
        config: &FormatConfig,
    ) -> String {
        let mut out = String::new();
        for fragment in self.format(tokens, config) {
            out.push_str(&fragment);
        }
        out
    }
}
