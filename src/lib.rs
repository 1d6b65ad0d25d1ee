// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Pattern-driven syntax highlighting.
//!
//! Tokenization is a single forward pass over the input driven by a
//! declarative per-language rule table, compiled once into a combined
//! regular expression. Three properties hold for every lexer and every
//! input:
//!
//! - **Linear time.** The regex engine cannot backtrack, and rule tables are
//!   bound-checked at construction, so crafted input cannot cause
//!   super-linear scans.
//! - **Losslessness.** Concatenating every token's text reproduces the input
//!   exactly; text no rule matches degrades to `error` tokens instead of
//!   being dropped or raising.
//! - **No shared mutable state.** Lexers, rule tables and configs are
//!   immutable after construction; one instance serves any number of
//!   threads. The only process-wide mutable structure is the registry's
//!   memoizing cache, which constructs each lexer at most once.
//!
//! ```
//! let html = glint::highlight("def main(): pass", "python", &glint::FormatConfig::default())
//!     .unwrap();
//! assert!(html.contains("<span class=\"kd\">def</span>"));
//! assert!(html.contains("<span class=\"nf\">main</span>"));
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod html;
mod languages;
mod lexer;
mod parallel;
mod registry;
mod token;

pub use engine::{MAX_PATTERN_LEN, MAX_RULES, PatternLexer, Rule, RuleAction, TokenStream};
pub use error::{Error, Result};
pub use html::HtmlFormatter;
pub use lexer::{ClassMode, FormatConfig, Formatter, Lexer, LexerConfig};
pub use parallel::{highlight_many, tokenize_many};
pub use registry::{LexerSpec, get_lexer, lexer_for_path, list_languages};
pub use token::{Token, TokenType};

/// Tokenizes `code` as `language`, returning a lazy token stream.
///
/// The stream borrows `code` and yields tokens in source order; iterate it
/// again by calling `tokenize` again. Unknown languages fail here, before
/// any scanning happens.
pub fn tokenize<'a>(
    code: &'a str,
    language: &str,
    config: &LexerConfig,
) -> Result<TokenStream<'a>> {
    Ok(get_lexer(language)?.scan(code, config))
}

/// Highlights `code` as `language` into a complete HTML string.
///
/// Convenience wrapper over [`tokenize`] and [`HtmlFormatter`]; callers that
/// want the fragment stream use those directly.
pub fn highlight(code: &str, language: &str, config: &FormatConfig) -> Result<String> {
    let lexer = get_lexer(language)?;
    let tokens = Box::new(lexer.scan(code, &LexerConfig::default()));
    Ok(HtmlFormatter::new().format_to_string(tokens, config))
}
