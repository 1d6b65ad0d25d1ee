// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Streaming HTML formatter.
//!
//! Emits one fragment for the wrapper opening, one per completed source
//! line, and one for the wrapper closing. Token text is HTML-escaped
//! unconditionally; that is a security property of the output, not a style
//! choice, and there is no switch to turn it off.
//!
//! Output shape:
//!
//! ```text
//! <div class="highlight"><pre><code>
//! [<span class="lineno" data-line="1"></span>][<span class="hll">]spans...[</span>]
//! ...
//! </code></pre></div>
//! ```
//!
//! Line numbers are empty spans carrying the number in a `data-line`
//! attribute; a stylesheet renders them with `content: attr(data-line)`, so
//! they are never part of copyable code text. Highlighted lines wrap their
//! spans in the fixed `hll` class.

use std::collections::VecDeque;
use std::fmt::Write as _;

use crate::lexer::{ClassMode, FormatConfig, Formatter};
use crate::token::{Token, TokenType};

/// The HTML formatter. Stateless; all per-call state lives in the returned
/// iterator, so one instance serves any number of concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Creates an HTML formatter.
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn format<'a>(
        &self,
        tokens: Box<dyn Iterator<Item = Token> + 'a>,
        config: &FormatConfig,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(HtmlFragments {
            tokens,
            config: config.clone(),
            stage: Stage::Preamble,
            pending: VecDeque::new(),
            line_no: 1,
            line_buf: String::new(),
            line_started: false,
            line_highlighted: false,
        })
    }
}

/// Appends `text` to `out` with the five HTML-special characters escaped.
fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Preamble,
    Lines,
    Epilogue,
    Done,
}

struct HtmlFragments<'a> {
    tokens: Box<dyn Iterator<Item = Token> + 'a>,
    config: FormatConfig,
    stage: Stage,
    /// Completed line fragments not yet handed out.
    pending: VecDeque<String>,
    line_no: usize,
    line_buf: String,
    line_started: bool,
    line_highlighted: bool,
}

impl HtmlFragments<'_> {
    fn class_for(&self, kind: TokenType) -> &'static str {
        match self.config.class_mode {
            ClassMode::Compact => kind.css_code(),
            ClassMode::Semantic => kind.semantic_class(),
        }
    }

    /// Opens the current line's markup on first content.
    fn begin_line(&mut self) {
        self.line_started = true;
        self.line_highlighted = self.config.hl_lines.contains(&self.line_no);
        if self.config.line_numbers {
            // The write only appends to a String and cannot fail.
            let _ = write!(
                self.line_buf,
                "<span class=\"lineno\" data-line=\"{}\"></span>",
                self.line_no
            );
        }
        if self.line_highlighted {
            self.line_buf.push_str("<span class=\"hll\">");
        }
    }

    /// Closes the current line and queues it as one fragment.
    fn finish_line(&mut self, newline: bool) {
        if self.line_highlighted {
            self.line_buf.push_str("</span>");
        }
        if newline {
            self.line_buf.push('\n');
        }
        self.pending.push_back(std::mem::take(&mut self.line_buf));
        self.line_no += 1;
        self.line_started = false;
        self.line_highlighted = false;
    }

    /// Appends one token to the in-progress line, splitting at newlines so a
    /// multi-line token re-opens its span on every line it covers.
    fn push_token(&mut self, token: &Token) {
        let class = self.class_for(token.kind);
        for segment in token.text.split_inclusive('\n') {
            if !self.line_started {
                self.begin_line();
            }
            let (content, had_newline) = match segment.strip_suffix('\n') {
                Some(rest) => (rest, true),
                None => (segment, false),
            };
            if !content.is_empty() {
                self.line_buf.push_str("<span class=\"");
                self.line_buf.push_str(class);
                self.line_buf.push_str("\">");
                escape_into(&mut self.line_buf, content);
                self.line_buf.push_str("</span>");
            }
            if had_newline {
                self.finish_line(true);
            }
        }
    }
}

impl Iterator for HtmlFragments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(fragment) = self.pending.pop_front() {
                return Some(fragment);
            }
            match self.stage {
                Stage::Preamble => {
                    self.stage = Stage::Lines;
                    let mut open = String::new();
                    open.push_str("<div class=\"");
                    escape_into(&mut open, &self.config.wrapper_class);
                    open.push_str("\"><pre><code>");
                    return Some(open);
                }
                Stage::Lines => {
                    while self.pending.is_empty() {
                        match self.tokens.next() {
                            Some(token) => self.push_token(&token),
                            None => {
                                if self.line_started {
                                    self.finish_line(false);
                                }
                                self.stage = Stage::Epilogue;
                                break;
                            }
                        }
                    }
                }
                Stage::Epilogue => {
                    self.stage = Stage::Done;
                    return Some("</code></pre></div>".to_string());
                }
                Stage::Done => return None,
            }
        }
    }
}
