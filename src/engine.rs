// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The pattern-lexer engine.
//!
//! A concrete lexer is a declarative, ordered rule table. At construction
//! time the table is bound-checked and compiled into a single combined
//! alternation, with each rule wrapped in its own named capture group so the
//! scanner can tell which rule produced a match. Scanning is one forward
//! pass; the `regex` crate guarantees linear time (no backtracking), and the
//! construction-time ceilings keep the compiled automaton small.
//!
//! The compiled lexer is immutable and freely shareable across threads; a
//! `tokenize` call keeps all mutable state inside its returned iterator.

use std::collections::VecDeque;
use std::fmt;
use std::fmt::Write as _;

use regex::Regex;

use crate::error::{Error, Result};
use crate::lexer::{Lexer, LexerConfig};
use crate::token::{Token, TokenType};

/// Maximum number of rules in one table.
pub const MAX_RULES: usize = 100;

/// Maximum summed length, in bytes, of all rule pattern sources in one table.
pub const MAX_PATTERN_LEN: usize = 8192;

/// What to emit when a rule's pattern matches.
#[derive(Debug, Clone, Copy)]
pub enum RuleAction {
    /// Emit the whole match as one token of this type.
    Kind(TokenType),
    /// Classify the matched text through a callback, then emit one token.
    /// Used for keyword tables, so identifier-shaped text needs one rule.
    ByText(fn(&str) -> TokenType),
    /// Emit one token per capture group of the pattern, in group order.
    ///
    /// The pattern must contain exactly as many capture groups as there are
    /// types in the slice. This is how context-dependent tokens (the function
    /// name after `def`, a key before `:`) are produced in a single pass,
    /// since the regex engine has no lookbehind.
    Groups(&'static [TokenType]),
}

/// One pattern-to-token mapping in a rule table.
///
/// Patterns use `regex` crate syntax. They may not use lookaround (the
/// engine's regex crate does not support it); rules that need one character
/// of context use [`RuleAction::Groups`] instead. A rule that should absorb
/// an unterminated construct matches "up to end of input" itself, e.g. with
/// a `(?:"|\z)` closer; the engine imposes no special-casing.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Regular-expression source for this rule.
    pub pattern: &'static str,
    /// What to emit on a match.
    pub action: RuleAction,
}

impl Rule {
    /// Creates a new rule.
    pub const fn new(pattern: &'static str, action: RuleAction) -> Self {
        Self { pattern, action }
    }
}

struct CompiledRule {
    action: RuleAction,
    /// Capture index of this rule's named group in the combined pattern.
    group: usize,
    /// For `Groups` rules: the rule pattern compiled on its own, anchored,
    /// used to recover sub-captures of an already-found match.
    sub: Option<Regex>,
}

/// A lexer compiled from a declarative rule table.
///
/// Construction happens exactly once per language (see the registry); the
/// result is immutable and shared read-only by every thread.
pub struct PatternLexer {
    name: &'static str,
    aliases: &'static [&'static str],
    regex: Regex,
    rules: Vec<CompiledRule>,
}

impl fmt::Debug for PatternLexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternLexer")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl PatternLexer {
    /// Validates the construction-time bounds for a rule table.
    ///
    /// Violations are definition failures; a pathological table never reaches
    /// the scanning hot path.
    pub fn validate(name: &str, rules: &[Rule]) -> Result<()> {
        if rules.is_empty() {
            return Err(Error::LexerDefinition {
                language: name.to_string(),
                reason: "rule table is empty".to_string(),
            });
        }
        if rules.len() > MAX_RULES {
            return Err(Error::LexerDefinition {
                language: name.to_string(),
                reason: format!("{} rules exceed the limit of {MAX_RULES}", rules.len()),
            });
        }
        let total: usize = rules.iter().map(|r| r.pattern.len()).sum();
        if total > MAX_PATTERN_LEN {
            return Err(Error::LexerDefinition {
                language: name.to_string(),
                reason: format!(
                    "combined pattern length {total} exceeds the limit of {MAX_PATTERN_LEN}"
                ),
            });
        }
        Ok(())
    }

    /// Validates and compiles a rule table into a lexer.
    ///
    /// Earlier rules take priority over later ones when two rules match at
    /// the same position (the combined alternation preserves rule order and
    /// the regex engine prefers earlier alternatives).
    pub fn build(
        name: &'static str,
        aliases: &'static [&'static str],
        rules: Vec<Rule>,
    ) -> Result<Self> {
        Self::validate(name, &rules)?;

        let definition_error = |reason: String| Error::LexerDefinition {
            language: name.to_string(),
            reason,
        };

        let mut alternation = String::with_capacity(MAX_PATTERN_LEN / 4);
        for (i, rule) in rules.iter().enumerate() {
            if i > 0 {
                alternation.push('|');
            }
            // The write only appends to a String and cannot fail.
            let _ = write!(alternation, "(?P<r{i}>{})", rule.pattern);
        }
        let regex = Regex::new(&alternation)
            .map_err(|e| definition_error(format!("combined pattern failed to compile: {e}")))?;

        // Map each rule to the capture index of its named group.
        let mut groups = vec![0usize; rules.len()];
        for (idx, cap_name) in regex.capture_names().enumerate() {
            let Some(cap_name) = cap_name else { continue };
            let rule_index = cap_name.strip_prefix('r').and_then(|n| n.parse::<usize>().ok());
            if let Some(i) = rule_index {
                if i < rules.len() {
                    groups[i] = idx;
                }
            }
        }

        let mut compiled = Vec::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            let sub = match rule.action {
                RuleAction::Groups(kinds) => {
                    let re = Regex::new(&format!(r"\A(?:{})", rule.pattern)).map_err(|e| {
                        definition_error(format!("rule {i} failed to compile: {e}"))
                    })?;
                    // captures_len counts the implicit whole-match group 0.
                    if re.captures_len() != kinds.len() + 1 {
                        return Err(definition_error(format!(
                            "rule {i} has {} capture groups but {} token types",
                            re.captures_len() - 1,
                            kinds.len()
                        )));
                    }
                    Some(re)
                }
                RuleAction::Kind(_) | RuleAction::ByText(_) => None,
            };
            compiled.push(CompiledRule { action: rule.action, group: groups[i], sub });
        }

        Ok(Self { name, aliases, regex, rules: compiled })
    }

    /// Scans `code` into a lazy token stream.
    ///
    /// The stream is finite, ordered by source position, and lossless: the
    /// concatenation of every yielded token's text is exactly `code`.
    pub fn scan<'a>(&'a self, code: &'a str, config: &LexerConfig) -> TokenStream<'a> {
        TokenStream {
            lexer: self,
            code,
            pos: 0,
            line: 1,
            column: 1,
            tab_size: config.tab_size.max(1) as u32,
            pending: VecDeque::new(),
        }
    }
}

impl Lexer for PatternLexer {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&'static str] {
        self.aliases
    }

    fn tokenize<'a>(
        &'a self,
        code: &'a str,
        config: &LexerConfig,
    ) -> Box<dyn Iterator<Item = Token> + 'a> {
        Box::new(self.scan(code, config))
    }
}

/// Lazy token iterator over one input.
///
/// All mutable scan state lives here, which is what makes a shared
/// [`PatternLexer`] safe to use from many threads at once.
pub struct TokenStream<'a> {
    lexer: &'a PatternLexer,
    code: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    tab_size: u32,
    pending: VecDeque<Token>,
}

impl TokenStream<'_> {
    /// Queues a token at the current position and advances the line/column
    /// counters over its text. O(text length), so O(input length) overall.
    fn emit(&mut self, kind: TokenType, text: &str) {
        if text.is_empty() {
            return;
        }
        self.pending.push_back(Token::new(kind, text, self.line, self.column));
        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.line += 1;
                    self.column = 1;
                }
                '\t' => {
                    self.column = ((self.column - 1) / self.tab_size + 1) * self.tab_size + 1;
                }
                _ => self.column += 1,
            }
        }
    }

    /// Emits each character of `code[start..end]` as its own error token.
    ///
    /// This is the no-rule-matched policy: consume exactly one character,
    /// never stall, never raise, never skip input.
    fn emit_error_span(&mut self, start: usize, end: usize) {
        let code = self.code;
        let mut rest = &code[start..end];
        while let Some(ch) = rest.chars().next() {
            let (one, tail) = rest.split_at(ch.len_utf8());
            self.emit(TokenType::Error, one);
            rest = tail;
        }
        self.pos = end;
    }

    /// Runs one match attempt and queues at least one token, always
    /// advancing `pos`.
    fn step(&mut self) {
        let lexer = self.lexer;
        let code = self.code;
        let Some(caps) = lexer.regex.captures_at(code, self.pos) else {
            // Nothing matches anywhere in the remainder.
            self.emit_error_span(self.pos, code.len());
            return;
        };
        // Group 0 is always present on a match.
        let m = caps.get(0).unwrap();

        if m.start() > self.pos {
            self.emit_error_span(self.pos, m.start());
        }
        if m.start() == m.end() {
            // A zero-length match can never consume input; treat it as
            // no-match at this position so the scan still advances.
            if m.start() < code.len() {
                let ch_len = code[m.start()..].chars().next().map_or(1, char::len_utf8);
                self.emit_error_span(m.start(), m.start() + ch_len);
            }
            return;
        }

        // Exactly one rule's named group participates in the match.
        let rule = lexer.rules.iter().find(|rule| caps.get(rule.group).is_some());
        match rule {
            Some(rule) => match rule.action {
                RuleAction::Kind(kind) => self.emit(kind, m.as_str()),
                RuleAction::ByText(classify) => self.emit(classify(m.as_str()), m.as_str()),
                RuleAction::Groups(kinds) => self.emit_groups(rule, kinds, m.as_str()),
            },
            // Unreachable for a well-formed combined pattern; degrade rather
            // than drop the span.
            None => self.emit(TokenType::Error, m.as_str()),
        }
        self.pos = m.end();
    }

    /// Splits a `Groups` match into one token per capture group. Text the
    /// groups do not cover (which only happens when a table author leaves a
    /// gap) is emitted as `Other` so the stream stays lossless.
    fn emit_groups(&mut self, rule: &CompiledRule, kinds: &[TokenType], matched: &str) {
        // Compiled with an \A anchor, so this re-match cannot move and sees
        // the same alternative the combined pattern chose.
        let sub = rule.sub.as_ref().and_then(|re| re.captures(matched));
        let Some(sub) = sub else {
            self.emit(TokenType::Error, matched);
            return;
        };
        let mut cursor = 0;
        for (i, &kind) in kinds.iter().enumerate() {
            if let Some(g) = sub.get(i + 1) {
                if g.start() > cursor {
                    self.emit(TokenType::Other, &matched[cursor..g.start()]);
                }
                self.emit(kind, g.as_str());
                cursor = g.end();
            }
        }
        if cursor < matched.len() {
            self.emit(TokenType::Other, &matched[cursor..]);
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.pos >= self.code.len() {
                return None;
            }
            self.step();
        }
    }
}
