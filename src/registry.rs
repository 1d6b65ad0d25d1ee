// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Process-wide lexer registry with lazy, at-most-once construction.
//!
//! The registry is an immutable specification table plus one memoizing cell
//! per language. Rule tables are built and bound-checked once, when the
//! registry itself initializes; the (comparatively expensive) combined
//! pattern compilation is deferred to the first `get_lexer` for that
//! language. A populated cell is read lock-free, so the fast path for an
//! already-cached lexer never contends with first-construction of another.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::{Lazy, OnceCell};

use crate::engine::{PatternLexer, Rule};
use crate::error::{Error, Result};
use crate::languages;

/// Registry entry for one language: canonical name, aliases, and the rule
/// table constructor. Specs are static data; the loader-style `rules` fn is
/// invoked once per process, at registry initialization.
pub struct LexerSpec {
    /// Canonical language name (lowercase).
    pub name: &'static str,
    /// Alternate names resolving to this language (lowercase).
    pub aliases: &'static [&'static str],
    /// File extensions (without the dot) associated with this language.
    pub extensions: &'static [&'static str],
    /// Builds the declarative rule table.
    pub rules: fn() -> Vec<Rule>,
}

struct Entry {
    spec: &'static LexerSpec,
    /// Built and bound-validated at registry init.
    rules: Vec<Rule>,
    /// Compiled lexer, populated at most once on first request.
    cell: OnceCell<PatternLexer>,
}

impl Entry {
    fn lexer(&self) -> Result<&PatternLexer> {
        self.cell.get_or_try_init(|| {
            log::debug!("compiling lexer `{}`", self.spec.name);
            PatternLexer::build(self.spec.name, self.spec.aliases, self.rules.clone())
        })
    }
}

struct Registry {
    entries: Vec<Entry>,
    /// Normalized canonical names and aliases, each mapping to an entry.
    by_name: HashMap<&'static str, usize>,
    /// Lowercase file extensions mapping to an entry.
    by_extension: HashMap<&'static str, usize>,
    /// Canonical names only, lexicographically sorted.
    names: Vec<&'static str>,
}

impl Registry {
    fn with_specs(specs: &'static [LexerSpec]) -> Self {
        let mut entries = Vec::with_capacity(specs.len());
        let mut by_name = HashMap::new();
        let mut by_extension = HashMap::new();

        for spec in specs {
            let rules = (spec.rules)();
            // Bound violations are definition failures detected here, at
            // startup; a failed lexer is excluded from lookup and listing.
            if let Err(e) = PatternLexer::validate(spec.name, &rules) {
                log::warn!("skipping lexer registration: {e}");
                continue;
            }
            let idx = entries.len();
            entries.push(Entry { spec, rules, cell: OnceCell::new() });

            for &key in std::iter::once(&spec.name).chain(spec.aliases) {
                // Alias collision policy: first registration wins.
                if by_name.contains_key(key) {
                    log::warn!("alias `{key}` already registered, keeping the first binding");
                    continue;
                }
                by_name.insert(key, idx);
            }
            for &ext in spec.extensions {
                if !by_extension.contains_key(ext) {
                    by_extension.insert(ext, idx);
                }
            }
        }

        let mut names: Vec<_> = entries.iter().map(|e| e.spec.name).collect();
        names.sort_unstable();
        Self { entries, by_name, by_extension, names }
    }

    fn get(&self, name: &str) -> Result<&PatternLexer> {
        let normalized = name.trim().to_ascii_lowercase();
        let idx = self
            .by_name
            .get(normalized.as_str())
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;
        self.entries[*idx].lexer()
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| Registry::with_specs(languages::BUILTIN));

/// Looks up a lexer by canonical name or alias.
///
/// The name is trimmed and case-folded before resolution. The lexer is
/// compiled on first request and cached for the process lifetime; concurrent
/// first requests construct it at most once and all callers observe the same
/// instance.
pub fn get_lexer(name: &str) -> Result<&'static PatternLexer> {
    let registry: &'static Registry = &REGISTRY;
    registry.get(name)
}

/// Returns all registered canonical language names, sorted. Aliases are
/// excluded, as are languages whose definitions failed validation.
pub fn list_languages() -> &'static [&'static str] {
    &REGISTRY.names
}

/// Looks up a lexer by a file path's extension, e.g. `main.py` → python.
///
/// Returns `None` for unknown or missing extensions, and for languages whose
/// definitions failed to compile.
pub fn lexer_for_path<P: AsRef<Path>>(path: P) -> Option<&'static PatternLexer> {
    let registry: &'static Registry = &REGISTRY;
    let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    let idx = registry.by_extension.get(ext.as_str())?;
    registry.entries[*idx].lexer().ok()
}
