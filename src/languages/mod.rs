// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Built-in language definitions.
//!
//! Every language is a thin declarative rule table consumed uniformly by the
//! pattern-lexer engine; there is no per-language branching anywhere else in
//! the crate. Adding a language means adding a `rules()` table and one
//! [`LexerSpec`] entry here.

use crate::registry::LexerSpec;

mod css;
mod html;
mod javascript;
mod json;
mod python;
mod rust;
mod sql;
mod text;
mod toml;
mod yaml;

/// The static registry specification table. Names and aliases are lowercase;
/// canonical names must be unique and aliases must not collide (a collision
/// keeps the first binding).
pub(crate) static BUILTIN: &[LexerSpec] = &[
    LexerSpec {
        name: "css",
        aliases: &[],
        extensions: &["css", "scss", "less"],
        rules: css::rules,
    },
    LexerSpec {
        name: "html",
        aliases: &["xhtml"],
        extensions: &["html", "htm", "xhtml"],
        rules: html::rules,
    },
    LexerSpec {
        name: "javascript",
        aliases: &["js", "node", "jsx"],
        extensions: &["js", "mjs", "cjs", "jsx"],
        rules: javascript::rules,
    },
    LexerSpec {
        name: "json",
        aliases: &["json5", "jsonc"],
        extensions: &["json", "jsonc", "json5"],
        rules: json::rules,
    },
    LexerSpec {
        name: "python",
        aliases: &["py", "python3"],
        extensions: &["py", "pyw", "pyi"],
        rules: python::rules,
    },
    LexerSpec {
        name: "rust",
        aliases: &["rs"],
        extensions: &["rs"],
        rules: rust::rules,
    },
    LexerSpec {
        name: "sql",
        aliases: &["mysql", "postgresql"],
        extensions: &["sql", "mysql", "pgsql", "sqlite"],
        rules: sql::rules,
    },
    LexerSpec {
        name: "text",
        aliases: &["plain", "plaintext", "txt"],
        extensions: &["txt", "text"],
        rules: text::rules,
    },
    LexerSpec {
        name: "toml",
        aliases: &[],
        extensions: &["toml"],
        rules: toml::rules,
    },
    LexerSpec {
        name: "yaml",
        aliases: &["yml"],
        extensions: &["yaml", "yml"],
        rules: yaml::rules,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PatternLexer;

    #[test]
    fn test_every_builtin_table_is_within_bounds() {
        for spec in BUILTIN {
            let rules = (spec.rules)();
            PatternLexer::validate(spec.name, &rules).unwrap();
        }
    }

    #[test]
    fn test_every_builtin_table_compiles() {
        for spec in BUILTIN {
            PatternLexer::build(spec.name, spec.aliases, (spec.rules)()).unwrap();
        }
    }

    #[test]
    fn test_names_and_aliases_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in BUILTIN {
            for name in std::iter::once(&spec.name).chain(spec.aliases) {
                assert_eq!(*name, name.to_ascii_lowercase());
                assert!(seen.insert(*name), "duplicate name or alias: {name}");
            }
        }
    }
}
