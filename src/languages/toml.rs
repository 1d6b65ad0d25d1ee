// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! TOML rule table.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"#[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r"\[\[?[^\]\n]*\]?\]", RuleAction::Kind(TokenType::Keyword)),
        // A bare key is a name directly followed by `=`.
        Rule::new(
            r"([A-Za-z0-9_-]+)(\s*)(=)",
            RuleAction::Groups(&[
                TokenType::Name,
                TokenType::Whitespace,
                TokenType::Operator,
            ]),
        ),
        Rule::new(
            r#"(?s:""".*?(?:"""|\z))|(?s:'''.*?(?:'''|\z))"#,
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(
            r#""(?:\\(?s:.)|[^"\\\n])*(?:"|\n|\z)"#,
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(r"'[^'\n]*(?:'|\n|\z)", RuleAction::Kind(TokenType::String)),
        Rule::new(r"\b(?:true|false)\b", RuleAction::Kind(TokenType::Keyword)),
        // Dates and times sort before plain numbers.
        Rule::new(
            r"\d{4}-\d{2}-\d{2}(?:[Tt ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:[Zz]|[+-]\d{2}:\d{2})?)?|\d{2}:\d{2}:\d{2}(?:\.\d+)?",
            RuleAction::Kind(TokenType::Number),
        ),
        Rule::new(
            r"[-+]?\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?|[-+]?\d[\d_]*[eE][+-]?\d+|[-+]?(?:inf|nan)",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(
            r"0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|[-+]?\d[\d_]*",
            RuleAction::Kind(TokenType::Number),
        ),
        Rule::new(r"[A-Za-z_][\w-]*", RuleAction::Kind(TokenType::Name)),
        Rule::new(r"[{}\[\],.=]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerConfig;
    use crate::registry::get_lexer;
    use crate::token::TokenType;

    fn kinds_and_text(code: &str) -> Vec<(TokenType, String)> {
        get_lexer("toml")
            .unwrap()
            .scan(code, &LexerConfig::default())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_table_key_value() {
        let tokens = kinds_and_text("[package]\nname = \"glint\"\nedition = 2024");
        assert_eq!(tokens[0], (TokenType::Keyword, "[package]".to_string()));
        assert!(tokens.contains(&(TokenType::Name, "name".to_string())));
        assert!(tokens.contains(&(TokenType::Operator, "=".to_string())));
        assert!(tokens.contains(&(TokenType::String, "\"glint\"".to_string())));
        assert!(tokens.contains(&(TokenType::Number, "2024".to_string())));
    }

    #[test]
    fn test_datetime_and_bool() {
        let tokens = kinds_and_text("when = 2026-08-30T12:00:00Z\nok = true");
        assert!(tokens.contains(&(TokenType::Number, "2026-08-30T12:00:00Z".to_string())));
        assert!(tokens.contains(&(TokenType::Keyword, "true".to_string())));
    }
}
