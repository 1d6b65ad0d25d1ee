// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! YAML rule table.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"#[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r"(?m:^(?:---|\.\.\.))", RuleAction::Kind(TokenType::Punctuation)),
        // A mapping key is a scalar directly followed by a colon and a break.
        Rule::new(
            r#"([A-Za-z0-9_.-]+|"[^"\n]*"|'[^'\n]*')(:)(\s|\z)"#,
            RuleAction::Groups(&[
                TokenType::Name,
                TokenType::Punctuation,
                TokenType::Whitespace,
            ]),
        ),
        Rule::new(r"[&*][A-Za-z0-9_-]+", RuleAction::Kind(TokenType::NameBuiltin)),
        Rule::new(r"!![A-Za-z]+", RuleAction::Kind(TokenType::NameBuiltin)),
        Rule::new(
            r#""(?:\\(?s:.)|[^"\\\n])*(?:"|\n|\z)"#,
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(r"'[^'\n]*(?:'|\n|\z)", RuleAction::Kind(TokenType::String)),
        Rule::new(
            r"\b(?:true|false|null|yes|no|on|off)\b",
            RuleAction::Kind(TokenType::Keyword),
        ),
        Rule::new(
            r"[-+]?\d+\.\d*(?:[eE][+-]?\d+)?|[-+]?\.inf|\.nan",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(r"[-+]?\d+", RuleAction::Kind(TokenType::Number)),
        Rule::new(r"[A-Za-z_][\w.-]*", RuleAction::Kind(TokenType::Name)),
        Rule::new(r"[\[\]{},:|>?-]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerConfig;
    use crate::registry::get_lexer;
    use crate::token::TokenType;

    fn kinds_and_text(code: &str) -> Vec<(TokenType, String)> {
        get_lexer("yaml")
            .unwrap()
            .scan(code, &LexerConfig::default())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_mapping_and_sequence() {
        let tokens = kinds_and_text("name: glint\nitems:\n  - 1\n  - two");
        assert!(tokens.contains(&(TokenType::Name, "name".to_string())));
        assert!(tokens.contains(&(TokenType::Name, "items".to_string())));
        assert!(tokens.contains(&(TokenType::Number, "1".to_string())));
    }

    #[test]
    fn test_document_marker_and_anchor() {
        let tokens = kinds_and_text("---\nbase: &anchor 1\nref: *anchor");
        assert_eq!(tokens[0], (TokenType::Punctuation, "---".to_string()));
        assert!(tokens.contains(&(TokenType::NameBuiltin, "&anchor".to_string())));
        assert!(tokens.contains(&(TokenType::NameBuiltin, "*anchor".to_string())));
    }
}
