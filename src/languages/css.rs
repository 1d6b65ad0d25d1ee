// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! CSS rule table.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"(?s:/\*.*?(?:\*/|\z))", RuleAction::Kind(TokenType::Comment)),
        Rule::new(r"@[A-Za-z-]+", RuleAction::Kind(TokenType::Keyword)),
        // A property is a name directly followed by a colon.
        Rule::new(
            r"(-?[A-Za-z-]+)(\s*)(:)",
            RuleAction::Groups(&[
                TokenType::Name,
                TokenType::Whitespace,
                TokenType::Punctuation,
            ]),
        ),
        Rule::new(r"#[0-9a-fA-F]{3,8}\b", RuleAction::Kind(TokenType::Number)),
        Rule::new(r"[.#][A-Za-z_-][\w-]*", RuleAction::Kind(TokenType::NameClass)),
        Rule::new(r"!\s*important\b", RuleAction::Kind(TokenType::Keyword)),
        Rule::new(r#""[^"\n]*(?:"|\n|\z)"#, RuleAction::Kind(TokenType::String)),
        Rule::new(r"'[^'\n]*(?:'|\n|\z)", RuleAction::Kind(TokenType::String)),
        Rule::new(
            r"\d+\.\d+(?:%|[A-Za-z]+)?",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(r"\d+(?:%|[A-Za-z]+)?", RuleAction::Kind(TokenType::Number)),
        Rule::new(r"[A-Za-z_-][\w-]*", RuleAction::Kind(TokenType::Name)),
        Rule::new(r"[-+*/=~^$|]+|>", RuleAction::Kind(TokenType::Operator)),
        Rule::new(r"[{}()\[\];,:.&]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerConfig;
    use crate::registry::get_lexer;
    use crate::token::TokenType;

    fn kinds_and_text(code: &str) -> Vec<(TokenType, String)> {
        get_lexer("css")
            .unwrap()
            .scan(code, &LexerConfig::default())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_selector_property_value() {
        let tokens = kinds_and_text(".btn { color: #ff0000; margin: 4px; }");
        assert!(tokens.contains(&(TokenType::NameClass, ".btn".to_string())));
        assert!(tokens.contains(&(TokenType::Name, "color".to_string())));
        assert!(tokens.contains(&(TokenType::Number, "#ff0000".to_string())));
        assert!(tokens.contains(&(TokenType::Number, "4px".to_string())));
    }

    #[test]
    fn test_at_rule_and_important() {
        let tokens = kinds_and_text("@media screen { a { top: 0 !important; } }");
        assert_eq!(tokens[0], (TokenType::Keyword, "@media".to_string()));
        assert!(tokens.contains(&(TokenType::Keyword, "!important".to_string())));
    }
}
