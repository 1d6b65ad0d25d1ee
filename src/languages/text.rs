// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Plain text: no highlighting, but still a real lexer so the formatter and
//! batch APIs treat every input uniformly.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"[^\n]+", RuleAction::Kind(TokenType::Other)),
        Rule::new(r"\n+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerConfig;
    use crate::registry::get_lexer;
    use crate::token::TokenType;

    #[test]
    fn test_lines_round_trip() {
        let code = "a\n\nb\n";
        let tokens: Vec<_> = get_lexer("text")
            .unwrap()
            .scan(code, &LexerConfig::default())
            .collect();
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, code);
        assert!(tokens.iter().all(|t| matches!(
            t.kind,
            TokenType::Other | TokenType::Whitespace
        )));
    }
}
