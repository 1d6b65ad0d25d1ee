// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HTML rule table.
//!
//! Single-state approximation: tags, attributes values, entities and
//! comments are recognized positionally; embedded scripts and styles are
//! plain text here, not nested grammars.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"(?s:<!--.*?(?:-->|\z))", RuleAction::Kind(TokenType::Comment)),
        Rule::new(r"<![A-Za-z][^>\n]*>", RuleAction::Kind(TokenType::Keyword)),
        Rule::new(
            r"(</?)([A-Za-z][\w:.-]*)",
            RuleAction::Groups(&[TokenType::Punctuation, TokenType::Name]),
        ),
        Rule::new(
            r#"([A-Za-z_:][\w:.-]*)(=)("[^"]*"|'[^']*'|[^\s>]+)"#,
            RuleAction::Groups(&[TokenType::Name, TokenType::Operator, TokenType::String]),
        ),
        Rule::new(r"&#?\w+;", RuleAction::Kind(TokenType::StringEscape)),
        Rule::new(r"/?>", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"[A-Za-z_:][\w:.-]*", RuleAction::Kind(TokenType::Name)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
        Rule::new(r"[^<>&\s]+", RuleAction::Kind(TokenType::Other)),
    ]
}
