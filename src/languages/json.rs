// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! JSON rule table (tolerant of JSONC comments).

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"//[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r"(?s:/\*.*?(?:\*/|\z))", RuleAction::Kind(TokenType::Comment)),
        // An object key is a string directly followed by a colon.
        Rule::new(
            r#"("(?:\\(?s:.)|[^"\\])*")(\s*)(:)"#,
            RuleAction::Groups(&[
                TokenType::Name,
                TokenType::Whitespace,
                TokenType::Punctuation,
            ]),
        ),
        Rule::new(
            r#""(?:\\(?s:.)|[^"\\])*(?:"|\z)"#,
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(r"\b(?:true|false|null)\b", RuleAction::Kind(TokenType::Keyword)),
        Rule::new(
            r"-?\d+\.\d+(?:[eE][+-]?\d+)?|-?\d+[eE][+-]?\d+",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(r"-?\d+", RuleAction::Kind(TokenType::Number)),
        Rule::new(r"[{}\[\],:]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}
