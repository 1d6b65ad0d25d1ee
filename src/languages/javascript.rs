// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! JavaScript rule table (also used for JSX sources).

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

const KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "continue", "debugger", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "if", "import", "in", "instanceof", "new", "of", "return", "static",
    "switch", "this", "throw", "try", "typeof", "void", "while", "with",
    "yield",
];

const DECLARATIONS: &[&str] = &["async", "class", "const", "function", "get", "let", "set", "var"];

const BUILTINS: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "Infinity", "JSON", "Map", "Math",
    "NaN", "Number", "Object", "Promise", "Proxy", "Reflect", "RegExp",
    "Set", "String", "Symbol", "console", "document", "false", "globalThis",
    "null", "true", "undefined", "window",
];

fn classify(word: &str) -> TokenType {
    if DECLARATIONS.contains(&word) {
        TokenType::KeywordDeclaration
    } else if KEYWORDS.contains(&word) {
        TokenType::Keyword
    } else if BUILTINS.contains(&word) {
        TokenType::NameBuiltin
    } else {
        TokenType::Name
    }
}

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"//[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r"(?s:/\*.*?(?:\*/|\z))", RuleAction::Kind(TokenType::Comment)),
        Rule::new(
            r"(function)(\s+)([A-Za-z_$][\w$]*)",
            RuleAction::Groups(&[
                TokenType::KeywordDeclaration,
                TokenType::Whitespace,
                TokenType::NameFunction,
            ]),
        ),
        Rule::new(
            r"(class)(\s+)([A-Za-z_$][\w$]*)",
            RuleAction::Groups(&[
                TokenType::KeywordDeclaration,
                TokenType::Whitespace,
                TokenType::NameClass,
            ]),
        ),
        Rule::new(
            r#""(?:\\(?s:.)|[^"\\\n])*(?:"|\n|\z)"#,
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(
            r"'(?:\\(?s:.)|[^'\\\n])*(?:'|\n|\z)",
            RuleAction::Kind(TokenType::String),
        ),
        // Template literals may span lines.
        Rule::new(
            r"(?s:`(?:\\.|[^`\\])*(?:`|\z))",
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(r"[A-Za-z_$][\w$]*", RuleAction::ByText(classify)),
        Rule::new(
            r"\d[\d_]*\.[\d_]*(?:[eE][+-]?\d+)?|\.\d[\d_]*|\d[\d_]*[eE][+-]?\d+",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(
            r"0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|\d[\d_]*n?",
            RuleAction::Kind(TokenType::Number),
        ),
        Rule::new(r"[-+*/%=<>!&|^~?]+", RuleAction::Kind(TokenType::Operator)),
        Rule::new(r"[()\[\]{},:.;]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}
