// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Rust rule table.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "continue", "crate", "dyn", "else",
    "extern", "false", "for", "if", "in", "loop", "match", "move", "mut",
    "pub", "ref", "return", "self", "Self", "super", "true", "unsafe", "use",
    "where", "while",
];

const DECLARATIONS: &[&str] = &[
    "const", "enum", "fn", "impl", "let", "mod", "static", "struct", "trait",
    "type", "union",
];

const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize",
    "str", "u8", "u16", "u32", "u64", "u128", "usize", "String", "Vec",
    "Option", "Result", "Box", "Some", "None", "Ok", "Err",
];

fn classify(word: &str) -> TokenType {
    if DECLARATIONS.contains(&word) {
        TokenType::KeywordDeclaration
    } else if KEYWORDS.contains(&word) {
        TokenType::Keyword
    } else if BUILTIN_TYPES.contains(&word) {
        TokenType::NameBuiltin
    } else {
        TokenType::Name
    }
}

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"///[^\n]*|//![^\n]*", RuleAction::Kind(TokenType::StringDoc)),
        Rule::new(r"//[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r"(?s:/\*.*?(?:\*/|\z))", RuleAction::Kind(TokenType::Comment)),
        Rule::new(
            r"(fn)(\s+)([A-Za-z_]\w*)",
            RuleAction::Groups(&[
                TokenType::KeywordDeclaration,
                TokenType::Whitespace,
                TokenType::NameFunction,
            ]),
        ),
        Rule::new(
            r"(struct|enum|trait|union)(\s+)([A-Za-z_]\w*)",
            RuleAction::Groups(&[
                TokenType::KeywordDeclaration,
                TokenType::Whitespace,
                TokenType::NameClass,
            ]),
        ),
        Rule::new(r"#!?\[[^\]\n]*\]", RuleAction::Kind(TokenType::NameBuiltin)),
        Rule::new(
            r#"b?"(?:\\(?s:.)|[^"\\])*(?:"|\z)"#,
            RuleAction::Kind(TokenType::String),
        ),
        // Char literal before lifetimes; a lifetime has no closing quote.
        Rule::new(r"b?'(?:\\.|[^'\\\n])'", RuleAction::Kind(TokenType::String)),
        Rule::new(r"'[A-Za-z_]\w*", RuleAction::Kind(TokenType::NameBuiltin)),
        Rule::new(r"[A-Za-z_]\w*!", RuleAction::Kind(TokenType::NameFunction)),
        Rule::new(r"[A-Za-z_]\w*", RuleAction::ByText(classify)),
        Rule::new(
            r"\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?(?:f32|f64)?",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(
            r"0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|\d[\d_]*(?:[iu](?:8|16|32|64|128|size))?",
            RuleAction::Kind(TokenType::Number),
        ),
        Rule::new(r"[-+*/%=<>!&|^?]+|::|->|=>", RuleAction::Kind(TokenType::Operator)),
        Rule::new(r"[()\[\]{},:.;#@]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}
