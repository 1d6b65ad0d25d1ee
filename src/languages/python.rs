// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Python rule table.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "continue", "del", "elif", "else", "except", "finally", "for", "from",
    "global", "if", "import", "in", "is", "nonlocal", "not", "or", "pass",
    "raise", "return", "try", "while", "with", "yield",
];

const DECLARATIONS: &[&str] = &["class", "def", "lambda"];

const BUILTINS: &[&str] = &[
    "abs", "all", "any", "bool", "bytes", "callable", "dict", "dir",
    "enumerate", "filter", "float", "format", "frozenset", "getattr",
    "hasattr", "hash", "id", "input", "int", "isinstance", "issubclass",
    "iter", "len", "list", "map", "max", "min", "next", "object", "open",
    "ord", "print", "range", "repr", "reversed", "round", "set", "setattr",
    "sorted", "str", "sum", "super", "tuple", "type", "vars", "zip",
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
        Rule::new(r"#[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r#"(?s:""".*?(?:"""|\z))"#, RuleAction::Kind(TokenType::StringDoc)),
        Rule::new(r"(?s:'''.*?(?:'''|\z))", RuleAction::Kind(TokenType::StringDoc)),
        Rule::new(
            r"(def)(\s+)([A-Za-z_]\w*)",
            RuleAction::Groups(&[
                TokenType::KeywordDeclaration,
                TokenType::Whitespace,
                TokenType::NameFunction,
            ]),
        ),
        Rule::new(
            r"(class)(\s+)([A-Za-z_]\w*)",
            RuleAction::Groups(&[
                TokenType::KeywordDeclaration,
                TokenType::Whitespace,
                TokenType::NameClass,
            ]),
        ),
        Rule::new(r"@[A-Za-z_][\w.]*", RuleAction::Kind(TokenType::NameBuiltin)),
        // Unterminated strings run to end of line or input; escaped newlines
        // continue the literal. Before the identifier rule so string prefixes
        // (`rb"..."`) attach to the literal.
        Rule::new(
            r#"[rbuf]{0,2}"(?:\\(?s:.)|[^"\\\n])*(?:"|\n|\z)"#,
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(
            r"[rbuf]{0,2}'(?:\\(?s:.)|[^'\\\n])*(?:'|\n|\z)",
            RuleAction::Kind(TokenType::String),
        ),
        Rule::new(r"[A-Za-z_]\w*", RuleAction::ByText(classify)),
        Rule::new(
            r"\d[\d_]*\.[\d_]*(?:[eE][+-]?\d+)?|\d[\d_]*[eE][+-]?\d+",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(
            r"0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+|\d[\d_]*",
            RuleAction::Kind(TokenType::Number),
        ),
        Rule::new(r"[-+*/%=<>!&|^~@]+", RuleAction::Kind(TokenType::Operator)),
        Rule::new(r"[()\[\]{},:.;`]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerConfig;
    use crate::registry::get_lexer;
    use crate::token::TokenType;

    fn kinds_and_text(code: &str) -> Vec<(TokenType, String)> {
        get_lexer("python")
            .unwrap()
            .scan(code, &LexerConfig::default())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_function_definition() {
        let tokens = kinds_and_text("def hello(): pass");
        assert_eq!(
            tokens,
            vec![
                (TokenType::KeywordDeclaration, "def".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::NameFunction, "hello".to_string()),
                (TokenType::Punctuation, "(".to_string()),
                (TokenType::Punctuation, ")".to_string()),
                (TokenType::Punctuation, ":".to_string()),
                (TokenType::Whitespace, " ".to_string()),
                (TokenType::Keyword, "pass".to_string()),
            ]
        );
    }

    #[test]
    fn test_class_definition() {
        let tokens = kinds_and_text("class Greeter:");
        assert_eq!(tokens[0].0, TokenType::KeywordDeclaration);
        assert_eq!(tokens[2], (TokenType::NameClass, "Greeter".to_string()));
    }

    #[test]
    fn test_keyword_without_following_name_still_highlights() {
        // `def(` has no name after it; the identifier rule picks it up.
        let tokens = kinds_and_text("def(");
        assert_eq!(tokens[0], (TokenType::KeywordDeclaration, "def".to_string()));
    }

    #[test]
    fn test_docstring_and_comment() {
        let tokens = kinds_and_text("\"\"\"doc\nstring\"\"\"  # note");
        assert_eq!(tokens[0].0, TokenType::StringDoc);
        assert_eq!(tokens.last().unwrap().0, TokenType::CommentSingle);
    }

    #[test]
    fn test_builtin_and_numbers() {
        let tokens = kinds_and_text("print(3.14, 0xff)");
        assert_eq!(tokens[0].0, TokenType::NameBuiltin);
        assert!(tokens.contains(&(TokenType::NumberFloat, "3.14".to_string())));
        assert!(tokens.contains(&(TokenType::Number, "0xff".to_string())));
    }

    #[test]
    fn test_unterminated_string_degrades_gracefully() {
        let tokens = kinds_and_text("s = \"open\nx = 1");
        let rebuilt: String = tokens.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(rebuilt, "s = \"open\nx = 1");
        assert!(tokens.iter().any(|(k, _)| *k == TokenType::String));
    }

    #[test]
    fn test_identifier_containing_def_is_not_a_keyword() {
        let tokens = kinds_and_text("undefined");
        assert_eq!(tokens, vec![(TokenType::Name, "undefined".to_string())]);
    }
}
