// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! SQL rule table. Keywords match case-insensitively.

use crate::engine::{Rule, RuleAction};
use crate::token::TokenType;

const KEYWORDS: &[&str] = &[
    "ALL", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CROSS", "DEFAULT",
    "DELETE", "DESC", "DISTINCT", "ELSE", "END", "EXISTS", "FROM", "FULL",
    "GROUP", "HAVING", "IN", "INNER", "INSERT", "INTO", "IS", "JOIN", "LEFT",
    "LIKE", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER",
    "PRIMARY", "REFERENCES", "RIGHT", "SELECT", "SET", "THEN", "UNION",
    "UNIQUE", "UPDATE", "VALUES", "WHEN", "WHERE",
];

const DECLARATIONS: &[&str] = &[
    "ALTER", "CREATE", "DATABASE", "DROP", "FUNCTION", "INDEX", "KEY",
    "PROCEDURE", "SCHEMA", "TABLE", "TRIGGER", "VIEW",
];

const BUILTINS: &[&str] = &[
    "AVG", "BIGINT", "BOOLEAN", "CAST", "CHAR", "COALESCE", "COUNT", "DATE",
    "DECIMAL", "FLOAT", "INT", "INTEGER", "MAX", "MIN", "NOW", "NUMERIC",
    "REAL", "SMALLINT", "SUM", "TEXT", "TIMESTAMP", "VARCHAR",
];

fn classify(word: &str) -> TokenType {
    let matches = |set: &[&str]| set.iter().any(|k| k.eq_ignore_ascii_case(word));
    if matches(DECLARATIONS) {
        TokenType::KeywordDeclaration
    } else if matches(KEYWORDS) {
        TokenType::Keyword
    } else if matches(BUILTINS) {
        TokenType::NameBuiltin
    } else {
        TokenType::Name
    }
}

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(r"--[^\n]*", RuleAction::Kind(TokenType::CommentSingle)),
        Rule::new(r"(?s:/\*.*?(?:\*/|\z))", RuleAction::Kind(TokenType::Comment)),
        // Doubled quotes escape inside string literals.
        Rule::new(r"'(?:''|[^'\n])*(?:'|\n|\z)", RuleAction::Kind(TokenType::String)),
        Rule::new(r#""[^"\n]*(?:"|\n|\z)"#, RuleAction::Kind(TokenType::Name)),
        Rule::new(r"`[^`\n]*(?:`|\n|\z)", RuleAction::Kind(TokenType::Name)),
        Rule::new(r"[A-Za-z_]\w*", RuleAction::ByText(classify)),
        Rule::new(
            r"\d+\.\d+(?:[eE][+-]?\d+)?|\d+[eE][+-]?\d+",
            RuleAction::Kind(TokenType::NumberFloat),
        ),
        Rule::new(r"\d+", RuleAction::Kind(TokenType::Number)),
        Rule::new(r"[-+*/%=<>!|]+", RuleAction::Kind(TokenType::Operator)),
        Rule::new(r"[(),;.]", RuleAction::Kind(TokenType::Punctuation)),
        Rule::new(r"\s+", RuleAction::Kind(TokenType::Whitespace)),
    ]
}

#[cfg(test)]
mod tests {
    use crate::lexer::LexerConfig;
    use crate::registry::get_lexer;
    use crate::token::TokenType;

    fn kinds_and_text(code: &str) -> Vec<(TokenType, String)> {
        get_lexer("sql")
            .unwrap()
            .scan(code, &LexerConfig::default())
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let tokens = kinds_and_text("select id from users WHERE age > 21;");
        assert_eq!(tokens[0], (TokenType::Keyword, "select".to_string()));
        assert!(tokens.contains(&(TokenType::Keyword, "WHERE".to_string())));
        assert!(tokens.contains(&(TokenType::Name, "users".to_string())));
    }

    #[test]
    fn test_quoted_string_with_doubled_escape() {
        let tokens = kinds_and_text("SELECT 'it''s';");
        assert!(tokens.contains(&(TokenType::String, "'it''s'".to_string())));
    }

    #[test]
    fn test_create_table_is_declaration() {
        let tokens = kinds_and_text("CREATE TABLE t (id INT)");
        assert_eq!(tokens[0].0, TokenType::KeywordDeclaration);
        assert_eq!(tokens[2].0, TokenType::KeywordDeclaration);
        assert!(tokens.contains(&(TokenType::NameBuiltin, "INT".to_string())));
    }
}
