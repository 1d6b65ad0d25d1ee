// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Batch tokenization and highlighting across worker threads.
//!
//! Items are fanned out over a crossbeam channel to scoped workers and
//! fanned back in tagged with their input index, so results always come back
//! in input order regardless of which items finish first. Each item is fully
//! independent; per-item failures (unknown language) land in that item's
//! slot instead of aborting the batch.

use std::thread;

use crate::error::Result;
use crate::html::HtmlFormatter;
use crate::lexer::{FormatConfig, Formatter, LexerConfig};
use crate::registry;
use crate::token::Token;

/// Tokenizes many `(code, language)` pairs, results in input order.
pub fn tokenize_many<S>(items: &[(S, S)], config: &LexerConfig) -> Vec<Result<Vec<Token>>>
where
    S: AsRef<str> + Sync,
{
    run_batch(items, |code, language| {
        let lexer = registry::get_lexer(language)?;
        Ok(lexer.scan(code, config).collect())
    })
}

/// Highlights many `(code, language)` pairs to HTML, results in input order.
pub fn highlight_many<S>(items: &[(S, S)], config: &FormatConfig) -> Vec<Result<String>>
where
    S: AsRef<str> + Sync,
{
    let formatter = HtmlFormatter::new();
    run_batch(items, move |code, language| {
        let lexer = registry::get_lexer(language)?;
        let tokens = Box::new(lexer.scan(code, &LexerConfig::default()));
        Ok(formatter.format_to_string(tokens, config))
    })
}

/// Fan-out/fan-in worker pool over `items`, preserving input order.
fn run_batch<S, T, F>(items: &[(S, S)], work: F) -> Vec<T>
where
    S: AsRef<str> + Sync,
    T: Send,
    F: Fn(&str, &str) -> T + Sync,
{
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(items.len());
    if workers <= 1 {
        return items
            .iter()
            .map(|(code, language)| work(code.as_ref(), language.as_ref()))
            .collect();
    }

    let (task_tx, task_rx) = crossbeam_channel::unbounded();
    let (result_tx, result_rx) = crossbeam_channel::unbounded();
    for task in items.iter().enumerate() {
        // The receiver lives until the scope ends; the send cannot fail.
        let _ = task_tx.send(task);
    }
    drop(task_tx);

    thread::scope(|scope| {
        for _ in 0..workers {
            let task_rx = task_rx.clone();
            let result_tx = result_tx.clone();
            let work = &work;
            scope.spawn(move || {
                for (index, (code, language)) in task_rx {
                    let _ = result_tx.send((index, work(code.as_ref(), language.as_ref())));
                }
            });
        }
        drop(result_tx);

        let mut results: Vec<Option<T>> = (0..items.len()).map(|_| None).collect();
        for (index, result) in result_rx {
            results[index] = Some(result);
        }
        // Every task sends exactly one result; a panic in a worker propagates
        // out of the scope before this runs.
        results.into_iter().map(|slot| slot.unwrap()).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::token::TokenType;

    #[test]
    fn test_tokenize_many_preserves_input_order() {
        let items: Vec<(String, String)> = (0..100)
            .map(|i| (format!("x{i} = {i}"), "python".to_string()))
            .collect();
        let results = tokenize_many(&items, &LexerConfig::default());
        assert_eq!(results.len(), items.len());
        for (i, result) in results.iter().enumerate() {
            let tokens = result.as_ref().unwrap();
            assert_eq!(tokens[0].text, format!("x{i}"));
        }
    }

    #[test]
    fn test_batch_matches_sequential() {
        let items = vec![
            ("def f(): pass", "python"),
            ("fn main() {}", "rust"),
            ("{\"a\": 1}", "json"),
        ];
        let batch = tokenize_many(&items, &LexerConfig::default());
        for ((code, language), result) in items.iter().zip(&batch) {
            let sequential: Vec<Token> = registry::get_lexer(language)
                .unwrap()
                .scan(code, &LexerConfig::default())
                .collect();
            assert_eq!(result.as_ref().unwrap(), &sequential);
        }
    }

    #[test]
    fn test_per_item_failure_stays_in_its_slot() {
        let items = vec![("code", "python"), ("code", "no-such-language")];
        let results = tokenize_many(&items, &LexerConfig::default());
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(Error::UnknownLanguage("no-such-language".to_string()))
        );
    }

    #[test]
    fn test_highlight_many() {
        let items = vec![("a < b", "text"), ("x", "text")];
        let results = highlight_many(&items, &FormatConfig::default());
        assert!(results[0].as_ref().unwrap().contains("&lt;"));
        assert!(results[1].as_ref().unwrap().contains("x"));
    }

    #[test]
    fn test_empty_and_single_item_batches() {
        let empty: Vec<(&str, &str)> = Vec::new();
        assert!(tokenize_many(&empty, &LexerConfig::default()).is_empty());

        let one = vec![("pass", "python")];
        let results = tokenize_many(&one, &LexerConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].as_ref().unwrap()[0].kind, TokenType::Keyword);
    }
}
