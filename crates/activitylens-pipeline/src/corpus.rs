//! Title corpus for the word-frequency visual.
//!
//! The dashboard's word-cloud layout runs in the browser; this module only
//! supplies the corpus text and a word-frequency table to feed it.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::NormalizedRecord;

/// One word and how often it appears in the title corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Concatenate every non-empty title, space-separated, in record order.
/// Empty when no record has a title.
pub fn build_corpus(records: &[NormalizedRecord]) -> String {
    let titles: Vec<&str> = records
        .iter()
        .filter(|r| !r.title.is_empty())
        .map(|r| r.title.as_str())
        .collect();
    titles.join(" ")
}

/// Top-N word frequencies from the corpus. Tokens are lowercased and
/// stripped of surrounding punctuation; empty tokens are skipped.
/// Ties order alphabetically so the table is deterministic.
pub fn word_frequencies(corpus: &str, top_n: usize) -> Vec<WordCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for token in corpus.split_whitespace() {
        let word: String = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        *counts.entry(word).or_default() += 1;
    }

    let mut table: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then(a.word.cmp(&b.word)));
    table.truncate(top_n);
    table
}
