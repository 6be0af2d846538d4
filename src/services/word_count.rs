use crate::domain::models::WordEntry;
use std::collections::BTreeMap;

pub const RESULTS_PREFIX: &str = "WordCountResults";

#[derive(Debug, Default)]
pub struct WordCounts {
    /// Keyed by normalized word; iteration order is the report order.
    pub counts: BTreeMap<String, usize>,
    pub valid: usize,
    pub invalid_tokens: Vec<String>,
}

impl WordCounts {
    pub fn invalid(&self) -> usize {
        self.invalid_tokens.len()
    }

    pub fn entries(&self) -> Vec<WordEntry> {
        self.counts
            .iter()
            .map(|(word, count)| WordEntry {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

/// Strips non-alphanumeric ASCII edges and lowercases; `None` if nothing is left.
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw
        .trim()
        .trim_matches(|c: char| !c.is_ascii_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

pub fn count_words<S: AsRef<str>>(tokens: &[S]) -> WordCounts {
    let mut out = WordCounts::default();
    for token in tokens {
        match normalize_word(token.as_ref()) {
            Some(word) => {
                out.valid += 1;
                *out.counts.entry(word).or_insert(0) += 1;
            }
            None => out.invalid_tokens.push(token.as_ref().to_string()),
        }
    }
    out
}

pub fn report_lines(input_file: &str, counts: &WordCounts, elapsed_secs: f64) -> Vec<String> {
    let mut lines = vec![
        "Word Count Results".to_string(),
        format!("Input file: {}", input_file),
        String::new(),
        format!("Valid words: {}", counts.valid),
        format!("Invalid tokens: {}", counts.invalid()),
        format!("Distinct words: {}", counts.counts.len()),
        String::new(),
        format!("{:<25} {:>10}", "WORD", "COUNT"),
        "-".repeat(36),
    ];
    for (word, count) in &counts.counts {
        lines.push(format!("{:<25} {:>10}", word, count));
    }
    lines.push(String::new());
    lines.push(format!("Elapsed time: {:.6} seconds", elapsed_secs));
    lines
}
