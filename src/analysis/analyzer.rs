//! Text statistics computation
//!
//! The analyzer is a pure function of its input: no shared state, no I/O,
//! and identical reports for identical text. Input validation (absent or
//! blank `text` fields) is the HTTP layer's job; the analyzer itself is
//! total over strings and produces an all-zero report for empty input.

use std::collections::HashMap;

use crate::analysis::report::{AnalysisReport, WordCount};

/// Frequency ranking entries kept in a report.
pub const DEFAULT_MOST_COMMON_LIMIT: usize = 5;

/// Words per minute assumed when estimating reading time.
pub const DEFAULT_READING_SPEED_WPM: u32 = 200;

/// Computes an [`AnalysisReport`] for raw text.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    most_common_limit: usize,
    reading_speed_wpm: u32,
}

impl TextAnalyzer {
    pub fn new(most_common_limit: usize, reading_speed_wpm: u32) -> Self {
        Self {
            most_common_limit,
            reading_speed_wpm,
        }
    }

    /// Analyze one piece of text.
    ///
    /// The input is trimmed once up front; every statistic below is computed
    /// over the trimmed text. Whitespace-only input therefore produces the
    /// all-zero report.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let text = text.trim();
        if text.is_empty() {
            return AnalysisReport::empty();
        }

        let character_count = text.chars().count();
        let line_count = text.lines().count();

        // Splitting on runs of terminal punctuation leaves a trailing empty
        // segment when the text ends with `.`, `!` or `?`, so terminated
        // text counts one segment more than its sentences. Kept as-is for
        // compatibility with existing clients of the endpoint.
        let sentence_count = terminal_punctuation_runs(text) + 1;

        let cleaned = clean_text(text);
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        let word_count = words.len();

        let (most_common_words, unique_word_count) =
            rank_by_frequency(&words, self.most_common_limit);

        let average_word_length = if word_count == 0 {
            0.0
        } else {
            let total_chars: usize = words.iter().map(|word| word.chars().count()).sum();
            round_to(total_chars as f64 / word_count as f64, 2)
        };

        let estimated_reading_time_minutes = if word_count == 0 || self.reading_speed_wpm == 0 {
            0.0
        } else {
            round_to(word_count as f64 / f64::from(self.reading_speed_wpm), 1)
        };

        AnalysisReport {
            character_count,
            word_count,
            line_count,
            sentence_count,
            most_common_words,
            unique_word_count,
            average_word_length,
            estimated_reading_time_minutes,
        }
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MOST_COMMON_LIMIT, DEFAULT_READING_SPEED_WPM)
    }
}

/// Strip everything that is not an ASCII letter, ASCII digit, or whitespace,
/// then lower-case.
///
/// The ASCII-only character class is intentional: non-ASCII letters are
/// removed and may fragment words. Tokenization depends on this exact
/// cleaning, so widening it to Unicode letters would change word counts for
/// existing clients.
fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Number of maximal runs of `.`, `!`, `?` in the text.
fn terminal_punctuation_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs
}

/// Rank words by descending frequency, ties in first-occurrence order, and
/// truncate to `limit` entries. Also returns the distinct-word count.
fn rank_by_frequency(words: &[&str], limit: usize) -> (Vec<WordCount>, usize) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for &word in words {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    let unique = first_seen.len();

    // `first_seen` preserves encounter order, and the sort is stable, so
    // equal-frequency words stay ordered by first occurrence.
    let mut ranked: Vec<(&str, usize)> = first_seen
        .into_iter()
        .map(|word| (word, counts[word]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let top = ranked
        .into_iter()
        .take(limit)
        .map(|(word, count)| WordCount::new(word, count))
        .collect();

    (top, unique)
}

/// Round half away from zero to `places` decimal places (the behavior of
/// `f64::round`, applied to the shifted value).
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
