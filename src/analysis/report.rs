//! Statistics report produced by one analysis call

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use utoipa::ToSchema;

/// One entry of the frequency ranking.
///
/// Serialized as a `[word, count]` pair so the wire format stays a plain
/// two-element array rather than an object.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl Serialize for WordCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.word)?;
        pair.serialize_element(&self.count)?;
        pair.end()
    }
}

impl<'de> Deserialize<'de> for WordCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (word, count) = <(String, usize)>::deserialize(deserializer)?;
        Ok(Self { word, count })
    }
}

/// Immutable statistics for a single piece of text.
///
/// Constructed fresh per call by [`TextAnalyzer::analyze`] and returned to
/// the HTTP layer as a flat JSON object.
///
/// [`TextAnalyzer::analyze`]: crate::analysis::TextAnalyzer::analyze
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct AnalysisReport {
    /// Unicode scalar values in the trimmed input
    pub character_count: usize,

    /// Whitespace-delimited tokens in the cleaned text
    pub word_count: usize,

    /// Newline-delimited segments of the trimmed input
    pub line_count: usize,

    /// Segments produced by splitting on runs of `.`, `!`, `?`. Text ending
    /// in terminal punctuation yields a trailing empty segment that is
    /// counted too; this matches the historical behavior of the endpoint
    /// and is relied on by existing clients.
    pub sentence_count: usize,

    /// Highest-frequency words, descending, ties in first-seen order
    pub most_common_words: Vec<WordCount>,

    /// Distinct words in the cleaned text
    pub unique_word_count: usize,

    /// Mean word length, rounded to 2 decimal places
    pub average_word_length: f64,

    /// `word_count` divided by the reading speed, rounded to 1 decimal place
    pub estimated_reading_time_minutes: f64,
}

impl AnalysisReport {
    /// Report for input with no analyzable content.
    pub fn empty() -> Self {
        Self {
            character_count: 0,
            word_count: 0,
            line_count: 0,
            sentence_count: 0,
            most_common_words: Vec::new(),
            unique_word_count: 0,
            average_word_length: 0.0,
            estimated_reading_time_minutes: 0.0,
        }
    }
}
