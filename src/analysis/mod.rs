//! Analysis module - the text statistics core

pub mod analyzer;
pub mod report;

pub use analyzer::{TextAnalyzer, DEFAULT_MOST_COMMON_LIMIT, DEFAULT_READING_SPEED_WPM};
pub use report::{AnalysisReport, WordCount};
