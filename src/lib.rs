//! Textlab API
//!
//! A small REST service computing text statistics, with in-memory student
//! and feedback collections alongside the analyze endpoint.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;
use tokio::sync::RwLock;

use analysis::TextAnalyzer;
use api::models::{Feedback, Student};
use store::MemoryCollection;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<RwLock<config::Settings>>,
    pub analyzer: TextAnalyzer,
    pub students: MemoryCollection<Student>,
    pub feedbacks: MemoryCollection<Feedback>,
}

impl AppState {
    /// Build state from validated settings; collections start empty.
    pub fn new(settings: config::Settings) -> Self {
        let analyzer = TextAnalyzer::new(
            settings.analysis.most_common_limit,
            settings.analysis.reading_speed_wpm,
        );

        Self {
            settings: Arc::new(RwLock::new(settings)),
            analyzer,
            students: MemoryCollection::new(),
            feedbacks: MemoryCollection::new(),
        }
    }
}
