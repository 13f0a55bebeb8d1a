//! Optional seed data for the in-memory collections
//!
//! The collections start empty; deployments that want canned records point
//! `seed.path` at a YAML file and the records are inserted at startup with
//! identifiers allocated the normal way.

use crate::api::models::{Feedback, Student};
use crate::error::Result;
use crate::AppState;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub students: Vec<StudentSeed>,
    #[serde(default)]
    pub feedbacks: Vec<FeedbackSeed>,
}

/// Student seed record; the identifier is assigned on insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSeed {
    pub name: String,
    pub dob: String,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub bio: String,
}

/// Feedback seed record; the identifier is assigned on insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSeed {
    pub name: String,
    pub message: String,
}

/// Load seed data from a YAML file
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<SeedData> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let seed: SeedData = serde_yaml::from_str(&content)?;
    Ok(seed)
}

/// Insert seed records into the state's collections.
///
/// Returns the number of students and feedback entries inserted.
pub fn apply_seed(state: &AppState, seed: SeedData) -> (usize, usize) {
    let students = seed.students.len();
    for record in seed.students {
        state.students.insert_with(|id| Student {
            id,
            name: record.name,
            dob: record.dob,
            country: record.country,
            city: record.city,
            skills: record.skills,
            bio: record.bio,
        });
    }

    let feedbacks = seed.feedbacks.len();
    for record in seed.feedbacks {
        state.feedbacks.insert_with(|id| Feedback {
            id,
            name: record.name,
            message: record.message,
        });
    }

    (students, feedbacks)
}
