//! Interaction: one resolved (location, question) turn in a session's history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded turn. Created on every successful location resolution and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// The location the question resolved to
    pub location: String,

    /// The question as the user typed it
    pub question: String,

    /// When the turn was resolved
    pub timestamp: DateTime<Utc>,
}

impl Interaction {
    pub fn new(location: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            question: question.into(),
            timestamp: Utc::now(),
        }
    }
}
