//! Note model

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A free-text note attached to a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note id, derived from the creation time in milliseconds
    pub id: String,

    /// Note text
    pub content: String,
}

impl Note {
    /// Create a note with an explicit id
    #[must_use]
    pub fn new(id: String, content: String) -> Self {
        Self { id, content }
    }

    /// Create a note stamped with the current time, avoiding ids already in `existing`
    ///
    /// The id is the Unix time in milliseconds. Notes added within the same
    /// millisecond get the next free value.
    #[must_use]
    pub fn stamped(content: String, existing: &[Self]) -> Self {
        let mut stamp = Utc::now().timestamp_millis();
        while existing.iter().any(|n| n.id == stamp.to_string()) {
            stamp += 1;
        }
        Self::new(stamp.to_string(), content)
    }
}
