//! Course model

use super::Note;
use serde::{Deserialize, Serialize};

/// Represents a course in a curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Stable identity, usually the course code at creation time (e.g., "CI-101")
    pub id: String,

    /// Course name (e.g., "Calculus I")
    pub name: String,

    /// Display code, unique among courses (e.g., "CI-101")
    pub code: String,

    /// Credit hours
    pub credits: u32,

    /// Semester the course is placed in (1-based)
    pub semester: u32,

    /// Whether the course has been passed
    pub completed: bool,

    /// Prerequisites - stored as course ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,

    /// Display color tag (e.g., "sky", "rose")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Free-form notes attached to the course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,
}

impl Course {
    /// Create a new, not yet completed course whose id is its code
    ///
    /// # Arguments
    /// * `code` - Course code, also used as id
    /// * `name` - Full course name
    /// * `credits` - Credit hours
    /// * `semester` - Semester number (1-based)
    #[must_use]
    pub fn new(code: &str, name: &str, credits: u32, semester: u32) -> Self {
        Self {
            id: code.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            credits,
            semester,
            completed: false,
            prerequisites: None,
            color: None,
            notes: None,
        }
    }

    /// Builder-style helper to set prerequisite ids
    #[must_use]
    pub fn with_prerequisites(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = Some(prerequisites.iter().map(ToString::to_string).collect());
        self
    }

    /// Builder-style helper to mark the course completed
    #[must_use]
    pub const fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Prerequisite ids, empty when none are listed
    #[must_use]
    pub fn prerequisite_ids(&self) -> &[String] {
        self.prerequisites.as_deref().unwrap_or_default()
    }

    /// Notes attached to the course, empty when none exist
    #[must_use]
    pub fn note_list(&self) -> &[Note] {
        self.notes.as_deref().unwrap_or_default()
    }
}
