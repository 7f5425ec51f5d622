//! Curriculum model

use super::Course;
use serde::{Deserialize, Serialize};

/// A career title plus its courses, in input order
///
/// This is both the in-memory state and the shape of the exchange file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    /// Name of the degree program (e.g., "Software Engineering")
    pub career_title: String,

    /// Courses in the order they were added or imported
    pub courses: Vec<Course>,
}

impl Curriculum {
    /// Create a curriculum from a title and a course list
    #[must_use]
    pub const fn new(career_title: String, courses: Vec<Course>) -> Self {
        Self {
            career_title,
            courses,
        }
    }

    /// Look up a course by id
    #[must_use]
    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Check whether any course already uses `code`
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.code == code)
    }

    /// Get the number of courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// True when there is neither a title nor any course
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.career_title.is_empty() && self.courses.is_empty()
    }
}
