//! Course form input

use super::Course;
use crate::core::error::ValidationError;

/// Field values submitted when adding or editing a course
///
/// `completed` and `notes` are not part of a draft; creating a course starts
/// them empty and editing keeps the existing values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseDraft {
    /// Id of the course being edited; `None` creates a course whose id is the code
    pub id: Option<String>,
    /// Course name
    pub name: String,
    /// Course code
    pub code: String,
    /// Credit hours
    pub credits: u32,
    /// Semester number
    pub semester: u32,
    /// Prerequisite course ids
    pub prerequisites: Vec<String>,
    /// Color tag; `None` for the default look
    pub color: Option<String>,
}

impl CourseDraft {
    /// Start a draft from an existing course, for editing
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: Some(course.id.clone()),
            name: course.name.clone(),
            code: course.code.clone(),
            credits: course.credits,
            semester: course.semester,
            prerequisites: course.prerequisite_ids().to_vec(),
            color: course.color.clone(),
        }
    }

    /// Id the saved course will have
    #[must_use]
    pub fn target_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.code)
    }

    /// Check required fields and positive numbers
    ///
    /// # Errors
    /// Returns the first failing check
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.code.trim().is_empty() {
            return Err(ValidationError::MissingField("code"));
        }
        if self.credits == 0 {
            return Err(ValidationError::NotPositive("credits"));
        }
        if self.semester == 0 {
            return Err(ValidationError::NotPositive("semester"));
        }
        Ok(())
    }

    /// Build a brand new course from this draft
    #[must_use]
    pub fn into_new_course(self) -> Course {
        let id = self.target_id().to_string();
        Course {
            id,
            name: self.name,
            code: self.code,
            credits: self.credits,
            semester: self.semester,
            completed: false,
            prerequisites: Some(self.prerequisites),
            color: self.color,
            notes: None,
        }
    }

    /// Merge this draft's fields into `existing`, keeping completion and notes
    #[must_use]
    pub fn merge_into(self, existing: &Course) -> Course {
        Course {
            id: existing.id.clone(),
            name: self.name,
            code: self.code,
            credits: self.credits,
            semester: self.semester,
            completed: existing.completed,
            prerequisites: Some(self.prerequisites),
            color: self.color,
            notes: existing.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Note;

    fn draft() -> CourseDraft {
        CourseDraft {
            id: None,
            name: "Data Structures".to_string(),
            code: "CI-203".to_string(),
            credits: 5,
            semester: 2,
            prerequisites: vec!["CI-103".to_string()],
            color: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert_eq!(draft().validate(), Ok(()));
        assert_eq!(draft().target_id(), "CI-203");
    }

    #[test]
    fn test_missing_fields() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert_eq!(d.validate(), Err(ValidationError::MissingField("name")));

        let mut d = draft();
        d.code = String::new();
        assert_eq!(d.validate(), Err(ValidationError::MissingField("code")));
    }

    #[test]
    fn test_non_positive_numbers() {
        let mut d = draft();
        d.credits = 0;
        assert_eq!(d.validate(), Err(ValidationError::NotPositive("credits")));

        let mut d = draft();
        d.semester = 0;
        assert_eq!(d.validate(), Err(ValidationError::NotPositive("semester")));
    }

    #[test]
    fn test_new_course_uses_code_as_id() {
        let course = draft().into_new_course();
        assert_eq!(course.id, "CI-203");
        assert!(!course.completed);
        assert!(course.notes.is_none());
        assert_eq!(course.prerequisite_ids(), ["CI-103".to_string()]);
    }

    #[test]
    fn test_merge_keeps_completion_and_notes() {
        let mut existing = Course::new("CI-203", "Old Name", 4, 3).completed();
        existing.notes = Some(vec![Note::new("1".to_string(), "keep me".to_string())]);

        let mut d = CourseDraft::from_course(&existing);
        d.name = "Data Structures".to_string();
        d.code = "CI-250".to_string();
        let merged = d.merge_into(&existing);

        assert_eq!(merged.id, "CI-203");
        assert_eq!(merged.code, "CI-250");
        assert_eq!(merged.name, "Data Structures");
        assert!(merged.completed);
        assert_eq!(merged.note_list().len(), 1);
    }
}
