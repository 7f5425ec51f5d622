//! Error types for curriculum operations

use thiserror::Error;

/// Rejected course input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric field was zero
    #[error("Field '{0}' must be greater than zero")]
    NotPositive(&'static str),

    /// A new course reused an existing code
    #[error("A course with code \"{0}\" already exists. Choose a unique code.")]
    DuplicateCode(String),

    /// The setup flow needs a career title
    #[error("Career title must not be empty")]
    EmptyTitle,

    /// A note with no text
    #[error("Note content must not be empty")]
    EmptyNote,
}

/// Failure while reading or decoding a curriculum file
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read
    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON
    #[error("File is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON does not have the curriculum shape
    #[error("Invalid curriculum file: {0}")]
    Shape(String),

    /// A course entry could not be decoded
    #[error("Invalid course entry: {0}")]
    Decode(String),
}

/// Any failure of a planner operation
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Course input rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Curriculum file rejected
    #[error(transparent)]
    Import(#[from] ImportError),

    /// No course with that id
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// No note with that id on the course
    #[error("Note {note_id} not found on course {course_id}")]
    NoteNotFound {
        /// Owning course id
        course_id: String,
        /// Missing note id
        note_id: String,
    },

    /// The curriculum has not been created or imported yet
    #[error("No curriculum set up yet. Run 'cplan init' or 'cplan import' first.")]
    NotSetUp,

    /// Export requested with nothing in the curriculum
    #[error("Nothing to export: the curriculum has no title and no courses")]
    NothingToExport,

    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the curriculum failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering a report template failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
