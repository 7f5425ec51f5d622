//! Data models for the curriculum planner

pub mod course;
pub mod curriculum;
pub mod draft;
pub mod note;

pub use course::Course;
pub use curriculum::Curriculum;
pub use draft::CourseDraft;
pub use note::Note;
