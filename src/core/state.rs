//! Curriculum state controller
//!
//! [`Planner`] owns the only copy of the current curriculum. Front ends send
//! it [`Request`] values; each one maps to a pure transition that builds a new
//! snapshot from the old one. A failed transition leaves the snapshot as it
//! was. The derived [`CurriculumView`] is cached per snapshot and rebuilt only
//! when the snapshot pointer changes.

use crate::core::deriver::{self, CurriculumView};
use crate::core::error::{PlannerError, Result, ValidationError};
use crate::core::models::{CourseDraft, Curriculum, Note};
use crate::core::template::{self, SetupTemplate};
use std::sync::Arc;

/// A state change requested by a front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Start a new curriculum from a template
    Setup {
        /// Career title (trimmed, must not be empty)
        career_title: String,
        /// Starting courses
        template: SetupTemplate,
    },
    /// Replace everything with an imported curriculum
    Import(Curriculum),
    /// Rename the career
    SetTitle(String),
    /// Create or edit a course
    SaveCourse(CourseDraft),
    /// Flip the completed flag of a course
    ToggleComplete(String),
    /// Append a note to a course
    AddNote {
        /// Owning course id
        course_id: String,
        /// Note text
        content: String,
    },
    /// Remove a note from a course
    DeleteNote {
        /// Owning course id
        course_id: String,
        /// Note id
        note_id: String,
    },
    /// Clear title and courses and go back to setup
    Reset,
}

/// Owner of the current curriculum snapshot
#[derive(Debug, Default)]
pub struct Planner {
    snapshot: Arc<Curriculum>,
    setup_complete: bool,
    view_cache: Option<(Arc<Curriculum>, Arc<CurriculumView>)>,
}

impl Planner {
    /// A planner that still needs setup
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A planner resuming from a saved curriculum
    #[must_use]
    pub fn from_curriculum(curriculum: Curriculum) -> Self {
        Self {
            snapshot: Arc::new(curriculum),
            setup_complete: true,
            view_cache: None,
        }
    }

    /// The current snapshot
    #[must_use]
    pub fn snapshot(&self) -> Arc<Curriculum> {
        Arc::clone(&self.snapshot)
    }

    /// Borrow the current curriculum
    #[must_use]
    pub fn curriculum(&self) -> &Curriculum {
        &self.snapshot
    }

    /// Whether setup or import has run since the last reset
    #[must_use]
    pub const fn is_setup_complete(&self) -> bool {
        self.setup_complete
    }

    /// Apply one request
    ///
    /// On success the snapshot is replaced and returned. On failure nothing
    /// changes.
    ///
    /// # Errors
    /// Returns the validation or lookup error of the transition, or `NotSetUp`
    /// for editing requests before setup
    pub fn dispatch(&mut self, request: Request) -> Result<Arc<Curriculum>> {
        let (next, setup_complete) = match request {
            Request::Setup {
                career_title,
                template,
            } => (setup(&career_title, template)?, true),
            Request::Import(curriculum) => (curriculum, true),
            Request::Reset => (Curriculum::default(), false),
            Request::SetTitle(title) => (set_title(self.editable()?, title), true),
            Request::SaveCourse(draft) => (save_course(self.editable()?, draft)?, true),
            Request::ToggleComplete(id) => (toggle_complete(self.editable()?, &id)?, true),
            Request::AddNote { course_id, content } => {
                (add_note(self.editable()?, &course_id, &content)?, true)
            }
            Request::DeleteNote { course_id, note_id } => {
                (delete_note(self.editable()?, &course_id, &note_id)?, true)
            }
        };

        crate::debug!(
            "Planner snapshot replaced: {} courses, title '{}'",
            next.course_count(),
            next.career_title
        );
        self.snapshot = Arc::new(next);
        self.setup_complete = setup_complete;
        Ok(self.snapshot())
    }

    /// The current curriculum, if editing requests are allowed
    fn editable(&self) -> Result<&Curriculum> {
        if self.setup_complete {
            Ok(&*self.snapshot)
        } else {
            Err(PlannerError::NotSetUp)
        }
    }

    /// Derived view of the current snapshot, rebuilt only after a change
    pub fn view(&mut self) -> Arc<CurriculumView> {
        if let Some((source, view)) = &self.view_cache {
            if Arc::ptr_eq(source, &self.snapshot) {
                return Arc::clone(view);
            }
        }
        let view = Arc::new(deriver::derive(&self.snapshot));
        self.view_cache = Some((self.snapshot(), Arc::clone(&view)));
        view
    }
}

/// Build the starting curriculum for the setup flow
///
/// # Errors
/// Returns `EmptyTitle` when the trimmed title is empty
pub fn setup(career_title: &str, template: SetupTemplate) -> Result<Curriculum> {
    let title = career_title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    Ok(template::build(title.to_string(), template))
}

/// Rename the career
#[must_use]
pub fn set_title(current: &Curriculum, title: String) -> Curriculum {
    Curriculum::new(title, current.courses.clone())
}

/// Create a course or merge an edit into an existing one
///
/// A draft without an id is a create: its code must not already be in use and
/// the new course takes the code as id. A draft with an id edits that course,
/// keeping completion and notes; an id that matches no course creates one
/// under that id, with the same code check.
///
/// # Errors
/// Returns a `ValidationError` for bad input or a duplicate code on create
pub fn save_course(current: &Curriculum, draft: CourseDraft) -> Result<Curriculum> {
    draft.validate()?;

    let existing = draft.id.as_deref().and_then(|id| current.get_course(id));
    let courses = if let Some(existing) = existing {
        let id = existing.id.clone();
        let merged = draft.merge_into(existing);
        current
            .courses
            .iter()
            .map(|c| if c.id == id { merged.clone() } else { c.clone() })
            .collect()
    } else {
        if current.has_code(&draft.code) {
            return Err(ValidationError::DuplicateCode(draft.code).into());
        }
        let mut courses = current.courses.clone();
        courses.push(draft.into_new_course());
        courses
    };

    Ok(Curriculum::new(current.career_title.clone(), courses))
}

/// Flip the completed flag of one course
///
/// # Errors
/// Returns `CourseNotFound` for an unknown id
pub fn toggle_complete(current: &Curriculum, id: &str) -> Result<Curriculum> {
    if current.get_course(id).is_none() {
        return Err(PlannerError::CourseNotFound(id.to_string()));
    }
    let courses = current
        .courses
        .iter()
        .map(|c| {
            let mut c = c.clone();
            if c.id == id {
                c.completed = !c.completed;
            }
            c
        })
        .collect();
    Ok(Curriculum::new(current.career_title.clone(), courses))
}

/// Append a time-stamped note to a course
///
/// # Errors
/// Returns `EmptyNote` for blank text or `CourseNotFound` for an unknown id
pub fn add_note(current: &Curriculum, course_id: &str, content: &str) -> Result<Curriculum> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ValidationError::EmptyNote.into());
    }
    let course = current
        .get_course(course_id)
        .ok_or_else(|| PlannerError::CourseNotFound(course_id.to_string()))?;

    let mut notes = course.note_list().to_vec();
    notes.push(Note::stamped(content.to_string(), &notes));

    Ok(replace_notes(current, course_id, notes))
}

/// Remove a note; a course left without notes drops the field entirely
///
/// # Errors
/// Returns `CourseNotFound` or `NoteNotFound`
pub fn delete_note(current: &Curriculum, course_id: &str, note_id: &str) -> Result<Curriculum> {
    let course = current
        .get_course(course_id)
        .ok_or_else(|| PlannerError::CourseNotFound(course_id.to_string()))?;

    let before = course.note_list();
    let notes: Vec<Note> = before.iter().filter(|n| n.id != note_id).cloned().collect();
    if notes.len() == before.len() {
        return Err(PlannerError::NoteNotFound {
            course_id: course_id.to_string(),
            note_id: note_id.to_string(),
        });
    }

    Ok(replace_notes(current, course_id, notes))
}

fn replace_notes(current: &Curriculum, course_id: &str, notes: Vec<Note>) -> Curriculum {
    let notes = if notes.is_empty() { None } else { Some(notes) };
    let courses = current
        .courses
        .iter()
        .map(|c| {
            let mut c = c.clone();
            if c.id == course_id {
                c.notes.clone_from(&notes);
            }
            c
        })
        .collect();
    Curriculum::new(current.career_title.clone(), courses)
}
