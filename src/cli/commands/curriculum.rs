//! Curriculum editing and viewing commands
//!
//! Every handler opens the working file, applies at most one planner request,
//! and writes the file back only when the request succeeds.

use crate::args::{ColorArg, NotesSubcommand};
use crate::commands::{confirm, fail, Workspace};
use curriculum_planner::config::Config;
use curriculum_planner::core::models::CourseDraft;
use curriculum_planner::core::report::{
    credit_percent, ReportContext, ReportGenerator, TextReporter,
};
use curriculum_planner::core::state::Request;
use curriculum_planner::core::template::SetupTemplate;
use curriculum_planner::core::{PlannerError, Result};
use curriculum_planner::{info, verbose};

/// Field values given to `add`
#[derive(Debug)]
pub struct NewCourse {
    /// Course code, also the id
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours
    pub credits: u32,
    /// Semester number
    pub semester: u32,
    /// Prerequisite ids
    pub prerequisites: Vec<String>,
    /// Display color
    pub color: Option<ColorArg>,
}

/// Field changes given to `edit`; `None` keeps the current value
#[derive(Debug, Default)]
pub struct CourseChanges {
    /// New code
    pub code: Option<String>,
    /// New name
    pub name: Option<String>,
    /// New credit hours
    pub credits: Option<u32>,
    /// New semester number
    pub semester: Option<u32>,
    /// Replacement prerequisites (ignored when empty)
    pub prerequisites: Vec<String>,
    /// Drop every prerequisite
    pub clear_prerequisites: bool,
    /// New display color
    pub color: Option<ColorArg>,
}

impl CourseChanges {
    /// Apply the changes on top of a draft of the existing course
    pub fn apply_to(self, draft: &mut CourseDraft) {
        if let Some(code) = self.code {
            draft.code = code;
        }
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(credits) = self.credits {
            draft.credits = credits;
        }
        if let Some(semester) = self.semester {
            draft.semester = semester;
        }
        if self.clear_prerequisites {
            draft.prerequisites.clear();
        } else if !self.prerequisites.is_empty() {
            draft.prerequisites = self.prerequisites;
        }
        if let Some(color) = self.color {
            draft.color = color.tag();
        }
    }
}

fn open(config: &Config) -> Workspace {
    Workspace::open(config).unwrap_or_else(|e| fail("Failed to open working file", &e))
}

fn require_setup(workspace: &Workspace) {
    if !workspace.planner().is_setup_complete() {
        fail("Command needs a curriculum", &PlannerError::NotSetUp);
    }
}

fn apply(workspace: &mut Workspace, request: Request, context: &str) {
    if let Err(e) = workspace.apply(request) {
        fail(context, &e);
    }
}

/// Run `init`
pub fn init(config: &Config, title: &str, blank: bool, force: bool) {
    let mut workspace = open(config);
    if workspace.planner().is_setup_complete() && !force {
        eprintln!(
            "✗ A curriculum already exists at {}. Use --force to replace it.",
            workspace.path().display()
        );
        std::process::exit(1);
    }

    let template = if blank {
        SetupTemplate::Blank
    } else {
        SetupTemplate::Engineering
    };
    apply(
        &mut workspace,
        Request::Setup {
            career_title: title.to_string(),
            template,
        },
        "Setup failed",
    );

    let curriculum = workspace.planner().curriculum();
    info!("Curriculum created at {}", workspace.path().display());
    println!(
        "✓ Created \"{}\" with {} courses",
        curriculum.career_title,
        curriculum.course_count()
    );
    verbose!("  Working file: {}", workspace.path().display());
}

/// Render the curriculum grid for the terminal
///
/// # Errors
/// Returns an error if rendering fails
pub fn render_grid(workspace: &mut Workspace) -> Result<String> {
    let view = workspace.planner_mut().view();
    TextReporter::new().render(&ReportContext::new(&view))
}

/// Run `show`
pub fn show(config: &Config) {
    let mut workspace = open(config);
    require_setup(&workspace);
    match render_grid(&mut workspace) {
        Ok(grid) => print!("{grid}"),
        Err(e) => fail("Failed to render curriculum", &e),
    }
}

/// Run `progress`
pub fn progress(config: &Config) {
    let mut workspace = open(config);
    require_setup(&workspace);
    let view = workspace.planner_mut().view();
    let progress = view.progress;

    println!("\n=== {} ===", ReportContext::new(&view).title());
    println!(
        "Courses: {}/{}",
        progress.completed_courses, progress.total_courses
    );
    println!(
        "Credits: {}/{} ({}%)",
        progress.completed_credits,
        progress.total_credits,
        credit_percent(&progress)
    );

    let available: Vec<&str> = view
        .years
        .iter()
        .flat_map(|y| &y.semesters)
        .flat_map(|s| &s.cards)
        .filter(|card| !card.locked && !card.course.completed)
        .map(|card| card.course.code.as_str())
        .collect();
    if !available.is_empty() {
        println!("Available now: {}", available.join(", "));
    }
}

/// Run `add`
pub fn add(config: &Config, course: NewCourse) {
    let mut workspace = open(config);
    let draft = CourseDraft {
        id: None,
        name: course.name,
        code: course.code,
        credits: course.credits,
        semester: course.semester,
        prerequisites: course.prerequisites,
        color: course.color.and_then(ColorArg::tag),
    };
    let code = draft.code.trim().to_string();
    apply(&mut workspace, Request::SaveCourse(draft), "Add course failed");
    println!("✓ Added {code}");
}

/// Run `edit`
pub fn edit(config: &Config, id: &str, changes: CourseChanges) {
    let mut workspace = open(config);
    require_setup(&workspace);
    let Some(course) = workspace.planner().curriculum().get_course(id) else {
        fail("Edit course failed", &PlannerError::CourseNotFound(id.to_string()));
    };

    let mut draft = CourseDraft::from_course(course);
    changes.apply_to(&mut draft);
    apply(&mut workspace, Request::SaveCourse(draft), "Edit course failed");
    println!("✓ Updated {id}");
}

/// Run `toggle`
pub fn toggle(config: &Config, id: &str) {
    let mut workspace = open(config);
    require_setup(&workspace);

    let view = workspace.planner_mut().view();
    if let Some(card) = view.card(id) {
        if card.locked && !card.course.completed {
            eprintln!(
                "✗ {} is locked until its prerequisites are completed: {}",
                card.course.code,
                card.course.prerequisite_ids().join(", ")
            );
            std::process::exit(1);
        }
    }

    apply(
        &mut workspace,
        Request::ToggleComplete(id.to_string()),
        "Toggle failed",
    );
    let completed = workspace
        .planner()
        .curriculum()
        .get_course(id)
        .is_some_and(|course| course.completed);
    if completed {
        println!("✓ {id} marked completed");
    } else {
        println!("✓ {id} marked not completed");
    }
}

/// Run `title`
pub fn title(config: &Config, title: &str) {
    let mut workspace = open(config);
    apply(
        &mut workspace,
        Request::SetTitle(title.to_string()),
        "Rename failed",
    );
    println!("✓ Career title set to \"{title}\"");
}

/// Run `notes`
pub fn notes(config: &Config, id: &str, subcommand: NotesSubcommand) {
    let mut workspace = open(config);
    require_setup(&workspace);

    match subcommand {
        NotesSubcommand::List => {
            let Some(course) = workspace.planner().curriculum().get_course(id) else {
                fail("Notes failed", &PlannerError::CourseNotFound(id.to_string()));
            };
            let notes = course.note_list();
            if notes.is_empty() {
                println!("No notes for {}", course.code);
            }
            for note in notes {
                println!("[{}] {}", note.id, note.content);
            }
        }
        NotesSubcommand::Add { text } => {
            apply(
                &mut workspace,
                Request::AddNote {
                    course_id: id.to_string(),
                    content: text.join(" "),
                },
                "Add note failed",
            );
            println!("✓ Note added to {id}");
        }
        NotesSubcommand::Delete { note_id } => {
            apply(
                &mut workspace,
                Request::DeleteNote {
                    course_id: id.to_string(),
                    note_id: note_id.clone(),
                },
                "Delete note failed",
            );
            println!("✓ Note {note_id} deleted from {id}");
        }
    }
}

/// Run `reset`
pub fn reset(config: &Config, yes: bool) {
    let mut workspace = open(config);
    if !workspace.planner().is_setup_complete() {
        println!("✓ Nothing to reset");
        return;
    }

    if !yes && !confirm("Are you sure you want to delete the current curriculum?") {
        println!("✗ Reset cancelled");
        return;
    }

    apply(&mut workspace, Request::Reset, "Reset failed");
    info!("Working file removed: {}", workspace.path().display());
    println!("✓ Curriculum cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_planner::core::models::Course;

    #[test]
    fn test_changes_keep_unset_fields() {
        let course = Course::new("CI-201", "Calculus II", 4, 2).with_prerequisites(&["CI-101"]);
        let mut draft = CourseDraft::from_course(&course);
        CourseChanges {
            credits: Some(5),
            color: Some(ColorArg::Rose),
            ..Default::default()
        }
        .apply_to(&mut draft);

        assert_eq!(draft.name, "Calculus II");
        assert_eq!(draft.credits, 5);
        assert_eq!(draft.prerequisites, ["CI-101"]);
        assert_eq!(draft.color.as_deref(), Some("rose"));
    }

    #[test]
    fn test_changes_clear_and_replace_prerequisites() {
        let course = Course::new("CI-301", "Calculus III", 4, 3).with_prerequisites(&["CI-201"]);

        let mut cleared = CourseDraft::from_course(&course);
        CourseChanges {
            clear_prerequisites: true,
            ..Default::default()
        }
        .apply_to(&mut cleared);
        assert!(cleared.prerequisites.is_empty());

        let mut replaced = CourseDraft::from_course(&course);
        CourseChanges {
            prerequisites: vec!["CI-202".to_string()],
            color: Some(ColorArg::Default),
            ..Default::default()
        }
        .apply_to(&mut replaced);
        assert_eq!(replaced.prerequisites, ["CI-202"]);
        assert_eq!(replaced.color, None);
    }
}
