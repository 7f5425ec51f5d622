//! Integration tests for the planner state and derived views

use curriculum_planner::core::deriver::derive;
use curriculum_planner::core::models::{Course, CourseDraft, Curriculum};
use curriculum_planner::core::state::{Planner, Request};
use curriculum_planner::core::template::SetupTemplate;
use curriculum_planner::core::{PlannerError, ValidationError};
use std::sync::Arc;

fn engineering_planner() -> Planner {
    let mut planner = Planner::new();
    planner
        .dispatch(Request::Setup {
            career_title: "  Systems Engineering ".to_string(),
            template: SetupTemplate::Engineering,
        })
        .expect("setup should succeed");
    planner
}

fn draft(code: &str, semester: u32, prerequisites: &[&str]) -> CourseDraft {
    CourseDraft {
        id: None,
        name: format!("Course {code}"),
        code: code.to_string(),
        credits: 3,
        semester,
        prerequisites: prerequisites.iter().map(ToString::to_string).collect(),
        color: None,
    }
}

#[test]
fn setup_loads_template_with_trimmed_title() {
    let mut planner = engineering_planner();
    assert!(planner.is_setup_complete());
    assert_eq!(planner.curriculum().career_title, "Systems Engineering");
    assert_eq!(planner.curriculum().course_count(), 43);

    let view = planner.view();
    assert_eq!(view.semester_count(), 10);
    assert_eq!(view.years.len(), 5);
    assert_eq!(view.progress.completed_courses, 0);
}

#[test]
fn setup_rejects_blank_title() {
    let mut planner = Planner::new();
    let err = planner
        .dispatch(Request::Setup {
            career_title: "   ".to_string(),
            template: SetupTemplate::Blank,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Validation(ValidationError::EmptyTitle)
    ));
    assert!(!planner.is_setup_complete());
}

#[test]
fn editing_before_setup_is_refused() {
    let mut planner = Planner::new();
    let err = planner
        .dispatch(Request::SaveCourse(draft("X-1", 1, &[])))
        .unwrap_err();
    assert!(matches!(err, PlannerError::NotSetUp));
}

#[test]
fn completing_prerequisite_unlocks_dependent() {
    let mut planner = Planner::new();
    planner
        .dispatch(Request::Setup {
            career_title: "Test".to_string(),
            template: SetupTemplate::Blank,
        })
        .unwrap();
    planner
        .dispatch(Request::SaveCourse(draft("A", 1, &[])))
        .unwrap();
    planner
        .dispatch(Request::SaveCourse(draft("B", 2, &["A"])))
        .unwrap();

    assert!(planner.view().card("B").unwrap().locked);

    planner
        .dispatch(Request::ToggleComplete("A".to_string()))
        .unwrap();
    assert!(!planner.view().card("B").unwrap().locked);

    planner
        .dispatch(Request::ToggleComplete("A".to_string()))
        .unwrap();
    assert!(planner.view().card("B").unwrap().locked);
}

#[test]
fn toggling_twice_restores_collection() {
    let mut planner = engineering_planner();
    let before = planner.snapshot();

    planner
        .dispatch(Request::ToggleComplete("CI-101".to_string()))
        .unwrap();
    let after = planner
        .dispatch(Request::ToggleComplete("CI-101".to_string()))
        .unwrap();

    assert_eq!(*before, *after);
    assert!(!Arc::ptr_eq(&before, &after));
}

#[test]
fn duplicate_code_is_rejected_without_change() {
    let mut planner = engineering_planner();
    let before = planner.snapshot();

    let err = planner
        .dispatch(Request::SaveCourse(draft("CI-101", 1, &[])))
        .unwrap_err();

    assert!(matches!(
        err,
        PlannerError::Validation(ValidationError::DuplicateCode(_))
    ));
    assert_eq!(planner.curriculum().course_count(), 43);
    assert!(Arc::ptr_eq(&before, &planner.snapshot()));
}

#[test]
fn edit_keeps_completion_and_notes() {
    let mut planner = engineering_planner();
    planner
        .dispatch(Request::ToggleComplete("CI-103".to_string()))
        .unwrap();
    planner
        .dispatch(Request::AddNote {
            course_id: "CI-103".to_string(),
            content: "bring laptop".to_string(),
        })
        .unwrap();

    let mut edit = CourseDraft::from_course(planner.curriculum().get_course("CI-103").unwrap());
    edit.name = "Programming Fundamentals".to_string();
    edit.credits = 6;
    planner.dispatch(Request::SaveCourse(edit)).unwrap();

    let course = planner.curriculum().get_course("CI-103").unwrap();
    assert_eq!(course.name, "Programming Fundamentals");
    assert_eq!(course.credits, 6);
    assert!(course.completed);
    assert_eq!(course.note_list().len(), 1);
    assert_eq!(planner.curriculum().course_count(), 43);
}

#[test]
fn notes_can_be_added_and_deleted() {
    let mut planner = engineering_planner();
    planner
        .dispatch(Request::AddNote {
            course_id: "CI-201".to_string(),
            content: "  exam on friday ".to_string(),
        })
        .unwrap();

    let note = planner.curriculum().get_course("CI-201").unwrap().note_list()[0].clone();
    assert_eq!(note.content, "exam on friday");

    let missing = planner.dispatch(Request::DeleteNote {
        course_id: "CI-201".to_string(),
        note_id: "0".to_string(),
    });
    assert!(matches!(missing, Err(PlannerError::NoteNotFound { .. })));

    planner
        .dispatch(Request::DeleteNote {
            course_id: "CI-201".to_string(),
            note_id: note.id,
        })
        .unwrap();
    assert!(planner
        .curriculum()
        .get_course("CI-201")
        .unwrap()
        .notes
        .is_none());
}

#[test]
fn reset_returns_to_setup() {
    let mut planner = engineering_planner();
    planner.dispatch(Request::Reset).unwrap();

    assert!(!planner.is_setup_complete());
    assert!(planner.curriculum().is_empty());
    assert!(matches!(
        planner.dispatch(Request::SetTitle("Again".to_string())),
        Err(PlannerError::NotSetUp)
    ));
}

#[test]
fn view_is_cached_per_snapshot() {
    let mut planner = engineering_planner();
    let first = planner.view();
    let second = planner.view();
    assert!(Arc::ptr_eq(&first, &second));

    planner
        .dispatch(Request::SetTitle("Renamed".to_string()))
        .unwrap();
    let third = planner.view();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.career_title, "Renamed");
}

#[test]
fn semesters_order_numerically_and_pair_into_years() {
    let curriculum = Curriculum::new(
        "Order".to_string(),
        vec![
            Course::new("C-10", "Ten", 3, 10),
            Course::new("C-2", "Two", 3, 2),
            Course::new("C-1", "One", 3, 1),
        ],
    );
    let view = derive(&curriculum);

    let numbers: Vec<u32> = view
        .years
        .iter()
        .flat_map(|y| y.semesters.iter().map(|s| s.number))
        .collect();
    assert_eq!(numbers, [1, 2, 10]);
    assert_eq!(view.years.len(), 2);
    assert_eq!(view.years[1].semesters[0].number, 10);
}
