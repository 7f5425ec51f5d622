//! Integration tests for curriculum export and import files

use curriculum_planner::core::exchange::{
    export_to_dir, export_to_file, import_file, import_str,
};
use curriculum_planner::core::models::{Curriculum, Note};
use curriculum_planner::core::report::{ReportContext, ReportFormat, ReportGenerator};
use curriculum_planner::core::state::{Planner, Request};
use curriculum_planner::core::template::{engineering_template, SetupTemplate};
use curriculum_planner::core::{ImportError, PlannerError};
use std::fs;
use tempfile::TempDir;

#[test]
fn export_then_import_round_trips_through_a_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut curriculum = engineering_template("Software Engineering".to_string());
    curriculum.courses[0].completed = true;
    curriculum.courses[1].color = Some("amber".to_string());
    curriculum.courses[2].notes = Some(vec![Note::new(
        "1700000000000".to_string(),
        "lab on tuesdays".to_string(),
    )]);

    let path = export_to_dir(&curriculum, temp_dir.path()).expect("export should succeed");
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "curriculum-software-engineering.json"
    );

    let imported = import_file(&path).expect("import should succeed");
    assert_eq!(imported, curriculum);
}

#[test]
fn exported_json_uses_exchange_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let curriculum = engineering_template("Eng".to_string());
    let path = temp_dir.path().join("out").join("plan.json");

    export_to_file(&curriculum, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains("\"careerTitle\": \"Eng\""));
    assert!(text.contains("\"courses\""));
    assert!(text.contains("\"prerequisites\""));
    assert!(!text.contains("\"notes\""));
}

#[test]
fn empty_curriculum_is_not_exported() {
    let temp_dir = TempDir::new().unwrap();
    let result = export_to_dir(&Curriculum::default(), temp_dir.path());
    assert!(matches!(result, Err(PlannerError::NothingToExport)));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn rejected_import_leaves_planner_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.json");
    fs::write(&bad, r#"{"careerTitle": 7, "courses": []}"#).unwrap();

    let mut planner = Planner::new();
    planner
        .dispatch(Request::Setup {
            career_title: "Kept".to_string(),
            template: SetupTemplate::Engineering,
        })
        .unwrap();
    let before = planner.snapshot();

    let result = import_file(&bad).map_err(PlannerError::from);
    assert!(matches!(
        result,
        Err(PlannerError::Import(ImportError::Shape(_)))
    ));
    assert_eq!(*planner.snapshot(), *before);
}

#[test]
fn import_reports_each_failure_kind() {
    assert!(matches!(import_str("not json"), Err(ImportError::Json(_))));
    assert!(matches!(
        import_str(r#"{"careerTitle": "x", "courses": {}}"#),
        Err(ImportError::Shape(_))
    ));
    assert!(matches!(
        import_str(r#"{"careerTitle": "x", "courses": [{"id": "A"}]}"#),
        Err(ImportError::Decode(_))
    ));

    let missing = TempDir::new().unwrap().path().join("missing.json");
    assert!(matches!(import_file(&missing), Err(ImportError::Io(_))));
}

#[test]
fn imported_maximum_credits_still_render() {
    let text = format!(
        r#"{{"careerTitle": "Big", "courses": [
            {{"id": "A", "name": "Alpha", "code": "A", "credits": {}, "semester": 1, "completed": true}},
            {{"id": "B", "name": "Beta", "code": "B", "credits": 2, "semester": 1, "completed": false}}
        ]}}"#,
        u32::MAX
    );
    let mut planner = Planner::new();
    planner
        .dispatch(Request::Import(import_str(&text).unwrap()))
        .unwrap();

    let view = planner.view();
    assert_eq!(view.progress.total_credits, u64::from(u32::MAX) + 2);
    assert_eq!(view.years[0].aggregate.total_credits, u64::from(u32::MAX) + 2);

    let report = ReportFormat::Text
        .reporter()
        .render(&ReportContext::new(&view))
        .unwrap();
    assert!(report.contains("=== Big ==="));
}

#[test]
fn import_replaces_state_and_marks_setup_complete() {
    let text = r#"{
        "careerTitle": "Imported",
        "courses": [
            {"id": "A", "name": "Alpha", "code": "A", "credits": 3, "semester": 1, "completed": true},
            {"id": "B", "name": "Beta", "code": "B", "credits": 4, "semester": 2, "completed": false,
             "prerequisites": ["A"]}
        ]
    }"#;
    let curriculum = import_str(text).unwrap();

    let mut planner = Planner::new();
    planner.dispatch(Request::Import(curriculum)).unwrap();

    assert!(planner.is_setup_complete());
    assert_eq!(planner.curriculum().career_title, "Imported");
    let view = planner.view();
    assert!(!view.card("B").unwrap().locked);
    assert_eq!(view.progress.completed_credits, 3);
}
