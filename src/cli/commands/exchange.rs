//! Import and export command handlers

use crate::commands::{fail, Workspace};
use curriculum_planner::config::Config;
use curriculum_planner::core::exchange::{export_to_dir, export_to_file, import_file};
use curriculum_planner::core::state::Request;
use curriculum_planner::{info, verbose};
use std::path::{Path, PathBuf};

/// Run `import`
///
/// The working file is only rewritten when the whole file decodes.
pub fn import(config: &Config, file: &Path) {
    let mut workspace =
        Workspace::open(config).unwrap_or_else(|e| fail("Failed to open working file", &e));

    let curriculum = import_file(file)
        .unwrap_or_else(|e| fail(&format!("Import of {} rejected", file.display()), &e));
    let count = curriculum.course_count();

    if let Err(e) = workspace.apply(Request::Import(curriculum)) {
        fail("Import failed", &e);
    }

    info!("Imported {count} courses from {}", file.display());
    println!("✓ Imported {count} courses from {}", file.display());
    verbose!("  Working file: {}", workspace.path().display());
}

/// Run `export`
///
/// Without `--output` the file goes to `paths.export_dir` as
/// `curriculum-<title>.json`.
pub fn export(config: &Config, output: Option<&Path>) {
    let workspace =
        Workspace::open(config).unwrap_or_else(|e| fail("Failed to open working file", &e));
    let curriculum = workspace.planner().curriculum();

    let result = match output {
        Some(path) => export_to_file(curriculum, path).map(|()| path.to_path_buf()),
        None => {
            let dir = if config.paths.export_dir.is_empty() {
                PathBuf::from(".")
            } else {
                PathBuf::from(&config.paths.export_dir)
            };
            export_to_dir(curriculum, &dir)
        }
    };

    match result {
        Ok(path) => {
            info!("Curriculum exported to {}", path.display());
            println!("✓ Exported to {}", path.display());
        }
        Err(e) => fail("Export failed", &e),
    }
}
