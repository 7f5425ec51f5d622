//! CLI command handlers for `cplan`.
//!
//! Each group of subcommands lives in its own submodule. Curriculum commands
//! share a [`Workspace`]: the working curriculum file named by
//! `paths.data_file`, loaded into a [`Planner`] and written back after a
//! successful change.

pub mod config;
pub mod curriculum;
pub mod exchange;
pub mod report;

use curriculum_planner::config::Config;
use curriculum_planner::core::exchange::import_file;
use curriculum_planner::core::state::{Planner, Request};
use curriculum_planner::core::Result;
use curriculum_planner::{debug, error};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Working file used when `paths.data_file` is empty
const FALLBACK_DATA_FILE: &str = "curriculum.json";

/// The working curriculum file and the planner built from it
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    planner: Planner,
}

impl Workspace {
    /// Open the working file named in the config
    ///
    /// A missing file means nothing has been set up yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or decoded
    pub fn open(config: &Config) -> Result<Self> {
        let path = if config.paths.data_file.is_empty() {
            PathBuf::from(FALLBACK_DATA_FILE)
        } else {
            PathBuf::from(&config.paths.data_file)
        };
        Self::open_at(path)
    }

    /// Open a specific working file
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or decoded
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let planner = if path.exists() {
            let curriculum = import_file(&path)?;
            debug!(
                "Loaded {} courses from {}",
                curriculum.course_count(),
                path.display()
            );
            Planner::from_curriculum(curriculum)
        } else {
            debug!("No working file at {}", path.display());
            Planner::new()
        };
        Ok(Self { path, planner })
    }

    /// Path of the working file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded planner
    pub const fn planner(&self) -> &Planner {
        &self.planner
    }

    /// Mutable access for read-only commands that need the cached view
    pub fn planner_mut(&mut self) -> &mut Planner {
        &mut self.planner
    }

    /// Apply a request and write the result back
    ///
    /// # Errors
    /// Returns the transition error, or an I/O error from saving
    pub fn apply(&mut self, request: Request) -> Result<()> {
        self.planner.dispatch(request)?;
        self.save()
    }

    /// Write the current snapshot, or remove the file after a reset
    ///
    /// # Errors
    /// Returns an error if the file cannot be written or removed
    pub fn save(&self) -> Result<()> {
        if !self.planner.is_setup_complete() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self.planner.curriculum())?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Ask a y/n question on stdin; anything but `y` or `yes` is a no
pub fn confirm(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}

/// Report a failed command and exit with status 1
pub fn fail(context: &str, err: &dyn std::fmt::Display) -> ! {
    error!("{context}: {err}");
    eprintln!("✗ {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_planner::core::template::SetupTemplate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_set_up() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::open_at(dir.path().join("none.json")).unwrap();
        assert!(!workspace.planner().is_setup_complete());
    }

    #[test]
    fn test_apply_writes_and_reset_removes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("plan.json");

        let mut workspace = Workspace::open_at(path.clone()).unwrap();
        workspace
            .apply(Request::Setup {
                career_title: "Civil Engineering".to_string(),
                template: SetupTemplate::Blank,
            })
            .unwrap();
        assert!(path.exists());

        let reopened = Workspace::open_at(path.clone()).unwrap();
        assert!(reopened.planner().is_setup_complete());
        assert_eq!(
            reopened.planner().curriculum().career_title,
            "Civil Engineering"
        );

        workspace.apply(Request::Reset).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_request_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plan.json");

        let mut workspace = Workspace::open_at(path.clone()).unwrap();
        workspace
            .apply(Request::Setup {
                career_title: "Eng".to_string(),
                template: SetupTemplate::Engineering,
            })
            .unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(workspace
            .apply(Request::ToggleComplete("NOPE-1".to_string()))
            .is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }
}
