//! CLI argument definitions for `cplan`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use curriculum_planner::config::ConfigOverrides;
use curriculum_planner::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Course color choices offered by the CLI
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    /// No color tag
    Default,
    /// Light blue
    Sky,
    /// Pink
    Rose,
    /// Green
    Emerald,
    /// Yellow
    Amber,
    /// Purple
    Violet,
}

impl ColorArg {
    /// Stored color tag; `default` stores nothing
    pub fn tag(self) -> Option<String> {
        let name = match self {
            Self::Default => return None,
            Self::Sky => "sky",
            Self::Rose => "rose",
            Self::Emerald => "emerald",
            Self::Amber => "amber",
            Self::Violet => "violet",
        };
        Some(name.to_string())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum NotesSubcommand {
    /// List the notes of a course.
    List,
    /// Add a note to a course.
    Add {
        /// Note text
        #[arg(value_name = "TEXT", num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a note by id.
    Delete {
        /// Note id as shown by `notes list`
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a new curriculum.
    ///
    /// Uses the built-in ten-semester engineering curriculum unless --blank is given.
    Init {
        /// Career title (e.g., "Software Engineering")
        #[arg(value_name = "TITLE")]
        title: String,

        /// Start with no courses
        #[arg(long)]
        blank: bool,

        /// Overwrite an existing curriculum
        #[arg(long)]
        force: bool,
    },
    /// Show the curriculum grid by year and semester.
    Show,
    /// Show completed courses and credits.
    Progress,
    /// Add a course.
    Add {
        /// Course code, also used as the course id
        #[arg(long)]
        code: String,
        /// Course name
        #[arg(long)]
        name: String,
        /// Credit hours
        #[arg(long)]
        credits: u32,
        /// Semester number (1-based)
        #[arg(long)]
        semester: u32,
        /// Prerequisite course id (repeatable)
        #[arg(long = "prereq", value_name = "ID")]
        prerequisites: Vec<String>,
        /// Display color
        #[arg(long, value_enum)]
        color: Option<ColorArg>,
    },
    /// Edit a course; omitted fields keep their current value.
    Edit {
        /// Id of the course to edit
        #[arg(value_name = "ID")]
        id: String,
        /// New course code
        #[arg(long)]
        code: Option<String>,
        /// New course name
        #[arg(long)]
        name: Option<String>,
        /// New credit hours
        #[arg(long)]
        credits: Option<u32>,
        /// New semester number
        #[arg(long)]
        semester: Option<u32>,
        /// Replace prerequisites with these ids (repeatable)
        #[arg(long = "prereq", value_name = "ID", conflicts_with = "clear_prereqs")]
        prerequisites: Vec<String>,
        /// Remove all prerequisites
        #[arg(long)]
        clear_prereqs: bool,
        /// New display color
        #[arg(long, value_enum)]
        color: Option<ColorArg>,
    },
    /// Mark a course completed, or not completed if it already is.
    Toggle {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Rename the career.
    Title {
        /// New career title
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Manage the notes of a course.
    Notes {
        /// Course id
        #[arg(value_name = "ID")]
        id: String,
        #[command(subcommand)]
        subcommand: NotesSubcommand,
    },
    /// Replace the curriculum with one from a JSON file.
    Import {
        /// Path to the curriculum JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Write the curriculum to a JSON file.
    Export {
        /// Output path (defaults to `curriculum-<title>.json` in the export directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Render the curriculum grid to a file.
    Report {
        /// Report format: text, markdown (md), or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Clear the curriculum and start over (requires confirmation).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cplan",
    about = "Plan a degree curriculum by semester and track prerequisites",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config working curriculum file
    #[arg(long = "config-data-file", value_name = "FILE")]
    pub config_data_file: Option<PathBuf>,

    /// Override config working curriculum file (short form)
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Override config export directory
    #[arg(long = "config-export-dir", value_name = "DIR")]
    pub config_export_dir: Option<PathBuf>,

    /// Override config export directory (short form)
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-file`) take precedence over long-form
    /// flags (e.g., `--config-data-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            data_file: path_string(self.data_file.as_ref().or(self.config_data_file.as_ref())),
            export_dir: path_string(
                self.export_dir
                    .as_ref()
                    .or(self.config_export_dir.as_ref()),
            ),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
        }
    }
}
