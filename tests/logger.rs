//! Integration tests for logger behavior.

use curriculum_planner::logger::{
    init_file_logging, set_level, set_level_from_str, Level,
};
use curriculum_planner::{debug, error, info, verbose, warn};
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("DEBUG"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn levels_order_by_severity() {
    assert!(Level::Error < Level::Warn);
    assert!(Level::Warn < Level::Info);
    assert!(Level::Info < Level::Debug);
    assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs").join("cplan.log");

    assert!(init_file_logging(&path));
    error!("written to file");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[ERROR] written to file"));
}

#[cfg(not(feature = "file-logging"))]
#[test]
fn file_logging_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    assert!(!init_file_logging(&temp_dir.path().join("cplan.log")));
}
