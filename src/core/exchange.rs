//! Curriculum file export and import
//!
//! The exchange format is the JSON form of [`Curriculum`]: a `careerTitle`
//! string and a `courses` array. Import checks that outer shape before
//! decoding any course, so a rejected file never reaches the planner state.

use crate::core::error::{ImportError, PlannerError, Result};
use crate::core::models::{Course, Curriculum};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of exported file names
pub const EXPORT_PREFIX: &str = "curriculum";

/// Slug used when the title has no alphanumeric characters
pub const DEFAULT_EXPORT_SLUG: &str = "export";

/// Serialize a curriculum as pretty-printed JSON
///
/// # Errors
/// Returns `NothingToExport` when there is no title and no course
pub fn export_json(curriculum: &Curriculum) -> Result<String> {
    if curriculum.is_empty() {
        return Err(PlannerError::NothingToExport);
    }
    Ok(serde_json::to_string_pretty(curriculum)?)
}

/// Lowercase the title and collapse every non-alphanumeric run to one hyphen
///
/// Leading and trailing hyphens are dropped. Only ASCII letters and digits
/// survive, so accented characters also become separators.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// File name for an exported curriculum (e.g., `curriculum-software-engineering.json`)
#[must_use]
pub fn export_file_name(career_title: &str) -> String {
    let slug = slugify(career_title);
    let slug = if slug.is_empty() {
        DEFAULT_EXPORT_SLUG
    } else {
        slug.as_str()
    };
    format!("{EXPORT_PREFIX}-{slug}.json")
}

/// Write the curriculum to `dir` under its export file name
///
/// # Errors
/// Returns an error if there is nothing to export or the file cannot be written
pub fn export_to_dir(curriculum: &Curriculum, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(&curriculum.career_title));
    export_to_file(curriculum, &path)?;
    Ok(path)
}

/// Write the curriculum to an explicit path, creating parent directories
///
/// # Errors
/// Returns an error if there is nothing to export or the file cannot be written
pub fn export_to_file(curriculum: &Curriculum, path: &Path) -> Result<()> {
    let json = export_json(curriculum)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;
    Ok(())
}

/// Parse curriculum JSON text
///
/// # Errors
/// - `Json` if the text is not JSON
/// - `Shape` if `careerTitle` is not a string or `courses` is not an array
/// - `Decode` if a course entry does not match the course fields
pub fn import_str(text: &str) -> std::result::Result<Curriculum, ImportError> {
    let value: Value = serde_json::from_str(text)?;

    let Value::Object(mut root) = value else {
        return Err(ImportError::Shape("expected a JSON object".to_string()));
    };

    let career_title = match root.remove("careerTitle") {
        Some(Value::String(title)) => title,
        _ => {
            return Err(ImportError::Shape(
                "'careerTitle' must be a string".to_string(),
            ))
        }
    };

    let entries = match root.remove("courses") {
        Some(Value::Array(entries)) => entries,
        _ => return Err(ImportError::Shape("'courses' must be an array".to_string())),
    };

    let courses = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<Course>(entry)
                .map_err(|e| ImportError::Decode(format!("course #{}: {e}", index + 1)))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Curriculum::new(career_title, courses))
}

/// Read and parse a curriculum file
///
/// # Errors
/// Returns `Io` if the file cannot be read, otherwise the errors of [`import_str`]
pub fn import_file(path: &Path) -> std::result::Result<Curriculum, ImportError> {
    let text = fs::read_to_string(path)?;
    import_str(&text)
}
