//! Report command handler
//!
//! Renders the curriculum grid as text, Markdown, or HTML.

use crate::commands::{fail, Workspace};
use curriculum_planner::config::Config;
use curriculum_planner::core::exchange::{slugify, DEFAULT_EXPORT_SLUG, EXPORT_PREFIX};
use curriculum_planner::core::report::{ReportContext, ReportFormat};
use curriculum_planner::core::PlannerError;
use curriculum_planner::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default report file name for a career title (e.g., `curriculum-software-engineering.html`)
pub fn report_file_name(career_title: &str, format: ReportFormat) -> String {
    let slug = slugify(career_title);
    let slug = if slug.is_empty() {
        DEFAULT_EXPORT_SLUG
    } else {
        slug.as_str()
    };
    format!("{EXPORT_PREFIX}-{slug}.{}", format.extension())
}

/// Run the report command.
///
/// # Arguments
/// * `config` - Configuration containing the working file and reports directory
/// * `format_str` - Report format (text, markdown, html)
/// * `output_file` - Optional output path
pub fn run(config: &Config, format_str: &str, output_file: Option<&Path>) {
    match generate_report(config, format_str, output_file) {
        Ok(path) => {
            info!("Report written to {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    config: &Config,
    format_str: &str,
    output_file: Option<&Path>,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let mut workspace =
        Workspace::open(config).unwrap_or_else(|e| fail("Failed to open working file", &e));
    if !workspace.planner().is_setup_complete() {
        return Err(format!("✗ {}", PlannerError::NotSetUp));
    }

    let view = workspace.planner_mut().view();
    let output_path = output_file.map_or_else(
        || {
            PathBuf::from(&config.paths.reports_dir)
                .join(report_file_name(&view.career_title, format))
        },
        Path::to_path_buf,
    );

    format
        .reporter()
        .generate(&ReportContext::new(&view), &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    Ok(output_path)
}
