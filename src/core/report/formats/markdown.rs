//! Markdown report generator
//!
//! One section per year and one table per semester. Renders well in GitHub,
//! GitLab, and VS Code.

use crate::core::error::Result;
use crate::core::report::{
    card_status, completion_message, credit_percent, CreditLoad, ReportContext, ReportGenerator,
};
use std::fmt::Write;

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape characters that would break a table cell
    fn cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut out = String::new();
        let progress = ctx.progress();

        let _ = writeln!(out, "# {}\n", ctx.title());
        let _ = writeln!(out, "| Courses | Credits | Progress |");
        let _ = writeln!(out, "|---|---|---|");
        let _ = writeln!(
            out,
            "| {}/{} | {}/{} | {}% |",
            progress.completed_courses,
            progress.total_courses,
            progress.completed_credits,
            progress.total_credits,
            credit_percent(progress)
        );

        for year in &ctx.view.years {
            let _ = writeln!(
                out,
                "\n## Year {} ({} CR)",
                year.number, year.aggregate.total_credits
            );

            for semester in &year.semesters {
                let credits = semester.aggregate.total_credits;
                let _ = writeln!(
                    out,
                    "\n### Semester {}: {credits} CR ({})\n",
                    semester.number,
                    CreditLoad::from_credits(credits).label()
                );
                if semester.aggregate.is_complete {
                    let _ = writeln!(out, "> {}\n", completion_message(semester.number));
                }
                let _ = writeln!(out, "| Code | Course | Credits | Status | Prerequisites |");
                let _ = writeln!(out, "|---|---|---|---|---|");
                for card in &semester.cards {
                    let prereqs = card.course.prerequisite_ids().join(", ");
                    let _ = writeln!(
                        out,
                        "| {} | {} | {} | {} | {} |",
                        Self::cell(&card.course.code),
                        Self::cell(&card.course.name),
                        card.course.credits,
                        card_status(card),
                        if prereqs.is_empty() {
                            "-".to_string()
                        } else {
                            Self::cell(&prereqs)
                        }
                    );
                }
            }
        }

        Ok(out)
    }
}
