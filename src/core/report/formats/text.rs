//! Plain text report for the terminal

use crate::core::error::Result;
use crate::core::report::{
    completion_message, credit_percent, CreditLoad, ReportContext, ReportGenerator,
};
use std::fmt::Write;

/// Terminal grid renderer
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut out = String::new();
        let progress = ctx.progress();

        let _ = writeln!(out, "=== {} ===", ctx.title());
        let _ = writeln!(
            out,
            "Courses: {}/{}  Credits: {}/{} ({}%)",
            progress.completed_courses,
            progress.total_courses,
            progress.completed_credits,
            progress.total_credits,
            credit_percent(progress)
        );

        if ctx.view.years.is_empty() {
            let _ = writeln!(out, "\nNo courses in the curriculum yet. Start by adding one!");
            return Ok(out);
        }

        for year in &ctx.view.years {
            let _ = writeln!(out, "\nYear {}", year.number);
            for semester in &year.semesters {
                let credits = semester.aggregate.total_credits;
                let _ = writeln!(
                    out,
                    "  Semester {} ({credits} CR, {})",
                    semester.number,
                    CreditLoad::from_credits(credits).label()
                );
                if semester.aggregate.is_complete {
                    let _ = writeln!(out, "    * {}", completion_message(semester.number));
                }
                for card in &semester.cards {
                    let marker = if card.course.completed {
                        "[x]"
                    } else if card.locked {
                        "[locked]"
                    } else {
                        "[ ]"
                    };
                    let _ = writeln!(
                        out,
                        "    {marker} {} - {} ({} CR)",
                        card.course.code, card.course.name, card.course.credits
                    );
                }
            }
        }

        Ok(out)
    }
}
