//! Report generation for the curriculum grid
//!
//! This module renders a [`CurriculumView`] as a terminal grid, a Markdown
//! document, or a self-contained HTML page. All formats show the same
//! information: years, semester columns with credit totals and load badges,
//! course lock/completion state, and a message for each finished semester.

pub mod formats;

use crate::core::deriver::{CourseCard, CurriculumView, Progress};
use crate::core::error::Result;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Semester credit load used for the badge next to each semester header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditLoad {
    /// Under 17 credits
    Light,
    /// 17 to 20 credits
    Moderate,
    /// 21 credits or more
    Heavy,
}

impl CreditLoad {
    /// Classify a semester's total credits
    #[must_use]
    pub const fn from_credits(credits: u64) -> Self {
        if credits >= 21 {
            Self::Heavy
        } else if credits >= 17 {
            Self::Moderate
        } else {
            Self::Light
        }
    }

    /// Short label for text output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        }
    }
}

/// Message shown under a semester once all its courses are completed
#[must_use]
pub const fn completion_message(semester: u32) -> &'static str {
    match semester {
        1 => "Great start! The first challenge is behind you.",
        2 => "Going strong! The foundation is solid, keep it up!",
        3 => "Unstoppable! The goal keeps getting closer.",
        4 => "Halfway there! You have proven yourself, don't stop now!",
        5 => "You did it! That knowledge is yours now. Congratulations!",
        6 => "An expert in the making! Every step makes you stronger.",
        7 => "Almost an engineer! The world is waiting for your talent.",
        8 => "The summit is in sight! What a journey!",
        9 => "Mastery in progress! Your dedication is inspiring.",
        10 => "LEGEND! You have completed the journey. Congratulations, engineer!",
        _ => "Congratulations on completing the semester!",
    }
}

/// Percentage of credits completed, rounded down
#[must_use]
pub fn credit_percent(progress: &Progress) -> u32 {
    if progress.total_credits == 0 {
        return 0;
    }
    let percent =
        u128::from(progress.completed_credits) * 100 / u128::from(progress.total_credits);
    u32::try_from(percent).unwrap_or(100)
}

/// Status word for a course card
#[must_use]
pub const fn card_status(card: &CourseCard) -> &'static str {
    if card.course.completed {
        "completed"
    } else if card.locked {
        "locked"
    } else {
        "available"
    }
}

/// Data context for report generation
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Derived curriculum view
    pub view: &'a CurriculumView,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(view: &'a CurriculumView) -> Self {
        Self { view }
    }

    /// Career title, or a placeholder when empty
    #[must_use]
    pub fn title(&self) -> &str {
        if self.view.career_title.is_empty() {
            "Untitled curriculum"
        } else {
            &self.view.career_title
        }
    }

    /// Header counters
    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.view.progress
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    #[test]
    fn test_credit_load_thresholds() {
        assert_eq!(CreditLoad::from_credits(16), CreditLoad::Light);
        assert_eq!(CreditLoad::from_credits(17), CreditLoad::Moderate);
        assert_eq!(CreditLoad::from_credits(20), CreditLoad::Moderate);
        assert_eq!(CreditLoad::from_credits(21), CreditLoad::Heavy);
    }

    #[test]
    fn test_completion_message_fallback() {
        assert!(completion_message(1).starts_with("Great start"));
        assert_eq!(
            completion_message(11),
            "Congratulations on completing the semester!"
        );
    }

    #[test]
    fn test_credit_percent() {
        let mut p = Progress::default();
        assert_eq!(credit_percent(&p), 0);
        p.total_credits = 18;
        p.completed_credits = 9;
        assert_eq!(credit_percent(&p), 50);
    }

    #[test]
    fn test_credit_percent_with_huge_totals() {
        let p = Progress {
            total_courses: 3,
            completed_courses: 1,
            total_credits: u64::from(u32::MAX) * 2,
            completed_credits: u64::from(u32::MAX),
        };
        assert_eq!(credit_percent(&p), 50);

        let all = Progress {
            completed_credits: u64::MAX,
            total_credits: u64::MAX,
            ..Progress::default()
        };
        assert_eq!(credit_percent(&all), 100);
        assert_eq!(CreditLoad::from_credits(u64::MAX), CreditLoad::Heavy);
    }

    #[test]
    fn test_card_status() {
        let card = CourseCard {
            course: Course::new("A", "A", 3, 1),
            locked: true,
        };
        assert_eq!(card_status(&card), "locked");

        let card = CourseCard {
            course: Course::new("A", "A", 3, 1).completed(),
            locked: true,
        };
        assert_eq!(card_status(&card), "completed");
    }
}
