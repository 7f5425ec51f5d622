//! HTML report generator
//!
//! Renders the curriculum grid as a self-contained page through the
//! `templates/curriculum.html` askama template. Values are flattened into
//! plain rows first so the template only does loops and conditionals.

use crate::core::deriver::CourseCard;
use crate::core::error::Result;
use crate::core::report::{
    card_status, completion_message, credit_percent, CreditLoad, ReportContext, ReportGenerator,
};
use askama::Template;

/// A course line in the page
struct CourseRow {
    code: String,
    name: String,
    credits: u32,
    status: &'static str,
    color: String,
    prerequisites: String,
    note_count: usize,
}

impl CourseRow {
    fn from_card(card: &CourseCard) -> Self {
        Self {
            code: card.course.code.clone(),
            name: card.course.name.clone(),
            credits: card.course.credits,
            status: card_status(card),
            color: card
                .course
                .color
                .clone()
                .unwrap_or_else(|| "default".to_string()),
            prerequisites: card.course.prerequisite_ids().join(", "),
            note_count: card.course.note_list().len(),
        }
    }
}

/// A semester column in the page
struct SemesterColumn {
    number: u32,
    credits: u64,
    load: &'static str,
    complete: bool,
    message: &'static str,
    courses: Vec<CourseRow>,
}

/// A year block in the page
struct YearBlock {
    number: u32,
    credits: u64,
    complete: bool,
    semesters: Vec<SemesterColumn>,
}

#[derive(Template)]
#[template(path = "curriculum.html")]
struct CurriculumPage<'a> {
    title: &'a str,
    completed_courses: usize,
    total_courses: usize,
    completed_credits: u64,
    total_credits: u64,
    percent: u32,
    years: Vec<YearBlock>,
}

/// HTML report generator
#[derive(Debug, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_page<'a>(ctx: &'a ReportContext) -> CurriculumPage<'a> {
        let progress = ctx.progress();
        let years = ctx
            .view
            .years
            .iter()
            .map(|year| YearBlock {
                number: year.number,
                credits: year.aggregate.total_credits,
                complete: year.aggregate.is_complete,
                semesters: year
                    .semesters
                    .iter()
                    .map(|semester| SemesterColumn {
                        number: semester.number,
                        credits: semester.aggregate.total_credits,
                        load: CreditLoad::from_credits(semester.aggregate.total_credits).label(),
                        complete: semester.aggregate.is_complete,
                        message: completion_message(semester.number),
                        courses: semester.cards.iter().map(CourseRow::from_card).collect(),
                    })
                    .collect(),
            })
            .collect();

        CurriculumPage {
            title: ctx.title(),
            completed_courses: progress.completed_courses,
            total_courses: progress.total_courses,
            completed_credits: progress.completed_credits,
            total_credits: progress.total_credits,
            percent: credit_percent(progress),
            years,
        }
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(Self::build_page(ctx).render()?)
    }
}
