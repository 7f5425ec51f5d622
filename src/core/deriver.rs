//! Derives the renderable curriculum structure from the flat course list
//!
//! Everything here is a pure function of its inputs: the completed set, lock
//! state per course, semester groups ordered numerically, year pairs, and the
//! per-group credit/completion aggregates.

use crate::core::models::{Course, Curriculum};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Courses sharing one semester number, ordered by code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterGroup<'a> {
    /// Semester number
    pub number: u32,
    /// Courses in presentation order
    pub courses: Vec<&'a Course>,
}

/// Up to two consecutive semester groups shown together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup<'a> {
    /// Year number (1-based)
    pub number: u32,
    /// One or two semester groups
    pub semesters: Vec<SemesterGroup<'a>>,
}

/// Credit and completion totals for a group of courses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    /// Sum of credits
    pub total_credits: u64,
    /// Non-empty and every course completed
    pub is_complete: bool,
}

/// Overall progress counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of courses
    pub total_courses: usize,
    /// Number of completed courses
    pub completed_courses: usize,
    /// Sum of all credits
    pub total_credits: u64,
    /// Sum of credits of completed courses
    pub completed_credits: u64,
}

/// Ids of all completed courses
#[must_use]
pub fn compute_completed_set(courses: &[Course]) -> HashSet<&str> {
    courses
        .iter()
        .filter(|c| c.completed)
        .map(|c| c.id.as_str())
        .collect()
}

/// Whether every prerequisite of `course` is in `completed`
///
/// Courses without prerequisites are always unlocked. Unknown ids and
/// circular chains are never satisfied.
#[must_use]
pub fn is_unlocked(course: &Course, completed: &HashSet<&str>) -> bool {
    course
        .prerequisite_ids()
        .iter()
        .all(|id| completed.contains(id.as_str()))
}

/// Order course codes the way a reader expects: case-insensitive first,
/// then by exact text so the order is total
#[must_use]
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Group courses by semester, ascending by semester number, each group sorted by code
#[must_use]
pub fn group_by_semester(courses: &[Course]) -> Vec<SemesterGroup<'_>> {
    let mut by_semester: BTreeMap<u32, Vec<&Course>> = BTreeMap::new();
    for course in courses {
        by_semester.entry(course.semester).or_default().push(course);
    }

    by_semester
        .into_iter()
        .map(|(number, mut courses)| {
            courses.sort_by(|a, b| compare_codes(&a.code, &b.code));
            SemesterGroup { number, courses }
        })
        .collect()
}

/// Pair consecutive semester groups into years
///
/// Works on positions in the sorted sequence, not on semester numbers, so
/// semesters {1, 5} end up together in year 1.
#[must_use]
pub fn group_by_year(semesters: Vec<SemesterGroup<'_>>) -> Vec<YearGroup<'_>> {
    let mut years: Vec<YearGroup<'_>> = Vec::with_capacity(semesters.len().div_ceil(2));
    for (index, semester) in semesters.into_iter().enumerate() {
        if index % 2 == 0 {
            years.push(YearGroup {
                number: u32::try_from(index / 2 + 1).unwrap_or(u32::MAX),
                semesters: Vec::with_capacity(2),
            });
        }
        if let Some(year) = years.last_mut() {
            year.semesters.push(semester);
        }
    }
    years
}

/// Total credits and completion of a group of courses
#[must_use]
pub fn aggregate(courses: &[&Course]) -> Aggregate {
    Aggregate {
        total_credits: courses.iter().map(|c| u64::from(c.credits)).sum(),
        is_complete: !courses.is_empty() && courses.iter().all(|c| c.completed),
    }
}

/// Progress counters over the whole collection
#[must_use]
pub fn progress(courses: &[Course]) -> Progress {
    courses.iter().fold(Progress::default(), |mut acc, c| {
        acc.total_courses += 1;
        acc.total_credits += u64::from(c.credits);
        if c.completed {
            acc.completed_courses += 1;
            acc.completed_credits += u64::from(c.credits);
        }
        acc
    })
}

/// A course together with its lock state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    /// The course
    pub course: Course,
    /// Prerequisites not yet satisfied
    pub locked: bool,
}

/// A rendered semester column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterView {
    /// Semester number
    pub number: u32,
    /// Cards in code order
    pub cards: Vec<CourseCard>,
    /// Credits and completion
    pub aggregate: Aggregate,
}

/// A rendered year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    /// Year number (1-based)
    pub number: u32,
    /// One or two semesters
    pub semesters: Vec<SemesterView>,
    /// Credits and completion over the year's semesters
    pub aggregate: Aggregate,
}

/// Everything a front end needs to draw the curriculum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumView {
    /// Career title
    pub career_title: String,
    /// Years in order
    pub years: Vec<YearView>,
    /// Header counters
    pub progress: Progress,
}

impl CurriculumView {
    /// Number of semester columns
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.years.iter().map(|y| y.semesters.len()).sum()
    }

    /// Find the card for a course id
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&CourseCard> {
        self.years
            .iter()
            .flat_map(|y| &y.semesters)
            .flat_map(|s| &s.cards)
            .find(|c| c.course.id == id)
    }
}

/// Build the full view of a curriculum
#[must_use]
pub fn derive(curriculum: &Curriculum) -> CurriculumView {
    let completed = compute_completed_set(&curriculum.courses);
    let semesters = group_by_semester(&curriculum.courses);

    let years = group_by_year(semesters)
        .into_iter()
        .map(|year| {
            let semesters: Vec<SemesterView> = year
                .semesters
                .iter()
                .map(|group| SemesterView {
                    number: group.number,
                    cards: group
                        .courses
                        .iter()
                        .map(|&course| CourseCard {
                            course: course.clone(),
                            locked: !is_unlocked(course, &completed),
                        })
                        .collect(),
                    aggregate: aggregate(&group.courses),
                })
                .collect();

            let aggregate = Aggregate {
                total_credits: semesters.iter().map(|s| s.aggregate.total_credits).sum(),
                is_complete: !semesters.is_empty()
                    && semesters.iter().all(|s| s.aggregate.is_complete),
            };

            YearView {
                number: year.number,
                semesters,
                aggregate,
            }
        })
        .collect();

    CurriculumView {
        career_title: curriculum.career_title.clone(),
        years,
        progress: progress(&curriculum.courses),
    }
}
