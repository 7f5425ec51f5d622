//! Built-in curriculum offered by the setup flow

use crate::core::models::{Course, Curriculum};

/// Which starting point the setup flow uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupTemplate {
    /// Ten-semester engineering curriculum
    #[default]
    Engineering,
    /// No courses
    Blank,
}

/// (code, name, credits, semester, prerequisites)
type Row = (&'static str, &'static str, u32, u32, &'static [&'static str]);

const ENGINEERING_COURSES: &[Row] = &[
    ("CI-101", "Calculus I", 4, 1, &[]),
    ("CI-102", "Linear Algebra", 4, 1, &[]),
    ("CI-103", "Introduction to Programming", 5, 1, &[]),
    ("FG-101", "Communication and Language", 3, 1, &[]),
    ("FG-102", "Study Methods", 2, 1, &[]),
    ("CI-201", "Calculus II", 4, 2, &["CI-101"]),
    ("CI-202", "Physics I", 4, 2, &["CI-101"]),
    ("CI-203", "Data Structures", 5, 2, &["CI-103"]),
    ("CI-204", "General Chemistry", 3, 2, &[]),
    ("FG-201", "National Reality", 3, 2, &[]),
    ("CI-301", "Calculus III", 4, 3, &["CI-201"]),
    ("CI-302", "Physics II", 4, 3, &["CI-202"]),
    ("CI-303", "Algorithms and Complexity", 5, 3, &["CI-203"]),
    ("CI-304", "Electric Circuits", 4, 3, &["CI-202"]),
    ("FG-301", "Professional Ethics", 3, 3, &[]),
    ("CI-401", "Differential Equations", 4, 4, &["CI-301"]),
    ("CI-402", "Object-Oriented Programming", 5, 4, &["CI-203"]),
    ("CI-403", "Digital Systems", 4, 4, &["CI-304"]),
    ("CI-404", "Probability and Statistics", 4, 4, &["CI-201"]),
    ("FG-401", "Entrepreneurship", 3, 4, &[]),
    ("CI-501", "Databases", 5, 5, &["CI-402"]),
    ("CI-502", "Computer Networks", 4, 5, &["CI-402"]),
    ("CI-503", "Numerical Analysis", 4, 5, &["CI-401"]),
    ("CI-504", "Computer Architecture", 4, 5, &["CI-403"]),
    ("FG-501", "Economics for Engineers", 3, 5, &[]),
    ("CI-601", "Operating Systems", 5, 6, &["CI-504"]),
    ("CI-602", "Software Engineering I", 4, 6, &["CI-501"]),
    ("CI-603", "Analog and Digital Electronics", 4, 6, &["CI-403"]),
    ("CI-604", "Operations Research", 3, 6, &["CI-404"]),
    ("CI-701", "Software Engineering II", 4, 7, &["CI-602"]),
    ("CI-702", "Artificial Intelligence", 4, 7, &["CI-303", "CI-404"]),
    ("CI-703", "Compilers", 4, 7, &["CI-601"]),
    ("CI-704", "Control Systems", 4, 7, &["CI-603"]),
    ("CI-801", "Information Security", 4, 8, &["CI-502"]),
    ("CI-802", "Distributed Systems", 4, 8, &["CI-601"]),
    ("CI-803", "Project Formulation and Evaluation", 3, 8, &["FG-501"]),
    ("CI-804", "Professional Elective I", 3, 8, &[]),
    ("CI-901", "Capstone Project I", 6, 9, &["CI-701", "CI-803"]),
    ("CI-902", "Software Project Management", 3, 9, &["CI-701"]),
    ("CI-903", "Professional Elective II", 3, 9, &[]),
    ("FG-901", "Computing Law", 2, 9, &["FG-301"]),
    ("CI-1001", "Capstone Project II", 8, 10, &["CI-901"]),
    ("CI-1002", "Professional Internship", 8, 10, &["CI-901"]),
];

/// Courses of the engineering template, none completed
#[must_use]
pub fn engineering_courses() -> Vec<Course> {
    ENGINEERING_COURSES
        .iter()
        .map(|&(code, name, credits, semester, prereqs)| {
            let course = Course::new(code, name, credits, semester);
            if prereqs.is_empty() {
                course
            } else {
                course.with_prerequisites(prereqs)
            }
        })
        .collect()
}

/// The engineering template under the given title
#[must_use]
pub fn engineering_template(career_title: String) -> Curriculum {
    Curriculum::new(career_title, engineering_courses())
}

/// Build the starting curriculum for a setup choice
#[must_use]
pub fn build(career_title: String, template: SetupTemplate) -> Curriculum {
    match template {
        SetupTemplate::Engineering => engineering_template(career_title),
        SetupTemplate::Blank => Curriculum::new(career_title, Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deriver::{group_by_semester, group_by_year};
    use std::collections::HashSet;

    #[test]
    fn test_template_shape() {
        let courses = engineering_courses();
        assert_eq!(courses.len(), 43);

        let semesters = group_by_semester(&courses);
        assert_eq!(semesters.len(), 10);
        assert_eq!(group_by_year(semesters).len(), 5);
    }

    #[test]
    fn test_template_ids_unique() {
        let courses = engineering_courses();
        let ids: HashSet<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), courses.len());
    }

    #[test]
    fn test_template_prerequisites_resolve() {
        let curriculum = engineering_template("Eng".to_string());
        for course in &curriculum.courses {
            for id in course.prerequisite_ids() {
                assert!(
                    curriculum.get_course(id).is_some(),
                    "{} lists unknown prerequisite {id}",
                    course.id
                );
            }
        }
    }

    #[test]
    fn test_blank_template() {
        let curriculum = build("Law".to_string(), SetupTemplate::Blank);
        assert_eq!(curriculum.career_title, "Law");
        assert!(curriculum.courses.is_empty());
    }
}
