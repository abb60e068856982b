//! The three summary tables as titled rows of text cells.

use campus_core::report::{
    InstructorSummary, MajorSummary, StudentSummary, StudentTranscript, UniversityReport,
};

use crate::cli::ReportSection;

/// A titled table of text cells, shared by the text and HTML renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitledTable {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

const STUDENT_HEADERS: [&str; 6] = [
    "CWID",
    "Name",
    "Major",
    "Completed Courses",
    "Remaining Required",
    "Remaining Electives",
];
const INSTRUCTOR_HEADERS: [&str; 5] = ["CWID", "Name", "Dept", "Course", "Students"];
const MAJOR_HEADERS: [&str; 3] = ["Dept", "Required", "Electives"];

#[must_use]
pub fn student_table(rows: &[StudentSummary]) -> TitledTable {
    TitledTable {
        title: "Student Summary".to_string(),
        headers: STUDENT_HEADERS.to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    row.cwid.clone(),
                    row.name.clone(),
                    row.major.clone(),
                    list_cell(&row.completed_courses),
                    optional_list_cell(row.remaining_required.as_deref()),
                    optional_list_cell(row.remaining_electives.as_deref()),
                ]
            })
            .collect(),
    }
}

#[must_use]
pub fn instructor_table(rows: &[InstructorSummary]) -> TitledTable {
    TitledTable {
        title: "Instructor Summary".to_string(),
        headers: INSTRUCTOR_HEADERS.to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    row.cwid.clone(),
                    row.name.clone(),
                    row.department.clone(),
                    row.course.clone(),
                    row.students.to_string(),
                ]
            })
            .collect(),
    }
}

#[must_use]
pub fn major_table(rows: &[MajorSummary]) -> TitledTable {
    TitledTable {
        title: "Majors Summary".to_string(),
        headers: MAJOR_HEADERS.to_vec(),
        rows: rows
            .iter()
            .map(|row| {
                vec![
                    row.major.clone(),
                    list_cell(&row.required),
                    list_cell(&row.electives),
                ]
            })
            .collect(),
    }
}

/// The requested tables in display order: students, instructors, majors.
#[must_use]
pub fn report_tables(report: &UniversityReport, only: Option<ReportSection>) -> Vec<TitledTable> {
    let wanted = |section| only.is_none_or(|only| only == section);
    let mut tables = Vec::with_capacity(3);
    if wanted(ReportSection::Students) {
        tables.push(student_table(&report.students));
    }
    if wanted(ReportSection::Instructors) {
        tables.push(instructor_table(&report.instructors));
    }
    if wanted(ReportSection::Majors) {
        tables.push(major_table(&report.majors));
    }
    tables
}

/// A student's grades, titled with the student's identity.
#[must_use]
pub fn transcript_table(transcript: &StudentTranscript) -> TitledTable {
    TitledTable {
        title: format!(
            "{} {} ({})",
            transcript.cwid, transcript.name, transcript.major
        ),
        headers: vec!["Course", "Grade"],
        rows: transcript
            .grades
            .iter()
            .map(|g| vec![g.course.clone(), g.grade.clone()])
            .collect(),
    }
}

fn list_cell(courses: &[String]) -> String {
    format!("[{}]", courses.join(", "))
}

fn optional_list_cell(courses: Option<&[String]>) -> String {
    courses.map_or_else(|| "None".to_string(), list_cell)
}
