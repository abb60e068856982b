//! End-to-end pipeline tests over on-disk source files.

use std::fs;
use std::path::Path;

use campus_core::RecordFormat;
use campus_core::enums::SourceKind;
use campus_engine::{EngineError, SourceSet, SourceSpec, University};
use campus_reader::ReaderError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

// ── Fixtures ────────────────────────────────────────────────────────

const STUDENTS: &str = "CWID\tName\tMajor\n1\tAvin\tCS\n2\tRandom\tFE\n";
const INSTRUCTORS: &str = "100\tProf1\tCS\n200\tProf2\tFE\n";
const GRADES: &str = "1|CS555|A|100\n1|CS111|C|100\n2|CS555|B|100\n2|CS666|A-|200\n";
const MAJORS: &str = "Major,Flag,Course\nCS,R,CS111\nCS,R,CS555\nCS,E,CS570\nFE,R,CS666\nFE,E,FE800\n";

struct Fixture {
    dir: TempDir,
    sources: SourceSet,
}

impl Fixture {
    /// Four files, each with its own layout.
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = |name: &str| dir.path().join(name);
        let sources = SourceSet {
            students: SourceSpec::new(path("students.txt"), RecordFormat::new('\t', true)),
            instructors: SourceSpec::new(path("instructors.txt"), RecordFormat::new('\t', false)),
            grades: SourceSpec::new(path("grades.txt"), RecordFormat::new('|', false)),
            majors: SourceSpec::new(path("majors.txt"), RecordFormat::new(',', true)),
        };
        let fixture = Self { dir, sources };
        fixture.write(SourceKind::Students, STUDENTS);
        fixture.write(SourceKind::Instructors, INSTRUCTORS);
        fixture.write(SourceKind::Grades, GRADES);
        fixture.write(SourceKind::Majors, MAJORS);
        fixture
    }

    fn write(&self, kind: SourceKind, contents: &str) {
        fs::write(&self.sources.get(kind).path, contents).expect("write fixture");
    }

    fn dir(&self) -> &Path {
        self.dir.path()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ── Happy path ──────────────────────────────────────────────────────

#[test]
fn end_to_end_scenario() {
    let fixture = Fixture::new();
    let uni = University::load(&fixture.sources).expect("pipeline succeeds");

    assert_eq!(uni.students().len(), 2);
    assert_eq!(uni.instructors().len(), 2);

    let s1 = uni.student("1").unwrap();
    assert_eq!(s1.grade("CS555"), Some("A"));
    assert_eq!(s1.grade("CS111"), Some("C"));
    let s2 = uni.student("2").unwrap();
    assert_eq!(s2.grade("CS555"), Some("B"));
    assert_eq!(s2.grade("CS666"), Some("A-"));

    let p100 = uni.instructor("100").unwrap();
    assert_eq!(p100.courses_taught.len(), 2);
    assert_eq!(p100.students_in("CS555"), 2);
    assert_eq!(p100.students_in("CS111"), 1);
    let p200 = uni.instructor("200").unwrap();
    assert_eq!(p200.courses_taught.len(), 1);
    assert_eq!(p200.students_in("CS666"), 1);

    assert_eq!(uni.major("CS").unwrap().required_courses.len(), 2);
    assert_eq!(uni.major("CS").unwrap().elective_courses.len(), 1);
    assert_eq!(uni.major("FE").unwrap().required_courses.len(), 1);
    assert_eq!(uni.major("FE").unwrap().elective_courses.len(), 1);

    let avin = &uni.student_table()[0];
    assert_eq!(avin.cwid, "1");
    assert_eq!(avin.completed_courses, strings(&["CS111", "CS555"]));
    assert_eq!(avin.remaining_required, None);
    assert_eq!(avin.remaining_electives, Some(strings(&["CS570"])));

    let random = &uni.student_table()[1];
    assert_eq!(random.completed_courses, strings(&["CS555", "CS666"]));
    assert_eq!(random.remaining_required, None);
    assert_eq!(random.remaining_electives, Some(strings(&["FE800"])));
}

#[test]
fn instructor_table_has_one_row_per_course() {
    let fixture = Fixture::new();
    let uni = University::load(&fixture.sources).unwrap();

    let rows: Vec<(String, String, u32)> = uni
        .instructor_table()
        .iter()
        .map(|row| (row.cwid.clone(), row.course.clone(), row.students))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("100".into(), "CS111".into(), 1),
            ("100".into(), "CS555".into(), 2),
            ("200".into(), "CS666".into(), 1),
        ]
    );
    assert_eq!(uni.grade_count(), 4);
}

#[test]
fn majors_table_lists_sorted_courses() {
    let fixture = Fixture::new();
    let uni = University::load(&fixture.sources).unwrap();

    let cs = &uni.major_table()[0];
    assert_eq!(cs.major, "CS");
    assert_eq!(cs.required, strings(&["CS111", "CS555"]));
    assert_eq!(cs.electives, strings(&["CS570"]));
    assert_eq!(uni.report().majors.len(), 2);
}

#[test]
fn student_count_matches_data_lines() {
    let fixture = Fixture::new();
    let rows: String = (0..40).map(|i| format!("{i}\tStudent {i}\tCS\n")).collect();
    fixture.write(SourceKind::Students, &format!("CWID\tName\tMajor\n{rows}"));
    fixture.write(SourceKind::Grades, "");

    let uni = University::load(&fixture.sources).unwrap();
    assert_eq!(uni.students().len(), 40);
    assert_eq!(uni.student_table().len(), 40);
}

#[test]
fn duplicate_ids_keep_the_later_record() {
    let fixture = Fixture::new();
    fixture.write(
        SourceKind::Students,
        "CWID\tName\tMajor\n1\tAvin\tCS\n2\tRandom\tFE\n1\tAvin Sharma\tFE\n",
    );

    let uni = University::load(&fixture.sources).unwrap();
    assert_eq!(uni.students().len(), 2);
    assert_eq!(uni.student("1").unwrap().name, "Avin Sharma");
    assert_eq!(uni.student("1").unwrap().major, "FE");
}

#[test]
fn repeated_grade_line_counts_twice() {
    let fixture = Fixture::new();
    fixture.write(SourceKind::Grades, "1|CS555|C|100\n1|CS555|A|100\n");

    let uni = University::load(&fixture.sources).unwrap();
    let student = uni.student("1").unwrap();
    assert_eq!(student.courses_completed.len(), 1);
    assert_eq!(student.grade("CS555"), Some("A"));
    assert_eq!(uni.instructor("100").unwrap().students_in("CS555"), 2);
}

#[test]
fn transcript_lookup() {
    let fixture = Fixture::new();
    let uni = University::load(&fixture.sources).unwrap();

    let transcript = uni.transcript("2").unwrap();
    assert_eq!(transcript.name, "Random");
    assert_eq!(transcript.grades.len(), 2);

    let missing = uni.transcript("404").unwrap_err();
    assert!(missing.to_string().contains("404"));
}

#[test]
fn in_dir_sources_with_shared_format() {
    let fixture = Fixture::new();
    fs::write(fixture.dir().join("students.txt"), "1;A;CS\n").unwrap();
    fs::write(fixture.dir().join("instructors.txt"), "100;P;CS\n").unwrap();
    fs::write(fixture.dir().join("grades.txt"), "1;CS555;A;100\n").unwrap();
    fs::write(fixture.dir().join("majors.txt"), "CS;R;CS555\n").unwrap();

    let uni = University::load(&SourceSet::in_dir(fixture.dir(), RecordFormat::new(';', false)))
        .unwrap();
    assert_eq!(uni.student_table()[0].remaining_required, None);
    assert_eq!(uni.student_table()[0].remaining_electives, None);
}

// ── Failures ────────────────────────────────────────────────────────

#[test]
fn unknown_student_halts_before_later_records() {
    let fixture = Fixture::new();
    fixture.write(
        SourceKind::Grades,
        "1|CS555|A|100\n9|CS555|A|100\n2|CS666|A-|200\n",
    );

    let mut uni = University::new();
    uni.load_students(&fixture.sources.students).unwrap();
    uni.load_instructors(&fixture.sources.instructors).unwrap();
    let err = uni.link_grades(&fixture.sources.grades).unwrap_err();

    assert!(matches!(err, EngineError::UnknownStudent { ref cwid, line: 2 } if cwid == "9"));
    // The first record stays applied, the third was never reached.
    assert_eq!(uni.instructor("100").unwrap().students_in("CS555"), 1);
    assert!(uni.instructor("200").unwrap().courses_taught.is_empty());
    assert!(uni.student("2").unwrap().courses_completed.is_empty());
}

#[rstest]
#[case::first_line("404|CS555|A|100\n", "404", 1)]
#[case::after_valid_records("1|CS555|A|100\n2|CS666|A-|200\n7|CS111|B|100\n", "7", 3)]
fn unknown_student_is_fatal(#[case] grades: &str, #[case] expected: &str, #[case] at: usize) {
    let fixture = Fixture::new();
    fixture.write(SourceKind::Grades, grades);

    let err = University::load(&fixture.sources).unwrap_err();
    assert!(
        matches!(err, EngineError::UnknownStudent { ref cwid, line } if cwid == expected && line == at),
        "got {err:?}"
    );
}

#[rstest]
#[case::first_line("1|CS555|A|999\n", "999", 1)]
#[case::after_valid_records("1|CS555|A|100\n2|CS666|A-|300\n", "300", 2)]
fn unknown_instructor_is_fatal(#[case] grades: &str, #[case] expected: &str, #[case] at: usize) {
    let fixture = Fixture::new();
    fixture.write(SourceKind::Grades, grades);

    let err = University::load(&fixture.sources).unwrap_err();
    assert!(
        matches!(err, EngineError::UnknownInstructor { ref cwid, line } if cwid == expected && line == at),
        "got {err:?}"
    );
}

#[test]
fn unknown_major_is_reported_at_table_time() {
    let fixture = Fixture::new();
    fixture.write(SourceKind::Students, "CWID\tName\tMajor\n1\tAvin\tCS\n3\tNew\tMATH\n");
    fixture.write(SourceKind::Grades, "1|CS555|A|100\n");

    let mut uni = University::new();
    uni.load_students(&fixture.sources.students).unwrap();
    uni.load_instructors(&fixture.sources.instructors).unwrap();
    uni.link_grades(&fixture.sources.grades).unwrap();
    uni.load_majors(&fixture.sources.majors).unwrap();

    let err = uni.build_tables().unwrap_err();
    match err {
        EngineError::UnknownMajor { cwid, major } => {
            assert_eq!(cwid, "3");
            assert_eq!(major, "MATH");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_grades_record_is_invalid_file_data() {
    let fixture = Fixture::new();
    fixture.write(SourceKind::Grades, "1|CS555|A|100\n1|CS111|C\n");

    let err = University::load(&fixture.sources).unwrap_err();
    match err {
        EngineError::InvalidFileData {
            kind: SourceKind::Grades,
            source: ReaderError::MalformedRecord { line, .. },
        } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_students_header_fails_before_any_record() {
    let fixture = Fixture::new();
    fixture.write(SourceKind::Students, "CWID\tName\tMajor\tExtra\n1\tAvin\tCS\n");

    let mut uni = University::new();
    let err = uni.load_students(&fixture.sources.students).unwrap_err();

    assert!(matches!(
        err,
        EngineError::InvalidFileData {
            kind: SourceKind::Students,
            source: ReaderError::MalformedHeader {
                expected: 3,
                found: 4,
                ..
            },
        }
    ));
    assert!(uni.students().is_empty());
}

#[rstest]
#[case::students_header(SourceKind::Students, "CWID\tName\tMajor\tExtra\n1\tAvin\tCS\n")]
#[case::students_record(SourceKind::Students, "CWID\tName\tMajor\n1\tAvin\n")]
#[case::instructors_record(SourceKind::Instructors, "100\tProf1\tCS\tExtra\n")]
#[case::grades_record(SourceKind::Grades, "1|CS555|A|100\n1|CS111|C\n")]
#[case::majors_header(SourceKind::Majors, "Major,Flag\nCS,R,CS111\n")]
#[case::majors_record(SourceKind::Majors, "Major,Flag,Course\nCS,R,CS111\nCS,R\n")]
fn malformed_file_names_its_kind(#[case] kind: SourceKind, #[case] contents: &str) {
    let fixture = Fixture::new();
    fixture.write(kind, contents);

    let err = University::load(&fixture.sources).unwrap_err();
    assert!(
        matches!(err, EngineError::InvalidFileData { kind: found, .. } if found == kind),
        "got {err:?}"
    );
    assert!(err.to_string().contains(kind.as_str()));
}

#[rstest]
#[case(SourceKind::Students)]
#[case(SourceKind::Instructors)]
#[case(SourceKind::Grades)]
#[case(SourceKind::Majors)]
fn missing_file_is_source_unavailable(#[case] kind: SourceKind) {
    let fixture = Fixture::new();
    fs::remove_file(&fixture.sources.get(kind).path).unwrap();

    let err = University::load(&fixture.sources).unwrap_err();
    assert!(
        matches!(err, EngineError::SourceUnavailable { kind: found, .. } if found == kind),
        "got {err:?}"
    );
}
