//! Store persistence across reopen.

use std::fs;

use campus_core::RecordFormat;
use campus_engine::{SourceSet, University};
use campus_store::CampusStore;
use pretty_assertions::assert_eq;

fn load_university(dir: &std::path::Path) -> University {
    fs::write(dir.join("students.txt"), "CWID,Name,Major\n10,Ada,MATH\n11,Bo,MATH\n").unwrap();
    fs::write(dir.join("instructors.txt"), "CWID,Name,Dept\n900,Noether,MATH\n").unwrap();
    fs::write(
        dir.join("grades.txt"),
        "Student,Course,Grade,Instructor\n10,MA101,A,900\n11,MA101,B+,900\n11,MA201,A,900\n",
    )
    .unwrap();
    fs::write(dir.join("majors.txt"), "Major,Flag,Course\nMATH,R,MA101\nMATH,E,MA201\n").unwrap();
    University::load(&SourceSet::in_dir(dir, RecordFormat::new(',', true))).unwrap()
}

#[test]
fn rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let uni = load_university(dir.path());
    let db = dir.path().join("campus.duckdb");

    {
        let mut store = CampusStore::open(&db).unwrap();
        store.replace_all(&uni).unwrap();
    }

    let store = CampusStore::open(&db).unwrap();
    let rows = store.instructor_summary().unwrap();
    assert_eq!(rows, uni.instructor_table());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].students, 2);

    let grades = store.student_grades("11").unwrap();
    assert_eq!(grades, uni.transcript("11").unwrap().grades);
}
