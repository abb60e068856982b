//! DDL for the row store.

/// Students registry, one row per student.
pub const CREATE_STUDENTS: &str = "
CREATE TABLE IF NOT EXISTS students (
    cwid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    major TEXT NOT NULL
);
";

/// Instructors registry, one row per instructor.
pub const CREATE_INSTRUCTORS: &str = "
CREATE TABLE IF NOT EXISTS instructors (
    cwid TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    dept TEXT NOT NULL
);
";

/// Latest grade of each student in each course.
pub const CREATE_STUDENT_GRADES: &str = "
CREATE TABLE IF NOT EXISTS student_grades (
    student_cwid TEXT NOT NULL,
    course TEXT NOT NULL,
    grade TEXT NOT NULL,
    PRIMARY KEY (student_cwid, course)
);
";

/// Per-course student counts of each instructor.
pub const CREATE_INSTRUCTOR_COURSES: &str = "
CREATE TABLE IF NOT EXISTS instructor_courses (
    instructor_cwid TEXT NOT NULL,
    course TEXT NOT NULL,
    students BIGINT NOT NULL,
    PRIMARY KEY (instructor_cwid, course)
);
";

/// Course lists of each major; `flag` is `R` or `E`.
pub const CREATE_MAJOR_COURSES: &str = "
CREATE TABLE IF NOT EXISTS major_courses (
    major TEXT NOT NULL,
    flag TEXT NOT NULL,
    course TEXT NOT NULL,
    PRIMARY KEY (major, course)
);
CREATE INDEX IF NOT EXISTS idx_major_courses_flag ON major_courses(major, flag);
";

/// Every table, in insertion order.
pub const TABLES: [&str; 5] = [
    "students",
    "instructors",
    "student_grades",
    "instructor_courses",
    "major_courses",
];
