pub mod dispatch;
pub mod persist;
pub mod query_instructors;
pub mod report;
pub mod schema;
pub mod serve;
pub mod student;
