//! # campus-reader
//!
//! Lazy reader for separator-delimited text files.
//!
//! Each file is read as a sequence of fixed-arity records (`[String; N]`).
//! The reader checks arity only; interpreting field contents is left to the
//! caller. An optional header line is validated when the file is opened.
//!
//! ```no_run
//! use campus_core::RecordFormat;
//! use campus_reader::read_records;
//!
//! for record in read_records::<3>("students.txt", RecordFormat::new('\t', true))? {
//!     let [cwid, name, major] = record?;
//!     println!("{cwid} {name} {major}");
//! }
//! # Ok::<(), campus_reader::ReaderError>(())
//! ```

mod error;
mod reader;

pub use error::ReaderError;
pub use reader::{DelimitedReader, read_records};
