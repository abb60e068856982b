//! Line-oriented reader producing fixed-arity records.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use campus_core::RecordFormat;

use crate::ReaderError;

/// Lazy iterator over the records of one delimited file.
///
/// `N` is the number of fields every record must have. Each item is either
/// the `N` raw fields of a line or the error that stopped iteration. The
/// iterator is finite and not restartable; it closes the file as soon as it
/// reaches the end of input or yields an error.
pub struct DelimitedReader<const N: usize> {
    path: PathBuf,
    separator: char,
    lines: Option<Lines<BufReader<File>>>,
    next_line: usize,
}

impl<const N: usize> DelimitedReader<N> {
    /// Open `path` and, when `format.header` is set, validate its header.
    ///
    /// The header is consumed here, so a malformed header fails before any
    /// record is produced.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Io`] if the file cannot be opened,
    /// [`ReaderError::Read`] if the header line cannot be read, and
    /// [`ReaderError::MalformedHeader`] if the header does not have `N` columns.
    pub fn open(path: impl AsRef<Path>, format: RecordFormat) -> Result<Self, ReaderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| ReaderError::Io {
            path: path.clone(),
            source,
        })?;
        let mut lines = BufReader::new(file).lines();

        if format.header {
            let found = match lines.next() {
                Some(Ok(header)) => header.split(format.separator).count(),
                Some(Err(source)) => {
                    return Err(ReaderError::Read {
                        path,
                        line: 1,
                        source,
                    });
                }
                None => 0,
            };
            if found != N {
                return Err(ReaderError::MalformedHeader {
                    path,
                    expected: N,
                    found,
                });
            }
        }

        tracing::trace!(path = %path.display(), fields = N, header = format.header, "opened delimited file");

        Ok(Self {
            path,
            separator: format.separator,
            lines: Some(lines),
            next_line: format.first_record_line(),
        })
    }

    /// Path of the file being read.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the underlying file is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.lines.is_some()
    }

    fn split(&self, line: &str, line_number: usize) -> Result<[String; N], ReaderError> {
        let fields: Vec<String> = line.split(self.separator).map(str::to_string).collect();
        <[String; N]>::try_from(fields).map_err(|fields| ReaderError::MalformedRecord {
            path: self.path.clone(),
            line: line_number,
            expected: N,
            found: fields.len(),
        })
    }
}

impl<const N: usize> Iterator for DelimitedReader<N> {
    type Item = Result<[String; N], ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(line) = self.lines.as_mut()?.next() else {
            self.lines = None;
            return None;
        };

        let line_number = self.next_line;
        self.next_line += 1;

        let item = match line {
            Ok(line) => self.split(&line, line_number),
            Err(source) => Err(ReaderError::Read {
                path: self.path.clone(),
                line: line_number,
                source,
            }),
        };

        if item.is_err() {
            self.lines = None;
        }
        Some(item)
    }
}

impl<const N: usize> FusedIterator for DelimitedReader<N> {}

/// Open `path` as a delimited file of `N`-field records.
///
/// Shorthand for [`DelimitedReader::open`].
///
/// # Errors
///
/// See [`DelimitedReader::open`].
pub fn read_records<const N: usize>(
    path: impl AsRef<Path>,
    format: RecordFormat,
) -> Result<DelimitedReader<N>, ReaderError> {
    DelimitedReader::open(path, format)
}
