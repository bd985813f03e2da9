//! # Flat File Student Repository
//!
//! Reads and writes the roster data file.
//!
//! ## File Format
//!
//! One student per line, fields joined by `|` in a fixed order:
//!
//! ```text
//! roll_number|name|email|course|marks
//! 101|Asha Rao|asha@example.com|CompSci|91.5
//! ```
//!
//! There is no header, no quoting and no escaping. A `|` inside a field value
//! produces a line with the wrong number of fields, which is reported as
//! corrupt data on the next read.
//!
//! ## Features
//!
//! - Missing file reads as "nothing stored yet" rather than an error
//! - Whitespace around every field is trimmed on read
//! - Atomic file writes with temp files

use csv::{Position, QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::backend::domain::error::{RosterError, RosterResult};
use crate::backend::domain::models::student::StudentRecord;
use shared::format_marks;

const DELIMITER: u8 = b'|';
const FIELD_COUNT: usize = 5;

/// Repository for a single roster data file
#[derive(Debug, Clone)]
pub struct StudentRepository {
    path: PathBuf,
}

impl StudentRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the file.
    ///
    /// Returns `Ok(None)` when the file does not exist. Any line that cannot be
    /// turned into a record fails the whole read with `CorruptData`.
    pub fn read_all(&self) -> RosterResult<Option<Vec<StudentRecord>>> {
        if !self.path.exists() {
            debug!("Data file {:?} does not exist, nothing to read", self.path);
            return Ok(None);
        }

        let contents = fs::read(&self.path).map_err(|e| RosterError::io(&self.path, e))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(contents.as_slice());

        let mut students = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                let line = line_number(&contents, e.position());
                self.map_csv_error(e, line)
            })?;
            let line = line_number(&contents, record.position());
            students.push(self.parse_record(&record, line)?);
        }

        self.warn_on_duplicate_rolls(&students);
        info!("Read {} records from {:?}", students.len(), self.path);
        Ok(Some(students))
    }

    /// Replace the file contents with `students`, in order.
    ///
    /// Data is written to a temp file next to the target and renamed over it,
    /// so a failed write leaves the previous file in place.
    pub fn write_all(&self, students: &[StudentRecord]) -> RosterResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| RosterError::io(parent, e))?;
                info!("Created data directory: {:?}", parent);
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_to(&temp_path, students) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(RosterError::io(&self.path, e));
        }

        info!("Wrote {} records to {:?}", students.len(), self.path);
        Ok(())
    }

    /// `students.txt` -> `students.txt.tmp`, never the target itself
    fn temp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn write_to(&self, temp_path: &Path, students: &[StudentRecord]) -> RosterResult<()> {
        let file = File::create(temp_path).map_err(|e| RosterError::io(temp_path, e))?;
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(BufWriter::new(file));

        for student in students {
            writer
                .write_record([
                    student.roll_number().to_string(),
                    student.name().to_string(),
                    student.email().to_string(),
                    student.course().to_string(),
                    format_marks(student.marks()),
                ])
                .map_err(|e| self.map_csv_error(e, 0))?;
        }
        writer.flush().map_err(|e| RosterError::io(temp_path, e))?;
        Ok(())
    }

    fn parse_record(&self, record: &StringRecord, line: u64) -> RosterResult<StudentRecord> {
        let corrupt = |reason: String| RosterError::CorruptData {
            path: self.path.clone(),
            line,
            reason,
        };

        if record.len() != FIELD_COUNT {
            return Err(corrupt(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                record.len()
            )));
        }

        let roll_number = record[0]
            .parse::<i32>()
            .map_err(|_| corrupt(format!("invalid roll number '{}'", &record[0])))?;
        let marks = record[4]
            .parse::<f64>()
            .map_err(|_| corrupt(format!("invalid marks '{}'", &record[4])))?;

        Ok(StudentRecord::new(roll_number, &record[1], &record[2], &record[3], marks))
    }

    fn map_csv_error(&self, err: csv::Error, line: u64) -> RosterError {
        let reason = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => RosterError::io(&self.path, source),
            _ => RosterError::CorruptData {
                path: self.path.clone(),
                line,
                reason,
            },
        }
    }

    // Duplicate roll numbers are only rejected by `RecordStore::add`; a
    // hand-edited file can still carry them, so just make them visible.
    fn warn_on_duplicate_rolls(&self, students: &[StudentRecord]) {
        let mut seen = HashSet::new();
        for student in students {
            if !seen.insert(student.roll_number()) {
                warn!(
                    "Duplicate roll number {} in {:?}",
                    student.roll_number(),
                    self.path
                );
            }
        }
    }
}

/// 1-based line of the record starting at `position`.
///
/// The csv reader skips blank lines without counting them, so its own line
/// numbers drift. A record's position may also sit before the blank lines
/// that precede it; step over those to the record's first byte, then count
/// newlines.
fn line_number(contents: &[u8], position: Option<&Position>) -> u64 {
    let Some(position) = position else {
        return 0;
    };
    let mut start = usize::try_from(position.byte())
        .unwrap_or(usize::MAX)
        .min(contents.len());
    while start < contents.len() && matches!(contents[start], b'\r' | b'\n') {
        start += 1;
    }
    contents[..start].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}
