//! GEDCOM source loading
//!
//! `Reader` loads a GEDCOM source from a file or a string and exposes the
//! assembled level-0 record trees. This is used by both production code
//! and tests.

use std::fs;
use std::path::Path;

use crate::error::GedcomError;
use crate::lexing::scan_lines;
use crate::records::{build_records, Record};

/// A fully loaded GEDCOM source
#[derive(Debug, Clone)]
pub struct Reader {
    records: Vec<Record>,
}

impl Reader {
    /// Load from a file path
    ///
    /// Load failures carry the offending path so the report names the
    /// file, with the underlying IO error as the cause.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GedcomError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| GedcomError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        Self::from_string(&source)
    }

    /// Load from a string
    pub fn from_string(source: &str) -> Result<Self, GedcomError> {
        let records = build_records(scan_lines(source)?)?;
        log::debug!("loaded {} top-level records", records.len());
        Ok(Reader { records })
    }

    /// All level-0 records, in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The level-0 records with the given tag, in source order
    pub fn records0<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records.iter().filter(move |record| record.tag == tag)
    }
}
