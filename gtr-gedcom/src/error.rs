//! Error types for GEDCOM loading

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading a GEDCOM source
#[derive(Debug)]
pub enum GedcomError {
    /// IO error when reading the source file
    Io { path: PathBuf, source: io::Error },
    /// A line that does not match the `LEVEL [@XREF@] TAG [VALUE]` grammar
    MalformedLine { line: usize, content: String },
    /// A line whose level is more than one greater than its parent's
    InvalidLevel { line: usize, level: u32 },
    /// A `CONC`/`CONT` line with no record to continue
    OrphanContinuation { line: usize },
}

impl fmt::Display for GedcomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GedcomError::Io { path, .. } => {
                write!(f, "Failed to read {}", path.display())
            }
            GedcomError::MalformedLine { line, content } => {
                write!(f, "Malformed GEDCOM line {}: {:?}", line, content)
            }
            GedcomError::InvalidLevel { line, level } => {
                write!(f, "Invalid level {} on line {}: levels may grow by at most one", level, line)
            }
            GedcomError::OrphanContinuation { line } => {
                write!(f, "Continuation on line {} has no record to continue", line)
            }
        }
    }
}

impl std::error::Error for GedcomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GedcomError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
