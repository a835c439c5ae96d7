//! # gtr-gedcom
//!
//! GEDCOM reader for the gtr toolchain.
//!
//! GEDCOM is the de-facto interchange format for genealogical data: a
//! line-oriented text format where each line carries a nesting level, an
//! optional `@`-delimited record id, a tag, and a free-form value. This
//! crate turns such a source into trees of [`Record`]s with the accessors
//! the tree engine consumes (`sub_tag`, `sub_tags`, `sub_tag_value`), and
//! parses date payloads into the [`DateValue`] sum type.
//!
//! The pipeline is: [lexing] scans the source into structurally valid
//! lines, [records] nests them by level and folds `CONC`/`CONT`
//! continuations, [reader] wraps loading from files or strings. Dates are
//! parsed on demand by the consumer via [`DateValue::parse`] — record
//! values stay verbatim strings here.

pub mod dates;
pub mod error;
pub mod lexing;
pub mod records;
pub mod reader;

pub use dates::{CalendarDate, DateValue};
pub use error::GedcomError;
pub use reader::Reader;
pub use records::Record;
