//! GEDCOM record trees
//!
//! Scanned lines are assembled into a tree of records by nesting level: a
//! line at level `n + 1` is a child of the closest preceding line at level
//! `n`. `CONC` and `CONT` lines are not records of their own; they extend
//! the value of the record they follow (`CONC` appends verbatim, `CONT`
//! appends a line break first).
//!
//! The accessors mirror the record interface the tree engine consumes:
//! `sub_tag` and `sub_tag_value` take `/`-separated tag paths (for example
//! `BIRT/DATE`), `sub_tags` lists direct children in source order.

use serde::Serialize;

use crate::error::GedcomError;
use crate::lexing::SourceLine;

/// One GEDCOM record with its nested sub-records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub level: u32,
    pub xref_id: Option<String>,
    pub tag: String,
    pub value: Option<String>,
    pub children: Vec<Record>,
}

impl Record {
    fn from_line(line: &SourceLine) -> Self {
        Record {
            level: line.level,
            xref_id: line.xref.clone(),
            tag: line.tag.clone(),
            value: line.value.clone(),
            children: Vec::new(),
        }
    }

    /// First sub-record matching a `/`-separated tag path
    pub fn sub_tag(&self, path: &str) -> Option<&Record> {
        let mut current = self;
        for tag in path.split('/') {
            current = current.children.iter().find(|child| child.tag == tag)?;
        }
        Some(current)
    }

    /// All direct children with the given tag, in source order
    pub fn sub_tags(&self, tag: &str) -> Vec<&Record> {
        self.children.iter().filter(|child| child.tag == tag).collect()
    }

    /// Value of the first sub-record matching a `/`-separated tag path
    pub fn sub_tag_value(&self, path: &str) -> Option<&str> {
        self.sub_tag(path)?.value.as_deref()
    }
}

/// Assemble scanned lines into level-0 record trees
pub fn build_records(lines: Vec<SourceLine>) -> Result<Vec<Record>, GedcomError> {
    let mut roots: Vec<Record> = Vec::new();
    // Stack of records still accepting children, one per open level.
    let mut stack: Vec<Record> = Vec::new();

    for line in &lines {
        if line.tag == "CONC" || line.tag == "CONT" {
            // Close anything deeper than the continued record first.
            close_to_level(&mut roots, &mut stack, line.level);
            let target = stack
                .last_mut()
                .ok_or(GedcomError::OrphanContinuation { line: line.number })?;
            let mut value = target.value.take().unwrap_or_default();
            if line.tag == "CONT" {
                value.push('\n');
            }
            value.push_str(line.value.as_deref().unwrap_or(""));
            target.value = Some(value);
            continue;
        }

        close_to_level(&mut roots, &mut stack, line.level);
        let expected = stack.last().map_or(0, |open| open.level + 1);
        if line.level != expected {
            return Err(GedcomError::InvalidLevel {
                line: line.number,
                level: line.level,
            });
        }
        stack.push(Record::from_line(line));
    }

    close_to_level(&mut roots, &mut stack, 0);
    Ok(roots)
}

/// Pop and attach every open record at `level` or deeper
fn close_to_level(roots: &mut Vec<Record>, stack: &mut Vec<Record>, level: u32) {
    while stack.last().map_or(false, |open| open.level >= level) {
        if let Some(finished) = stack.pop() {
            match stack.last_mut() {
                Some(parent) => parent.children.push(finished),
                None => roots.push(finished),
            }
        }
    }
}
