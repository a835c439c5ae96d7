//! Family graph entities
//!
//! Persons and families reference each other both ways: a person is a
//! parent in any number of families and a child in at most one, a family
//! references all its members. Instead of shared ownership, both entity
//! kinds live in arenas on [`FamilyGraph`](crate::graph::FamilyGraph) and
//! reference each other through [`PersonId`] / [`FamilyId`] indices.
//! Identity comparisons (is this child the focal person?) are index
//! comparisons, never field comparisons.
//!
//! A person's GTR fields are assembled once by the record adapter as an
//! ordered `(key, value)` list and are immutable afterwards; their order
//! is the render order.

use gtr_gedcom::DateValue;

/// Index of a person in the graph's person arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub(crate) usize);

/// Index of a family in the graph's family arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FamilyId(pub(crate) usize);

/// A dated and/or located event (birth, death, marriage)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    pub date: Option<DateValue>,
    pub place: Option<String>,
}

impl Event {
    /// An event counts as present as soon as either part is set
    pub fn is_present(&self) -> bool {
        self.date.is_some() || self.place.is_some()
    }
}

/// One individual
#[derive(Debug, Clone)]
pub struct Person {
    /// External identifier, xref delimiters stripped
    pub id: String,
    /// Ordered GTR fields; insertion order is render order
    pub fields: Vec<(String, String)>,
    /// Families in which this person is a parent, in source order
    pub parent_families: Vec<FamilyId>,
    /// The family in which this person is a child, if known
    pub child_family: Option<FamilyId>,
}

impl Person {
    /// Render this person as a GTR node
    ///
    /// `node_type` is the GTR node name (`g`, `p`, or `c`); the id clause
    /// is only emitted when requested by the caller.
    pub fn to_gtr(&self, node_type: &str, include_id: bool) -> String {
        let mut parts = String::from(node_type);
        if include_id {
            parts.push_str(&format!("[id={}]", self.id));
        }
        parts.push('{');
        for (key, value) in &self.fields {
            parts.push_str(&format!("{}={},", key, value));
        }
        parts.push('}');
        parts
    }
}

/// One family: up to two parents, any number of children
#[derive(Debug, Clone)]
pub struct Family {
    /// External identifier, xref delimiters stripped
    pub id: String,
    /// Parent references in role order (husband, wife)
    pub parents: Vec<PersonId>,
    /// Child references in source order
    pub children: Vec<PersonId>,
    /// Marriage event, if any part of it is recorded
    pub marriage: Option<Event>,
}
