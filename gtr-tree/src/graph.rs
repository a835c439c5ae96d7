//! Family graph construction
//!
//! The graph is built in two strict passes: pass 1 creates every person
//! from the `INDI` records and indexes them by xref, pass 2 creates every
//! family from the `FAM` records, resolves its member references against
//! the index, and links both directions. Pass 2 depends on pass 1's
//! complete index, so the passes never interleave. After linking, the
//! graph is read-only.

use std::collections::HashMap;

use gtr_gedcom::{Reader, Record};

use crate::adapt::{family_from_record, person_from_record, strip_xref};
use crate::error::TreeError;
use crate::model::{Family, FamilyId, Person, PersonId};

/// The loaded, linked family graph
#[derive(Debug, Clone)]
pub struct FamilyGraph {
    persons: Vec<Person>,
    families: Vec<Family>,
    by_xref: HashMap<String, PersonId>,
}

impl FamilyGraph {
    /// Build the graph from a loaded GEDCOM source
    pub fn from_reader(reader: &Reader) -> Result<Self, TreeError> {
        let indis: Vec<&Record> = reader.records0("INDI").collect();
        let fams: Vec<&Record> = reader.records0("FAM").collect();
        Self::from_records(&indis, &fams)
    }

    /// Build the graph from individual and family records
    pub fn from_records(indis: &[&Record], fams: &[&Record]) -> Result<Self, TreeError> {
        let mut persons = Vec::new();
        let mut by_xref = HashMap::new();

        // Pass 1: create all persons and index them by xref.
        for record in indis {
            let Some(xref) = record.xref_id.as_deref() else {
                log::warn!("Skipping INDI record without an xref id");
                continue;
            };
            let person = person_from_record(record, xref);
            by_xref.insert(person.id.clone(), PersonId(persons.len()));
            persons.push(person);
        }

        // Pass 2: create all families and link them into the persons.
        let mut families: Vec<Family> = Vec::new();
        for record in fams {
            let Some(xref) = record.xref_id.as_deref() else {
                log::warn!("Skipping FAM record without an xref id");
                continue;
            };
            let spec = family_from_record(record, xref);
            let family_id = FamilyId(families.len());

            let resolve = |token: &String| -> Result<PersonId, TreeError> {
                by_xref
                    .get(&strip_xref(token))
                    .copied()
                    .ok_or_else(|| TreeError::UnknownReference {
                        family: spec.id.clone(),
                        xref: token.clone(),
                    })
            };
            let parents = spec
                .parent_xrefs
                .iter()
                .map(resolve)
                .collect::<Result<Vec<_>, _>>()?;
            let children = spec
                .child_xrefs
                .iter()
                .map(resolve)
                .collect::<Result<Vec<_>, _>>()?;

            for &parent in &parents {
                persons[parent.0].parent_families.push(family_id);
            }
            for &child in &children {
                let person = &mut persons[child.0];
                if let Some(existing) = person.child_family {
                    return Err(TreeError::DuplicateChildFamily {
                        person: person.id.clone(),
                        family: spec.id.clone(),
                        existing: families[existing.0].id.clone(),
                    });
                }
                person.child_family = Some(family_id);
            }

            families.push(Family {
                id: spec.id,
                parents,
                children,
                marriage: spec.marriage,
            });
        }

        log::debug!(
            "built family graph: {} persons, {} families",
            persons.len(),
            families.len()
        );
        Ok(FamilyGraph {
            persons,
            families,
            by_xref,
        })
    }

    pub fn person(&self, id: PersonId) -> &Person {
        &self.persons[id.0]
    }

    pub fn family(&self, id: FamilyId) -> &Family {
        &self.families[id.0]
    }

    /// Look up a person by xref id, with or without the `@` delimiters
    ///
    /// Failing here is distinct from a load failure: the dataset is fine,
    /// the requested focal person just is not in it.
    pub fn person_by_xref(&self, xref: &str) -> Result<PersonId, TreeError> {
        self.by_xref
            .get(&strip_xref(xref))
            .copied()
            .ok_or_else(|| TreeError::UnknownPerson {
                xref: xref.to_string(),
            })
    }

    /// The family in which a person is a parent, if any
    ///
    /// More than one parent family is unsupported; the first one (in
    /// source order) is used and the degradation is logged.
    pub fn parent_family_of(&self, person: PersonId) -> Option<FamilyId> {
        let families = &self.person(person).parent_families;
        if families.len() > 1 {
            log::warn!(
                "Person {} has {} parent families; using the first",
                self.person(person).id,
                families.len()
            );
        }
        families.first().copied()
    }
}
