//! Generation counting
//!
//! Computes how many generations of ancestors or descendants are actually
//! reachable from a person. Only the dynamic generation-limit policy needs
//! these numbers; the serializer itself never calls them.
//!
//! The graph is acyclic for well-formed data (a person cannot be their own
//! ancestor given the single-child-family invariant), but flat records can
//! still encode a cycle across families, so both walks keep the current
//! recursion path and fail on a revisit instead of recursing forever.

use crate::error::TreeError;
use crate::graph::FamilyGraph;
use crate::model::PersonId;

/// Number of ancestor generations reachable from a person
///
/// 0 when the person has no child family. A family with no resolvable
/// parents contributes depth 0, not -1: the base case value is -1 and the
/// result is `max(-1, deepest) + 1`.
pub fn count_ancestor_generations(
    graph: &FamilyGraph,
    person: PersonId,
) -> Result<i32, TreeError> {
    ancestors(graph, person, &mut Vec::new())
}

/// Number of descendant generations reachable from a person
///
/// Symmetric to [`count_ancestor_generations`], recursing over the
/// children of every family in which the person is a parent.
pub fn count_descendant_generations(
    graph: &FamilyGraph,
    person: PersonId,
) -> Result<i32, TreeError> {
    descendants(graph, person, &mut Vec::new())
}

fn ancestors(
    graph: &FamilyGraph,
    person: PersonId,
    path: &mut Vec<PersonId>,
) -> Result<i32, TreeError> {
    if path.contains(&person) {
        return Err(TreeError::AncestryCycle {
            person: graph.person(person).id.clone(),
        });
    }
    let Some(child_family) = graph.person(person).child_family else {
        return Ok(0);
    };
    path.push(person);
    let mut deepest = -1;
    for &parent in &graph.family(child_family).parents {
        deepest = deepest.max(ancestors(graph, parent, path)?);
    }
    path.pop();
    Ok(deepest + 1)
}

fn descendants(
    graph: &FamilyGraph,
    person: PersonId,
    path: &mut Vec<PersonId>,
) -> Result<i32, TreeError> {
    if path.contains(&person) {
        return Err(TreeError::AncestryCycle {
            person: graph.person(person).id.clone(),
        });
    }
    if graph.person(person).parent_families.is_empty() {
        return Ok(0);
    }
    path.push(person);
    let mut deepest = -1;
    for &family in &graph.person(person).parent_families {
        for &child in &graph.family(family).children {
            deepest = deepest.max(descendants(graph, child, path)?);
        }
    }
    path.pop();
    Ok(deepest + 1)
}
