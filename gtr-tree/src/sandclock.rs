//! Sandclock serialization
//!
//! genealogytree only supports trees that grow in one direction, with one
//! exception: the sandclock format, which shows a single person's
//! ancestors (upward) and descendants (downward) in one composite tree.
//! This module walks the family graph from a focal person and produces
//! the nested GTR notation for that shape.
//!
//! The walk is budgeted per direction. A budget of -1 means unlimited, 0
//! renders the current person as a leaf even if deeper data exists, and a
//! positive budget expands exactly that many generations. Crossing a
//! generation decrements the budget, floored at -1 so unlimited stays
//! unlimited.
//!
//! Sibling handling collapses below the first ancestor level: whether the
//! focal person's siblings appear is a separate toggle from whether the
//! ancestors' siblings do, but above the first level only the ancestor
//! toggle applies. Siblings are only ever listed, never expanded.

use crate::adapt::event_field;
use crate::error::TreeError;
use crate::generations::{count_ancestor_generations, count_descendant_generations};
use crate::graph::FamilyGraph;
use crate::model::{Family, PersonId};

/// Options for one sandclock rendering
#[derive(Debug, Clone)]
pub struct SandclockOptions {
    /// List the focal person's siblings
    pub include_siblings: bool,
    /// List siblings at ancestor levels beyond the first
    pub include_ancestor_siblings: bool,
    /// Ancestor generation budget; -1 is unlimited
    pub max_ancestor_generations: i32,
    /// Descendant generation budget; -1 is unlimited
    pub max_descendant_generations: i32,
    /// Shift unused budget from one direction to the other before walking
    pub dynamic_generation_limits: bool,
}

impl Default for SandclockOptions {
    fn default() -> Self {
        SandclockOptions {
            include_siblings: true,
            include_ancestor_siblings: true,
            max_ancestor_generations: -1,
            max_descendant_generations: -1,
            dynamic_generation_limits: false,
        }
    }
}

impl SandclockOptions {
    fn validate(&self) -> Result<(), TreeError> {
        for value in [self.max_ancestor_generations, self.max_descendant_generations] {
            if value < -1 {
                return Err(TreeError::InvalidGenerationLimit { value });
            }
        }
        Ok(())
    }
}

/// Render the sandclock view of a focal person
pub fn sandclock(
    graph: &FamilyGraph,
    focal: PersonId,
    options: &SandclockOptions,
) -> Result<String, TreeError> {
    options.validate()?;
    let (ancestor_limit, descendant_limit) = if options.dynamic_generation_limits {
        rebalance_limits(graph, focal, options)?
    } else {
        (
            options.max_ancestor_generations,
            options.max_descendant_generations,
        )
    };

    let mut out = String::from("sandclock");
    if let Some(child_family) = graph.person(focal).child_family {
        out.push_str(&format!("[{}]", family_options(graph.family(child_family))));
    }
    out.push('{');
    out.push_str(&child_node(graph, focal, descendant_limit));
    out.push_str(&parent_node_body(
        graph,
        focal,
        options.include_siblings,
        options.include_ancestor_siblings,
        ancestor_limit,
    ));
    out.push('}');
    Ok(out)
}

/// Shift unused generation budget towards the direction that needs it
///
/// Runs once, before the walk. If exactly one direction's actual depth
/// exceeds its limit while the other direction has slack, the slack moves
/// over; in every other case the limits stay as configured.
fn rebalance_limits(
    graph: &FamilyGraph,
    focal: PersonId,
    options: &SandclockOptions,
) -> Result<(i32, i32), TreeError> {
    let ancestor_actual = count_ancestor_generations(graph, focal)?;
    let descendant_actual = count_descendant_generations(graph, focal)?;
    let mut ancestor_limit = options.max_ancestor_generations;
    let mut descendant_limit = options.max_descendant_generations;

    let ancestors_over = exceeds(ancestor_actual, ancestor_limit);
    let descendants_over = exceeds(descendant_actual, descendant_limit);
    if ancestors_over && !descendants_over && descendant_limit != -1 {
        let slack = descendant_limit - descendant_actual;
        if slack > 0 {
            ancestor_limit += slack;
            log::debug!("shifted {} generations to the ancestor limit", slack);
        }
    } else if descendants_over && !ancestors_over && ancestor_limit != -1 {
        let slack = ancestor_limit - ancestor_actual;
        if slack > 0 {
            descendant_limit += slack;
            log::debug!("shifted {} generations to the descendant limit", slack);
        }
    }
    Ok((ancestor_limit, descendant_limit))
}

fn exceeds(actual: i32, limit: i32) -> bool {
    limit != -1 && actual > limit
}

/// One generation deeper: decrement, but unlimited stays unlimited
fn next_budget(budget: i32) -> i32 {
    (budget - 1).max(-1)
}

/// Render a family's bracketed option clause
fn family_options(family: &Family) -> String {
    let mut options = format!("id={}", family.id);
    if let Some(marriage) = &family.marriage {
        let (key, value) = event_field("marriage", marriage);
        options.push_str(&format!(",family database={{{}={}}}", key, value));
    }
    options
}

/// Render a person and their descendants
fn child_node(graph: &FamilyGraph, person: PersonId, budget: i32) -> String {
    let family_id = match graph.parent_family_of(person) {
        Some(family_id) if budget != 0 => family_id,
        _ => return graph.person(person).to_gtr("c", true),
    };
    let family = graph.family(family_id);
    let mut out = format!("child[{}]{{", family_options(family));
    out.push_str(&graph.person(person).to_gtr("g", true));
    for &parent in &family.parents {
        if parent != person {
            out.push_str(&graph.person(parent).to_gtr("p", true));
        }
    }
    for &child in &family.children {
        out.push_str(&child_node(graph, child, next_budget(budget)));
    }
    out.push('}');
    out
}

/// Render a person and their ancestors
fn parent_node(
    graph: &FamilyGraph,
    person: PersonId,
    include_siblings: bool,
    include_ancestor_siblings: bool,
    budget: i32,
) -> String {
    let family_id = match graph.person(person).child_family {
        Some(family_id) if budget != 0 => family_id,
        _ => return graph.person(person).to_gtr("p", true),
    };
    let family = graph.family(family_id);
    let mut out = format!("parent[{}]{{", family_options(family));
    out.push_str(&graph.person(person).to_gtr("g", true));
    out.push_str(&parent_node_body(
        graph,
        person,
        include_siblings,
        include_ancestor_siblings,
        next_budget(budget),
    ));
    out.push('}');
    out
}

/// Render a person's parents and, optionally, their siblings
///
/// Deeper ancestor levels receive the ancestor-sibling flag for both
/// toggles: the distinction between "this person's siblings" and "their
/// ancestors' siblings" only exists at the first level.
fn parent_node_body(
    graph: &FamilyGraph,
    person: PersonId,
    include_siblings: bool,
    include_ancestor_siblings: bool,
    budget: i32,
) -> String {
    let family_id = match graph.person(person).child_family {
        Some(family_id) if budget != 0 => family_id,
        _ => return String::new(),
    };
    let family = graph.family(family_id);
    let mut out = String::new();
    for &parent in &family.parents {
        out.push_str(&parent_node(
            graph,
            parent,
            include_ancestor_siblings,
            include_ancestor_siblings,
            budget,
        ));
    }
    if include_siblings {
        for &child in &family.children {
            if child != person {
                out.push_str(&graph.person(child).to_gtr("c", true));
            }
        }
    }
    out
}
