//! # gtr-tree
//!
//! Family graph and sandclock serialization for the LaTeX `genealogytree`
//! package (GTR).
//!
//! GTR stores genealogical data in database files of nested, bracketed
//! nodes. This crate turns parsed GEDCOM records (from `gtr-gedcom`) into
//! a linked family graph and renders the "sandclock" view of one focal
//! person: their full descendant subtree downward and their ancestor line
//! with sibling context upward.
//!
//! The pipeline:
//!
//! 1. [adapt] renders each record's GTR fields once, in fixed order.
//! 2. [graph] links persons and families both ways, in two strict passes.
//! 3. [generations] measures actual tree depth for the dynamic limits.
//! 4. [sandclock] walks the graph from the focal person under the
//!    configured direction budgets and sibling toggles.
//!
//! After construction the graph is read-only; serialization is a pure
//! function over it, so rendering the same graph with the same options
//! always yields byte-identical output.

pub mod adapt;
pub mod date_format;
pub mod error;
pub mod generations;
pub mod graph;
pub mod model;
pub mod sandclock;

pub use error::TreeError;
pub use generations::{count_ancestor_generations, count_descendant_generations};
pub use graph::FamilyGraph;
pub use model::{Event, Family, FamilyId, Person, PersonId};
pub use sandclock::{sandclock, SandclockOptions};
