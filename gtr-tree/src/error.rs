//! Error types for graph construction and serialization

use std::fmt;

/// Errors that can occur while building or serializing a family graph
#[derive(Debug, Clone)]
pub enum TreeError {
    /// A person is recorded as a child in more than one family
    DuplicateChildFamily {
        person: String,
        family: String,
        existing: String,
    },
    /// A family references a person that is not in the dataset
    UnknownReference { family: String, xref: String },
    /// The requested focal person does not exist
    UnknownPerson { xref: String },
    /// The data encodes a person as their own ancestor or descendant
    AncestryCycle { person: String },
    /// A generation limit below -1
    InvalidGenerationLimit { value: i32 },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::DuplicateChildFamily {
                person,
                family,
                existing,
            } => write!(
                f,
                "Person {} is a child of family {} but already belongs to family {}",
                person, family, existing
            ),
            TreeError::UnknownReference { family, xref } => {
                write!(f, "Family {} references unknown person {}", family, xref)
            }
            TreeError::UnknownPerson { xref } => {
                write!(f, "No person with id {}", xref)
            }
            TreeError::AncestryCycle { person } => {
                write!(f, "Person {} is their own ancestor", person)
            }
            TreeError::InvalidGenerationLimit { value } => {
                write!(f, "Invalid generation limit {}: must be -1 or greater", value)
            }
        }
    }
}

impl std::error::Error for TreeError {}
