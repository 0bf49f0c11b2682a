use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidArtworkId(i64),
    UnknownCategory(String),
    DuplicateArtworkId(i64),
    EmptyArtworkTitle(i64),
    MissingContactField(&'static str),
    InvalidEmail(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArtworkId(value) => {
                write!(f, "artwork id must be positive, got {value}")
            }
            Self::UnknownCategory(value) => write!(f, "unknown category: {value:?}"),
            Self::DuplicateArtworkId(value) => {
                write!(f, "artwork id {value} appears more than once in the catalog")
            }
            Self::EmptyArtworkTitle(value) => write!(f, "artwork {value} has an empty title"),
            Self::MissingContactField(name) => write!(f, "contact field {name} is required"),
            Self::InvalidEmail(value) => write!(f, "not a valid email address: {value:?}"),
        }
    }
}

impl std::error::Error for DomainError {}
