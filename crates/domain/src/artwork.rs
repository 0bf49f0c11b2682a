use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ArtworkId(i64);

impl ArtworkId {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::InvalidArtworkId(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ArtworkId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArtworkId> for i64 {
    fn from(value: ArtworkId) -> Self {
        value.0
    }
}

impl Display for ArtworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Medium an artwork belongs to. The `all` pseudo-category is not a member;
/// it only exists as [`crate::CategoryFilter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    DigitalArt,
    Painting,
    Photography,
    Sculpture,
}

impl Category {
    /// Display order used by the gallery filter bar.
    pub const ALL: [Category; 4] = [
        Category::DigitalArt,
        Category::Painting,
        Category::Photography,
        Category::Sculpture,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DigitalArt => "digital art",
            Self::Painting => "painting",
            Self::Photography => "photography",
            Self::Sculpture => "sculpture",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|category| category.label() == normalized)
            .ok_or_else(|| DomainError::UnknownCategory(value.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tools: Vec<String>,
    pub year: i32,
}
