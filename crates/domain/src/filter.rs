use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{Category, DomainError};

pub const ALL_FILTER_LABEL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `all` first, then every category in [`Category::ALL`] order.
    pub fn display_order() -> Vec<CategoryFilter> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_FILTER_LABEL,
            Self::Only(category) => category.label(),
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(ALL_FILTER_LABEL) {
            return Ok(Self::All);
        }
        value.parse::<Category>().map(Self::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}
