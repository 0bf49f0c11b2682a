use std::collections::HashSet;

use crate::{Artwork, ArtworkId, CategoryFilter, DomainError};

/// Ordered, immutable set of artworks. Insertion order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    pub fn new(artworks: Vec<Artwork>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(artworks.len());
        for artwork in &artworks {
            if !seen.insert(artwork.id) {
                return Err(DomainError::DuplicateArtworkId(artwork.id.get()));
            }
            if artwork.title.trim().is_empty() {
                return Err(DomainError::EmptyArtworkTitle(artwork.id.get()));
            }
        }
        Ok(Self { artworks })
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        self.artworks.iter().find(|artwork| artwork.id == id)
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.get(id).is_some()
    }

    pub fn filtered(&self, filter: CategoryFilter) -> impl Iterator<Item = &Artwork> + '_ {
        self.artworks
            .iter()
            .filter(move |artwork| filter.matches(artwork.category))
    }
}
