use std::sync::Arc;

use folio_domain::{ArtistProfile, Artwork, Catalog, CategoryFilter};
use tracing::{info, warn};

use crate::{
    ApplicationError, Clock, ContentSource, FeaturedWorksQuery, FooterNoticeQuery, Gallery,
    ListArtworksCommand, ListCategoriesQuery, OpenArtworkCommand, ShowProfileQuery,
};

/// Content loaded once at startup plus the read-only use cases on top of it.
pub struct PortfolioService {
    catalog: Arc<Catalog>,
    profile: ArtistProfile,
    clock: Box<dyn Clock>,
}

impl PortfolioService {
    pub fn load(
        content: &dyn ContentSource,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ApplicationError> {
        let catalog = content.load_catalog()?;
        let profile = content.load_profile()?;
        info!(
            artworks = catalog.len(),
            artist = %profile.name,
            "portfolio content loaded"
        );
        Ok(Self {
            catalog: Arc::new(catalog),
            profile,
            clock,
        })
    }

    /// A fresh gallery session over the shared catalog.
    pub fn open_gallery(&self) -> Gallery {
        Gallery::new(Arc::clone(&self.catalog))
    }

    pub fn list_categories(&self, _query: ListCategoriesQuery) -> Vec<CategoryFilter> {
        CategoryFilter::display_order()
    }

    pub fn list_artworks(
        &self,
        command: ListArtworksCommand,
    ) -> Result<Vec<Artwork>, ApplicationError> {
        let mut gallery = self.open_gallery();
        if let Some(label) = command.category.as_deref() {
            gallery.set_filter_label(label)?;
        }
        Ok(gallery.filtered_artworks().into_iter().cloned().collect())
    }

    pub fn open_artwork(&self, command: OpenArtworkCommand) -> Result<Artwork, ApplicationError> {
        self.catalog
            .get(command.artwork_id)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "artwork not found for id={}",
                    command.artwork_id.get()
                ))
            })
    }

    pub fn show_profile(&self, _query: ShowProfileQuery) -> &ArtistProfile {
        &self.profile
    }

    pub fn featured_works(&self, _query: FeaturedWorksQuery) -> Vec<Artwork> {
        self.profile
            .featured
            .iter()
            .filter_map(|id| {
                let found = self.catalog.get(*id).cloned();
                if found.is_none() {
                    warn!(artwork_id = id.get(), "featured artwork missing from catalog");
                }
                found
            })
            .collect()
    }

    pub fn footer_notice(&self, _query: FooterNoticeQuery) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.clock.current_year(),
            self.profile.name
        )
    }
}

#[cfg(test)]
mod tests {
    use folio_domain::{ArtworkId, Category};

    use super::*;

    struct FakeContent {
        artworks: Vec<Artwork>,
        featured: Vec<i64>,
    }

    impl ContentSource for FakeContent {
        fn load_catalog(&self) -> Result<Catalog, ApplicationError> {
            Ok(Catalog::new(self.artworks.clone())?)
        }

        fn load_profile(&self) -> Result<ArtistProfile, ApplicationError> {
            Ok(ArtistProfile {
                name: "Valerie Nelson".to_string(),
                tagline: String::new(),
                about_intro: String::new(),
                portrait: "/images/profile.jpg".to_string(),
                bio: Vec::new(),
                featured: self
                    .featured
                    .iter()
                    .map(|value| ArtworkId::new(*value).expect("id"))
                    .collect(),
                timeline: Vec::new(),
                fun_facts: Vec::new(),
                social_links: Vec::new(),
                studio_address: Vec::new(),
                contact_blurb: String::new(),
            })
        }
    }

    struct FakeClock;

    impl Clock for FakeClock {
        fn current_year(&self) -> i32 {
            2026
        }
    }

    fn artwork(id: i64, category: Category) -> Artwork {
        Artwork {
            id: ArtworkId::new(id).expect("id"),
            title: format!("work {id}"),
            category,
            image: format!("/images/work{id}.jpg"),
            description: String::new(),
            tools: Vec::new(),
            year: 2023,
        }
    }

    fn service() -> PortfolioService {
        let content = FakeContent {
            artworks: vec![
                artwork(1, Category::DigitalArt),
                artwork(2, Category::Photography),
                artwork(3, Category::Painting),
            ],
            featured: vec![3, 42, 1],
        };
        PortfolioService::load(&content, Box::new(FakeClock)).expect("load")
    }

    #[test]
    fn list_artworks_applies_category_label() {
        let service = service();

        let all = service
            .list_artworks(ListArtworksCommand::default())
            .expect("list all");
        assert_eq!(all.len(), 3);

        let photos = service
            .list_artworks(ListArtworksCommand {
                category: Some("photography".to_string()),
            })
            .expect("list photography");
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].id.get(), 2);
    }

    #[test]
    fn list_artworks_rejects_unknown_label() {
        let result = service().list_artworks(ListArtworksCommand {
            category: Some("ceramics".to_string()),
        });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[test]
    fn open_missing_artwork_returns_not_found() {
        let result = service().open_artwork(OpenArtworkCommand {
            artwork_id: ArtworkId::new(99).expect("id"),
        });
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn featured_works_follow_profile_order_and_skip_missing() {
        let ids: Vec<i64> = service()
            .featured_works(FeaturedWorksQuery)
            .into_iter()
            .map(|artwork| artwork.id.get())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn footer_uses_clock_year_and_artist_name() {
        assert_eq!(
            service().footer_notice(FooterNoticeQuery),
            "© 2026 Valerie Nelson. All rights reserved."
        );
    }

    #[test]
    fn load_propagates_invalid_catalog() {
        let content = FakeContent {
            artworks: vec![
                artwork(1, Category::DigitalArt),
                artwork(1, Category::Painting),
            ],
            featured: Vec::new(),
        };
        let result = PortfolioService::load(&content, Box::new(FakeClock));
        assert!(matches!(result, Err(ApplicationError::Domain(_))));
    }
}
