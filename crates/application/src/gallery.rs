use std::sync::Arc;

use folio_domain::{Artwork, ArtworkId, Catalog, CategoryFilter};
use tracing::debug;

use crate::ApplicationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Closed,
    Open(ArtworkId),
}

/// Per-session view over a shared catalog: one active category filter and at
/// most one artwork open in the detail view.
#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Arc<Catalog>,
    filter: CategoryFilter,
    selection: Selection,
}

impl Gallery {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            selection: Selection::Closed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list_categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::display_order()
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            debug!(from = %self.filter, to = %filter, "gallery filter changed");
        }
        self.filter = filter;
    }

    /// Unknown labels leave the current filter in place.
    pub fn set_filter_label(&mut self, label: &str) -> Result<(), ApplicationError> {
        let filter = label
            .parse::<CategoryFilter>()
            .map_err(|error| ApplicationError::InvalidInput(error.to_string()))?;
        self.set_filter(filter);
        Ok(())
    }

    pub fn filtered_artworks(&self) -> Vec<&Artwork> {
        self.catalog.filtered(self.filter).collect()
    }

    /// Opens `id` in the detail view, replacing any previous selection.
    /// Returns `false` and keeps the current state when `id` is not in the
    /// catalog.
    pub fn select(&mut self, id: ArtworkId) -> bool {
        if !self.catalog.contains(id) {
            debug!(artwork_id = id.get(), "ignoring selection of unknown artwork");
            return false;
        }
        self.selection = Selection::Open(id);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::Closed;
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn current_selection(&self) -> Option<&Artwork> {
        match self.selection {
            Selection::Closed => None,
            Selection::Open(id) => self.catalog.get(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_domain::Category;

    use super::*;

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

    fn id(value: i64) -> ArtworkId {
        ArtworkId::new(value).expect("id")
    }

    fn scenario_gallery() -> Gallery {
        let catalog = Catalog::new(vec![
            artwork(1, Category::DigitalArt),
            artwork(2, Category::Photography),
            artwork(3, Category::Painting),
        ])
        .expect("catalog");
        Gallery::new(Arc::new(catalog))
    }

    fn mixed_gallery() -> Gallery {
        let catalog = Catalog::new(vec![
            artwork(4, Category::Sculpture),
            artwork(1, Category::Painting),
            artwork(8, Category::DigitalArt),
            artwork(2, Category::Painting),
            artwork(6, Category::Photography),
            artwork(5, Category::Painting),
        ])
        .expect("catalog");
        Gallery::new(Arc::new(catalog))
    }

    fn filtered_ids(gallery: &Gallery) -> Vec<i64> {
        gallery
            .filtered_artworks()
            .into_iter()
            .map(|artwork| artwork.id.get())
            .collect()
    }

    #[test]
    fn starts_unfiltered_and_closed() {
        let gallery = scenario_gallery();
        assert_eq!(gallery.active_filter(), CategoryFilter::All);
        assert_eq!(gallery.selection(), Selection::Closed);
        assert!(gallery.current_selection().is_none());
    }

    #[test]
    fn lists_categories_in_display_order() {
        let gallery = scenario_gallery();
        let labels: Vec<&str> = gallery
            .list_categories()
            .into_iter()
            .map(CategoryFilter::label)
            .collect();
        assert_eq!(
            labels,
            vec!["all", "digital art", "painting", "photography", "sculpture"]
        );
    }

    #[test]
    fn filter_only_returns_matching_category() {
        let mut gallery = mixed_gallery();
        for category in Category::ALL {
            gallery.set_filter(CategoryFilter::Only(category));
            assert!(gallery
                .filtered_artworks()
                .iter()
                .all(|artwork| artwork.category == category));
        }
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let mut gallery = mixed_gallery();
        gallery.set_filter(CategoryFilter::Only(Category::Painting));
        assert_eq!(filtered_ids(&gallery), vec![1, 2, 5]);

        gallery.set_filter(CategoryFilter::All);
        assert_eq!(filtered_ids(&gallery), vec![4, 1, 8, 2, 6, 5]);
    }

    #[test]
    fn setting_same_filter_twice_is_idempotent() {
        let mut gallery = mixed_gallery();
        gallery.set_filter(CategoryFilter::Only(Category::Photography));
        let first = filtered_ids(&gallery);
        gallery.set_filter(CategoryFilter::Only(Category::Photography));
        assert_eq!(filtered_ids(&gallery), first);
    }

    #[test]
    fn unknown_filter_label_keeps_previous_filter() {
        let mut gallery = scenario_gallery();
        gallery
            .set_filter_label("photography")
            .expect("known label");

        let result = gallery.set_filter_label("ceramics");

        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
        assert_eq!(
            gallery.active_filter(),
            CategoryFilter::Only(Category::Photography)
        );
    }

    #[test]
    fn painting_filter_scenario() {
        let mut gallery = scenario_gallery();
        gallery.set_filter_label("painting").expect("filter");
        assert_eq!(filtered_ids(&gallery), vec![3]);
    }

    #[test]
    fn all_filter_scenario() {
        let mut gallery = scenario_gallery();
        gallery.set_filter_label("painting").expect("filter");
        gallery.set_filter_label("all").expect("filter");
        assert_eq!(filtered_ids(&gallery), vec![1, 2, 3]);
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut gallery = scenario_gallery();
        assert!(gallery.select(id(1)));
        assert!(gallery.select(id(3)));

        assert_eq!(gallery.selection(), Selection::Open(id(3)));
        let selected = gallery.current_selection().expect("selection");
        assert_eq!(selected.id, id(3));
    }

    #[test]
    fn unknown_id_leaves_selection_unchanged() {
        let mut gallery = scenario_gallery();
        assert!(gallery.select(id(2)));
        assert!(!gallery.select(id(99)));
        assert_eq!(
            gallery.current_selection().map(|artwork| artwork.id.get()),
            Some(2)
        );

        gallery.clear_selection();
        assert!(!gallery.select(id(99)));
        assert_eq!(gallery.selection(), Selection::Closed);
    }

    #[test]
    fn clear_selection_is_idempotent() {
        let mut gallery = scenario_gallery();
        gallery.select(id(1));
        gallery.clear_selection();
        assert_eq!(gallery.selection(), Selection::Closed);
        gallery.clear_selection();
        assert_eq!(gallery.selection(), Selection::Closed);
        assert!(gallery.current_selection().is_none());
    }

    #[test]
    fn selection_survives_filter_changes() {
        let mut gallery = scenario_gallery();
        gallery.select(id(2));
        gallery.set_filter(CategoryFilter::Only(Category::Painting));
        assert_eq!(
            gallery.current_selection().map(|artwork| artwork.id.get()),
            Some(2)
        );
    }

    #[test]
    fn sessions_share_catalog_but_not_state() {
        let shared = Arc::new(
            Catalog::new(vec![
                artwork(1, Category::DigitalArt),
                artwork(2, Category::Photography),
            ])
            .expect("catalog"),
        );
        let mut first = Gallery::new(Arc::clone(&shared));
        let second = Gallery::new(Arc::clone(&shared));

        first.set_filter(CategoryFilter::Only(Category::Photography));
        first.select(id(2));

        assert_eq!(second.active_filter(), CategoryFilter::All);
        assert_eq!(second.selection(), Selection::Closed);
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
