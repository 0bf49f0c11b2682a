use folio_domain::ArtworkId;

#[derive(Debug, Clone, Default)]
pub struct ListCategoriesQuery;

#[derive(Debug, Clone, Default)]
pub struct ListArtworksCommand {
    /// Filter label; `None` means `all`.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct OpenArtworkCommand {
    pub artwork_id: ArtworkId,
}

#[derive(Debug, Clone, Default)]
pub struct ShowProfileQuery;

#[derive(Debug, Clone, Default)]
pub struct FeaturedWorksQuery;

#[derive(Debug, Clone, Default)]
pub struct FooterNoticeQuery;
