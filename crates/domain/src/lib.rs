mod artwork;
mod catalog;
mod contact;
mod error;
mod filter;
mod profile;
mod theme;

pub use artwork::{Artwork, ArtworkId, Category};
pub use catalog::Catalog;
pub use contact::ContactMessage;
pub use error::DomainError;
pub use filter::{CategoryFilter, ALL_FILTER_LABEL};
pub use profile::{ArtistProfile, FunFact, SocialLink, TimelineEvent};
pub use theme::ThemeMode;
