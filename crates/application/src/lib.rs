mod contact_form;
mod error;
mod gallery;
mod ports;
mod service;
mod settings;
mod use_cases;

pub use contact_form::{ContactField, ContactForm, FormStatus};
pub use error::ApplicationError;
pub use gallery::{Gallery, Selection};
pub use ports::{
    Clock, ContactTransport, ContentSource, PreferenceStore, SubmissionOutcome, SubmissionResult,
};
pub use service::PortfolioService;
pub use settings::{ThemeSettings, DARK_MODE_KEY};
pub use use_cases::{
    FeaturedWorksQuery, FooterNoticeQuery, ListArtworksCommand, ListCategoriesQuery,
    OpenArtworkCommand, ShowProfileQuery,
};
