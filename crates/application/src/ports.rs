use folio_domain::{ArtistProfile, Catalog, ContactMessage};

use crate::ApplicationError;

pub trait ContentSource {
    fn load_catalog(&self) -> Result<Catalog, ApplicationError>;

    fn load_profile(&self) -> Result<ArtistProfile, ApplicationError>;
}

/// Small string key-value store for user preferences.
pub trait PreferenceStore {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub sequence: u64,
    pub result: SubmissionResult,
}

/// Asynchronous delivery of contact messages. `submit` returns immediately
/// with a sequence number; the outcome is later picked up through `poll`.
pub trait ContactTransport {
    fn submit(&self, message: ContactMessage) -> Result<u64, ApplicationError>;

    fn poll(&self) -> Result<Option<SubmissionOutcome>, ApplicationError>;

    /// Drops the outcome of every submission up to and including `sequence`.
    fn cancel(&self, sequence: u64) -> Result<(), ApplicationError>;
}

pub trait Clock {
    fn current_year(&self) -> i32;
}
