pub mod clock;
pub mod contact;
pub mod content;
pub mod migrations;
pub mod presenters;
pub mod sqlite;

pub use clock::SystemClock;
pub use contact::{
    AlwaysFail, AlwaysSucceed, SimulatedContactTransport, SubmissionPolicy, DEFAULT_SUBMIT_DELAY,
};
pub use content::{BuiltinContent, JsonContentFile};
pub use presenters::{
    capitalize, present_artwork_detail, present_artwork_row, present_category,
    present_created_in, present_filter, present_form_status, present_timeline_event,
};
pub use sqlite::SqlitePreferenceStore;
