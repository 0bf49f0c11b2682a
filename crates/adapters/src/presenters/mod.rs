use folio_application::FormStatus;
use folio_domain::{Artwork, Category, CategoryFilter, TimelineEvent};

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Upper-cases the first letter and leaves the rest untouched.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn present_category(category: Category) -> String {
    capitalize(category.label())
}

pub fn present_filter(filter: CategoryFilter) -> String {
    capitalize(filter.label())
}

pub fn present_artwork_row(artwork: &Artwork) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        artwork.id.get(),
        present_category(artwork.category),
        artwork.year,
        artwork.title
    )
}

pub fn present_artwork_detail(artwork: &Artwork) -> String {
    let mut lines = vec![
        artwork.title.clone(),
        present_category(artwork.category),
        artwork.description.clone(),
    ];
    if !artwork.tools.is_empty() {
        lines.push(format!("Tools: {}", artwork.tools.join(", ")));
    }
    lines.push(format!("Image: {}", artwork.image));
    lines.push(present_created_in(artwork.year));
    lines.join("\n")
}

pub fn present_created_in(year: i32) -> String {
    format!("Created in {year}")
}

pub fn present_timeline_event(event: &TimelineEvent) -> String {
    format!("{}  {} - {}", event.year, event.title, event.description)
}

/// Text shown under the contact form; `None` while idle.
pub fn present_form_status(status: &FormStatus) -> Option<&'static str> {
    match status {
        FormStatus::Idle => None,
        FormStatus::Submitting { .. } => Some(SENDING_LABEL),
        FormStatus::Sent => Some(SENT_MESSAGE),
        FormStatus::Failed(_) => Some(FAILED_MESSAGE),
    }
}
