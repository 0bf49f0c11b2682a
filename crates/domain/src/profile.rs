use serde::{Deserialize, Serialize};

use crate::ArtworkId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFact {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// Everything the home, about and contact pages show besides the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub name: String,
    pub tagline: String,
    pub about_intro: String,
    pub portrait: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub featured: Vec<ArtworkId>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    #[serde(default)]
    pub fun_facts: Vec<FunFact>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub studio_address: Vec<String>,
    #[serde(default)]
    pub contact_blurb: String,
}

impl ArtistProfile {
    /// Timeline newest first, ties kept in their listed order.
    pub fn timeline_newest_first(&self) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self.timeline.iter().collect();
        events.sort_by(|left, right| right.year.cmp(&left.year));
        events
    }
}
