use folio_application::{ApplicationError, ContentSource};
use folio_domain::{
    ArtistProfile, Artwork, ArtworkId, Catalog, Category, FunFact, SocialLink, TimelineEvent,
};

/// The portfolio shipped with the binary.
#[derive(Debug, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn load_catalog(&self) -> Result<Catalog, ApplicationError> {
        Ok(Catalog::new(builtin_artworks()?)?)
    }

    fn load_profile(&self) -> Result<ArtistProfile, ApplicationError> {
        builtin_profile()
    }
}

fn artwork(
    id: i64,
    title: &str,
    category: Category,
    description: &str,
    tools: &[&str],
    year: i32,
) -> Result<Artwork, ApplicationError> {
    Ok(Artwork {
        id: ArtworkId::new(id)?,
        title: title.to_string(),
        category,
        image: format!("/images/work{id}.jpg"),
        description: description.to_string(),
        tools: tools.iter().map(|tool| tool.to_string()).collect(),
        year,
    })
}

fn builtin_artworks() -> Result<Vec<Artwork>, ApplicationError> {
    Ok(vec![
        artwork(
            1,
            "Abstract Harmony",
            Category::DigitalArt,
            "An exploration of color and form through digital medium.",
            &["Procreate", "Adobe Photoshop"],
            2023,
        )?,
        artwork(
            2,
            "Urban Reflections",
            Category::Photography,
            "Capturing the essence of city life through reflective surfaces.",
            &["Canon EOS R5", "Adobe Lightroom"],
            2023,
        )?,
        artwork(
            3,
            "Nature's Palette",
            Category::Painting,
            "A series of watercolor paintings inspired by natural landscapes.",
            &["Watercolor", "Mixed Media"],
            2023,
        )?,
    ])
}

fn timeline_event(year: i32, title: &str, description: &str) -> TimelineEvent {
    TimelineEvent {
        year,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn fun_fact(label: &str, text: &str) -> FunFact {
    FunFact {
        label: label.to_string(),
        text: text.to_string(),
    }
}

fn social_link(name: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
    }
}

pub(crate) fn builtin_profile() -> Result<ArtistProfile, ApplicationError> {
    Ok(ArtistProfile {
        name: "Valerie Nelson".to_string(),
        tagline: "An artist exploring the boundaries of color, light, and imagination"
            .to_string(),
        about_intro:
            "A passionate artist exploring the intersection of traditional and digital mediums"
                .to_string(),
        portrait: "/images/profile.jpg".to_string(),
        bio: vec![
            "As a student at the Nanyang Academy of Fine Arts, I've been fortunate to explore \
             various artistic mediums and develop my unique style. My work is heavily influenced \
             by the intersection of nature and urban life, seeking to capture the beauty in \
             everyday moments through both traditional and digital techniques."
                .to_string(),
            "I believe that art has the power to bridge cultural gaps and create meaningful \
             connections. Through my work, I aim to inspire others to see the world through \
             a different lens and appreciate the beauty that surrounds us."
                .to_string(),
        ],
        featured: vec![ArtworkId::new(1)?, ArtworkId::new(2)?, ArtworkId::new(3)?],
        timeline: vec![
            timeline_event(
                2023,
                "NAFA Arts Exhibition",
                "Featured artist at the annual NAFA Arts Exhibition.",
            ),
            timeline_event(
                2022,
                "Digital Art Workshop",
                "Led a workshop on digital art techniques for beginners.",
            ),
            timeline_event(
                2021,
                "Photography Exhibition",
                "First solo photography exhibition at the local art gallery.",
            ),
            timeline_event(
                2020,
                "NAFA Enrollment",
                "Started my journey at Nanyang Academy of Fine Arts.",
            ),
        ],
        fun_facts: vec![
            fun_fact(
                "Favorite Mediums",
                "Acrylic, Watercolor, and Digital Illustration",
            ),
            fun_fact("Inspiration", "Urban landscapes and natural patterns"),
            fun_fact("Dream Project", "A large-scale interactive art installation"),
            fun_fact(
                "Art Philosophy",
                "\"Art is the bridge between imagination and reality\"",
            ),
        ],
        social_links: vec![
            social_link("Instagram", "https://instagram.com/valerienelson"),
            social_link("LinkedIn", "https://linkedin.com/in/valerienelson"),
            social_link("Email", "mailto:valerie@example.com"),
        ],
        studio_address: vec![
            "NAFA Campus 1".to_string(),
            "80 Bencoolen Street".to_string(),
            "Singapore 189655".to_string(),
        ],
        contact_blurb: "Feel free to reach out for collaborations, inquiries, or just to say \
                        hello. I'm always excited to connect with fellow artists and art \
                        enthusiasts."
            .to_string(),
    })
}
