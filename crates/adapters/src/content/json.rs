use std::cell::OnceCell;
use std::fs;
use std::path::PathBuf;

use folio_application::{ApplicationError, ContentSource};
use folio_domain::{ArtistProfile, Artwork, Catalog};
use serde::Deserialize;
use tracing::debug;

use super::builtin::builtin_profile;

#[derive(Debug, Clone, Deserialize)]
struct ContentDocument {
    artworks: Vec<Artwork>,
    #[serde(default)]
    profile: Option<ArtistProfile>,
}

/// Portfolio content read from a JSON file. A document without a `profile`
/// section uses the built-in profile.
///
/// The file is read and parsed once; catalog and profile always come from
/// the same snapshot.
#[derive(Debug, Clone)]
pub struct JsonContentFile {
    path: PathBuf,
    document: OnceCell<ContentDocument>,
}

impl JsonContentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: OnceCell::new(),
        }
    }

    fn document(&self) -> Result<&ContentDocument, ApplicationError> {
        if let Some(document) = self.document.get() {
            return Ok(document);
        }

        let raw = fs::read_to_string(&self.path).map_err(|error| {
            ApplicationError::Io(format!("{}: {error}", self.path.display()))
        })?;
        let document: ContentDocument = serde_json::from_str(&raw).map_err(|error| {
            ApplicationError::Decode(format!("{}: {error}", self.path.display()))
        })?;
        debug!(
            path = %self.path.display(),
            artworks = document.artworks.len(),
            "read content file"
        );
        Ok(self.document.get_or_init(|| document))
    }
}

impl ContentSource for JsonContentFile {
    fn load_catalog(&self) -> Result<Catalog, ApplicationError> {
        let document = self.document()?;
        Ok(Catalog::new(document.artworks.clone())?)
    }

    fn load_profile(&self) -> Result<ArtistProfile, ApplicationError> {
        match &self.document()?.profile {
            Some(profile) => Ok(profile.clone()),
            None => builtin_profile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::{Category, DomainError};
    use tempfile::TempDir;

    fn write(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("content.json");
        fs::write(&path, body).expect("write content");
        path
    }

    #[test]
    fn loads_artworks_and_falls_back_to_builtin_profile() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            r#"{
                "artworks": [
                    {"id": 4, "title": "Stone", "category": "sculpture",
                     "image": "/images/stone.jpg", "description": "Granite.",
                     "tools": ["Chisel"], "year": 2024},
                    {"id": 2, "title": "Street", "category": "Photography",
                     "image": "/images/street.jpg", "description": "Night.",
                     "year": 2022}
                ]
            }"#,
        );
        let source = JsonContentFile::new(path);

        let catalog = source.load_catalog().expect("catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.artworks()[0].category, Category::Sculpture);
        assert!(catalog.artworks()[1].tools.is_empty());

        let profile = source.load_profile().expect("profile");
        assert_eq!(profile.name, "Valerie Nelson");
    }

    #[test]
    fn unknown_category_is_a_decode_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            r#"{"artworks": [{"id": 1, "title": "x", "category": "ceramics",
                "image": "", "description": "", "year": 2020}]}"#,
        );

        let result = JsonContentFile::new(path).load_catalog();
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            r#"{"artworks": [
                {"id": 1, "title": "a", "category": "painting", "image": "", "description": "", "year": 2020},
                {"id": 1, "title": "b", "category": "painting", "image": "", "description": "", "year": 2021}
            ]}"#,
        );

        let result = JsonContentFile::new(path).load_catalog();
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::DuplicateArtworkId(1)))
        ));
    }

    #[test]
    fn catalog_and_profile_come_from_one_read() {
        let dir = TempDir::new().expect("tempdir");
        let document = |artist: &str| {
            format!(
                r#"{{"artworks": [{{"id": 1, "title": "a", "category": "painting",
                    "image": "", "description": "", "year": 2020}}],
                  "profile": {{"name": "{artist}", "tagline": "", "about_intro": "",
                    "portrait": "", "bio": [], "featured": [1], "timeline": [],
                    "fun_facts": [], "social_links": [], "studio_address": [],
                    "contact_blurb": ""}}}}"#
            )
        };
        let path = write(&dir, &document("Ada Stone"));
        let source = JsonContentFile::new(path.clone());

        assert_eq!(source.load_catalog().expect("catalog").len(), 1);
        fs::write(&path, document("Someone Else")).expect("rewrite content");

        let profile = source.load_profile().expect("profile");
        assert_eq!(profile.name, "Ada Stone");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let result = JsonContentFile::new(dir.path().join("absent.json")).load_catalog();
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
