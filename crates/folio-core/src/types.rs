//! Core types for Folio

use serde::{Deserialize, Serialize};

/// Stable identifier of an artwork within its catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(pub String);

impl ArtworkId {
    /// Create an id from anything string-like
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One piece of work shown in the gallery.
///
/// Optional metadata that is present but empty is treated as absent by
/// the accessors, so `Some("")` never produces a stray separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Full-resolution image, also used for the thumbnail
    #[serde(alias = "src")]
    pub image_url: String,
    #[serde(default, alias = "alt", skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl ArtworkRecord {
    /// Create a record with only the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: ArtworkId::new(id),
            title: title.into(),
            year: None,
            medium: None,
            size: None,
            image_url: image_url.into(),
            alt_text: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt_text = Some(alt.into());
        self
    }

    pub fn year(&self) -> Option<&str> {
        present(&self.year)
    }

    pub fn medium(&self) -> Option<&str> {
        present(&self.medium)
    }

    pub fn size(&self) -> Option<&str> {
        present(&self.size)
    }

    /// Alt text for the image, falling back to the title
    pub fn alt(&self) -> &str {
        present(&self.alt_text).unwrap_or(&self.title)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_falls_back_to_title() {
        let art = ArtworkRecord::new("a1", "Untitled No. 1", "https://example.com/a1.jpg");
        assert_eq!(art.alt(), "Untitled No. 1");

        let art = art.with_alt("Abstract strokes in deep hues.");
        assert_eq!(art.alt(), "Abstract strokes in deep hues.");
    }

    #[test]
    fn test_empty_optional_fields_are_absent() {
        let mut art = ArtworkRecord::new("a1", "Rhythm", "r.jpg");
        art.year = Some(String::new());
        art.alt_text = Some(String::new());

        assert_eq!(art.year(), None);
        assert_eq!(art.alt(), "Rhythm");
    }

    #[test]
    fn test_deserialize_accepts_short_names() {
        let json = r#"{"id":"a9","title":"Dusk","src":"d.jpg","alt":"Dark sky"}"#;
        let art: ArtworkRecord = serde_json::from_str(json).unwrap();

        assert_eq!(art.id, ArtworkId::from("a9"));
        assert_eq!(art.image_url, "d.jpg");
        assert_eq!(art.alt(), "Dark sky");
        assert_eq!(art.medium(), None);
    }

    #[test]
    fn test_artwork_id_display() {
        assert_eq!(ArtworkId::new("a3").to_string(), "a3");
    }
}
