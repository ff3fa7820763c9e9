//! The artwork catalog.
//!
//! A catalog is built once at startup and never changes afterwards. Order
//! is display order; nothing in the crate sorts or filters it.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{FolioError, Result};
use crate::types::{ArtworkId, ArtworkRecord};

/// Immutable, ordered collection of artworks.
///
/// Cloning is cheap: clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[ArtworkRecord]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and records without a
    /// title or image.
    pub fn new(records: Vec<ArtworkRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if record.title.trim().is_empty() {
                return Err(FolioError::InvalidArtwork {
                    id: record.id.to_string(),
                    reason: "title is empty".to_string(),
                });
            }
            if record.image_url.trim().is_empty() {
                return Err(FolioError::InvalidArtwork {
                    id: record.id.to_string(),
                    reason: "image url is empty".to_string(),
                });
            }
            if !seen.insert(&record.id) {
                return Err(FolioError::DuplicateArtwork(record.id.to_string()));
            }
        }

        tracing::debug!(count = records.len(), "Catalog built");
        Ok(Self {
            records: records.into(),
        })
    }

    /// The six works shipped with the page.
    pub fn builtin() -> Self {
        Self {
            records: builtin_records().into(),
        }
    }

    pub fn get(&self, id: &ArtworkId) -> Option<&ArtworkRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtworkRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ArtworkRecord;
    type IntoIter = std::slice::Iter<'a, ArtworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn builtin_records() -> Vec<ArtworkRecord> {
    const UNSPLASH: &str = "https://images.unsplash.com";
    const PARAMS: &str = "?q=80&w=1400&auto=format&fit=crop";

    let src = |photo: &str| format!("{UNSPLASH}/{photo}{PARAMS}");

    vec![
        ArtworkRecord::new("a1", "Untitled No. 1", src("photo-1500530855697-b586d89ba3ee"))
            .with_year("2024")
            .with_medium("Oil on canvas")
            .with_size("60×80 cm")
            .with_alt("Abstract strokes in deep hues."),
        ArtworkRecord::new("a2", "Late Light", src("photo-1526318472351-c75fcf070305"))
            .with_year("2023")
            .with_medium("Acrylic on wood")
            .with_size("50×70 cm")
            .with_alt("Soft abstract light study."),
        ArtworkRecord::new("a3", "Blue Field", src("photo-1549880338-65ddcdfd017b"))
            .with_year("2022")
            .with_medium("Oil on canvas")
            .with_size("80×100 cm")
            .with_alt("Monochrome blue textures."),
        ArtworkRecord::new("a4", "Rhythm", src("photo-1526318472353-c74b59b031c2"))
            .with_year("2024")
            .with_medium("Mixed media")
            .with_size("70×70 cm")
            .with_alt("Gestural marks and rhythm."),
        ArtworkRecord::new("a5", "After Rain", src("photo-1500534314209-a25ddb2bd429"))
            .with_year("2023")
            .with_medium("Watercolor on paper")
            .with_size("42×59 cm")
            .with_alt("Soft gradients like rain."),
        ArtworkRecord::new("a6", "Vermilion", src("photo-1484244233201-29892afe6a2c"))
            .with_year("2022")
            .with_medium("Oil on canvas")
            .with_size("60×60 cm")
            .with_alt("Warm vermilion palette."),
    ]
}
