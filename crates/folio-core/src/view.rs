//! View models for the page.
//!
//! These are plain values the Dioxus components render one-to-one, so
//! every rule about what text appears where lives here and is testable
//! without a webview.

use crate::catalog::Catalog;
use crate::motion::Motion;
use crate::selection::Selection;
use crate::types::{ArtworkId, ArtworkRecord};

/// Joins year and medium on a tile
pub const CAPTION_SEPARATOR: &str = " · ";

/// Prefixes each metadata field after the title in the lightbox
pub const DETAIL_PREFIX: &str = "• ";

/// Tile caption: present fields of year and medium joined by
/// [`CAPTION_SEPARATOR`]; empty when both are absent.
pub fn grid_caption(record: &ArtworkRecord) -> String {
    [record.year(), record.medium()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(CAPTION_SEPARATOR)
}

/// Lightbox metadata after the title, each present field prefixed
pub fn detail_line(record: &ArtworkRecord) -> Vec<String> {
    [record.year(), record.medium(), record.size()]
        .into_iter()
        .flatten()
        .map(|field| format!("{DETAIL_PREFIX}{field}"))
        .collect()
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub id: ArtworkId,
    pub title: String,
    pub image_url: String,
    pub alt: String,
    /// Empty when the record has neither year nor medium
    pub caption: String,
    pub motion_class: Option<&'static str>,
    pub motion_style: Option<String>,
}

impl TileView {
    fn new(index: usize, record: &ArtworkRecord, motion: &Motion) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            image_url: record.image_url.clone(),
            alt: record.alt().to_string(),
            caption: grid_caption(record),
            motion_class: motion.tile_class(),
            motion_style: motion.tile_style(index),
        }
    }
}

/// The whole grid, one tile per catalog record in catalog order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub tiles: Vec<TileView>,
}

impl GalleryView {
    pub fn from_catalog(catalog: &Catalog, motion: &Motion) -> Self {
        let tiles = catalog
            .iter()
            .enumerate()
            .map(|(index, record)| TileView::new(index, record, motion))
            .collect();
        Self { tiles }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Contents of the open lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub title: String,
    pub image_url: String,
    pub alt: String,
    /// Already prefixed with [`DETAIL_PREFIX`]
    pub details: Vec<String>,
    pub overlay_class: Option<&'static str>,
    pub panel_class: Option<&'static str>,
}

impl LightboxView {
    /// `None` while the lightbox is closed
    pub fn from_selection(selection: &Selection, motion: &Motion) -> Option<Self> {
        match selection {
            Selection::Closed => None,
            Selection::Open(record) => Some(Self {
                title: record.title.clone(),
                image_url: record.image_url.clone(),
                alt: record.alt().to_string(),
                details: detail_line(record),
                overlay_class: motion.overlay_class(),
                panel_class: motion.panel_class(),
            }),
        }
    }

    /// The caption line as plain text, e.g. `Rhythm • 2024 • Mixed media`
    pub fn caption_text(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(self.details.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_caption_year_and_medium() {
        let art = ArtworkRecord::new("a", "T", "t.jpg")
            .with_year("2024")
            .with_medium("Oil on canvas");
        assert_eq!(grid_caption(&art), "2024 · Oil on canvas");
    }

    #[test]
    fn test_grid_caption_year_only() {
        let art = ArtworkRecord::new("a", "T", "t.jpg").with_year("2023");
        assert_eq!(grid_caption(&art), "2023");
    }

    #[test]
    fn test_grid_caption_medium_only() {
        let art = ArtworkRecord::new("a", "T", "t.jpg").with_medium("Ink");
        assert_eq!(grid_caption(&art), "Ink");
    }

    #[test]
    fn test_grid_caption_neither() {
        let art = ArtworkRecord::new("a", "T", "t.jpg").with_size("10×10 cm");
        assert_eq!(grid_caption(&art), "");
    }

    #[test]
    fn test_detail_line_skips_absent() {
        let art = ArtworkRecord::new("a", "T", "t.jpg")
            .with_year("2022")
            .with_size("60×60 cm");
        assert_eq!(detail_line(&art), vec!["• 2022", "• 60×60 cm"]);
    }

    #[test]
    fn test_gallery_matches_catalog() {
        let catalog = Catalog::builtin();
        let gallery = GalleryView::from_catalog(&catalog, &Motion::enabled());

        assert_eq!(gallery.tiles.len(), catalog.len());
        for (tile, record) in gallery.tiles.iter().zip(catalog.iter()) {
            assert_eq!(tile.id, record.id);
            assert_eq!(tile.title, record.title);
        }
        assert_eq!(gallery.tiles[0].caption, "2024 · Oil on canvas");
        assert_eq!(gallery.tiles[0].alt, "Abstract strokes in deep hues.");
    }

    #[test]
    fn test_empty_catalog_gives_empty_gallery() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(GalleryView::from_catalog(&catalog, &Motion::enabled()).is_empty());
        assert!(!GalleryView::from_catalog(&Catalog::builtin(), &Motion::enabled()).is_empty());
    }

    #[test]
    fn test_lightbox_closed_is_none() {
        assert!(LightboxView::from_selection(&Selection::Closed, &Motion::enabled()).is_none());
    }

    #[test]
    fn test_lightbox_caption_text() {
        let catalog = Catalog::builtin();
        let record = catalog.get(&ArtworkId::from("a4")).unwrap().clone();
        let view = LightboxView::from_selection(&Selection::Open(record), &Motion::disabled())
            .unwrap();

        assert_eq!(view.caption_text(), "Rhythm • 2024 • Mixed media • 70×70 cm");
        assert_eq!(view.overlay_class, None);
    }

    #[test]
    fn test_lightbox_title_only() {
        let record = ArtworkRecord::new("z", "Sketch", "s.jpg");
        let view = LightboxView::from_selection(&Selection::Open(record), &Motion::enabled())
            .unwrap();

        assert!(view.details.is_empty());
        assert_eq!(view.caption_text(), "Sketch");
        assert_eq!(view.alt, "Sketch");
    }
}
