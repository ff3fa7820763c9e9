//! Property-based tests for captions, catalogs and the selection machine
//!
//! Uses proptest to check the rules hold for arbitrary records and event
//! sequences, not just the built-in works.

use folio_core::{
    grid_caption, ArtworkId, ArtworkRecord, Catalog, Dismissal, GalleryView, LightboxView,
    Motion, PointerTarget, Selection, SelectionController, DISMISS_KEY,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short metadata values; may be empty to exercise absent-field handling
fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[a-zA-Z0-9 ×]{0,20}").expect("valid regex"))
}

fn record_strategy(id: usize) -> impl Strategy<Value = ArtworkRecord> {
    (
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9 ]{0,30}").expect("valid regex"),
        field_strategy(),
        field_strategy(),
        field_strategy(),
    )
        .prop_map(move |(title, year, medium, size)| ArtworkRecord {
            id: ArtworkId::new(format!("w{id}")),
            title,
            year,
            medium,
            size,
            image_url: format!("https://example.com/{id}.jpg"),
            alt_text: None,
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    (0..12usize)
        .prop_flat_map(|n| (0..n).map(record_strategy).collect::<Vec<_>>())
        .prop_map(|records| Catalog::new(records).expect("generated ids are unique"))
}

/// Events the page can feed to the controller
#[derive(Debug, Clone)]
enum Event {
    Tile(usize),
    Key(String),
    Pointer(PointerTarget),
    Close,
}

fn events_strategy(max: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..6usize).prop_map(Event::Tile),
            2 => Just(Event::Key(DISMISS_KEY.to_string())),
            1 => "[a-z]{1,5}".prop_map(Event::Key),
            1 => Just(Event::Pointer(PointerTarget::Backdrop)),
            1 => Just(Event::Pointer(PointerTarget::Panel)),
            1 => Just(Event::Close),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The caption never starts, ends or doubles up on the separator
    #[test]
    fn caption_has_no_stray_separator(record in record_strategy(0)) {
        let caption = grid_caption(&record);
        prop_assert!(!caption.starts_with(" · "));
        prop_assert!(!caption.ends_with(" · "));
        prop_assert!(!caption.contains(" ·  · "));

        let expected: Vec<&str> = [record.year(), record.medium()].into_iter().flatten().collect();
        prop_assert_eq!(caption, expected.join(" · "));
    }

    /// Tiles come out in catalog order, one per record
    #[test]
    fn gallery_follows_catalog_order(catalog in catalog_strategy()) {
        let gallery = GalleryView::from_catalog(&catalog, &Motion::enabled());
        prop_assert_eq!(gallery.tiles.len(), catalog.len());

        for (tile, record) in gallery.tiles.iter().zip(catalog.iter()) {
            prop_assert_eq!(&tile.id, &record.id);
            prop_assert_eq!(&tile.title, &record.title);
        }
    }

    /// Lightbox details are exactly the present fields, prefixed
    #[test]
    fn lightbox_lists_present_fields(record in record_strategy(0)) {
        let view = LightboxView::from_selection(&Selection::Open(record.clone()), &Motion::disabled())
            .expect("open selection has a view");

        let present = [record.year(), record.medium(), record.size()]
            .into_iter()
            .flatten()
            .count();
        prop_assert_eq!(view.details.len(), present);
        prop_assert!(view.details.iter().all(|d| d.starts_with("• ")));
    }

    /// Whatever happens, the controller is closed or shows a catalog record
    #[test]
    fn selection_always_references_catalog(events in events_strategy(40)) {
        let catalog = Catalog::builtin();
        let ids: Vec<ArtworkId> = catalog.iter().map(|r| r.id.clone()).collect();
        let mut controller = SelectionController::new();

        for event in events {
            let was_open = controller.is_open();
            match event {
                Event::Tile(i) => {
                    let before = controller.clone();
                    controller.activate(&catalog, &ids[i]);
                    if was_open {
                        prop_assert_eq!(&controller, &before);
                    }
                }
                Event::Key(key) => {
                    controller.key(&key);
                    if key == DISMISS_KEY {
                        prop_assert!(!controller.is_open());
                    } else {
                        prop_assert_eq!(controller.is_open(), was_open);
                    }
                }
                Event::Pointer(target) => {
                    controller.pointer(target);
                    if target == PointerTarget::Panel {
                        prop_assert_eq!(controller.is_open(), was_open);
                    }
                }
                Event::Close => {
                    controller.dismiss(Dismissal::CloseButton);
                    prop_assert!(!controller.is_open());
                }
            }

            if let Some(record) = controller.selected() {
                prop_assert_eq!(catalog.get(&record.id), Some(record));
            }
        }
    }
}
