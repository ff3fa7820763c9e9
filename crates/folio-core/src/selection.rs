//! Lightbox selection state machine.
//!
//! ```text
//!            activate(id)
//!   Closed ───────────────▶ Open(record)
//!     ▲                         │
//!     └──── dismiss(reason) ────┘
//! ```
//!
//! Dismissing while closed and activating while open are both no-ops.
//! The grid sits behind the overlay while a work is open, so there is no
//! tile-to-tile transition.

use crate::catalog::Catalog;
use crate::keys::DISMISS_KEY;
use crate::types::{ArtworkId, ArtworkRecord};

/// What the lightbox is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(ArtworkRecord),
}

/// Why an open lightbox was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dismissal {
    /// Click on the dimmed area outside the content panel
    Backdrop,
    /// The explicit close control
    CloseButton,
    /// The dismissal key
    EscapeKey,
}

/// Where a pointer press inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Backdrop,
    Panel,
}

/// Result of feeding one event to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Opened(ArtworkId),
    Closed(Dismissal),
    Ignored,
}

impl Transition {
    pub fn changed(&self) -> bool {
        !matches!(self, Transition::Ignored)
    }
}

/// Holds at most one selected artwork
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, Selection::Open(_))
    }

    /// The artwork currently shown, if any
    pub fn selected(&self) -> Option<&ArtworkRecord> {
        match &self.state {
            Selection::Open(record) => Some(record),
            Selection::Closed => None,
        }
    }

    /// A tile was activated.
    pub fn activate(&mut self, catalog: &Catalog, id: &ArtworkId) -> Transition {
        if let Selection::Open(current) = &self.state {
            tracing::debug!(open = %current.id, requested = %id, "Activation while open ignored");
            return Transition::Ignored;
        }

        let transition = match catalog.get(id) {
            Some(record) => {
                self.state = Selection::Open(record.clone());
                Transition::Opened(id.clone())
            }
            None => {
                tracing::warn!(%id, "Activation for artwork not in catalog");
                Transition::Ignored
            }
        };

        tracing::debug!(?transition, "Selection activate");
        transition
    }

    pub fn dismiss(&mut self, reason: Dismissal) -> Transition {
        let transition = match self.state {
            Selection::Open(_) => {
                self.state = Selection::Closed;
                Transition::Closed(reason)
            }
            Selection::Closed => Transition::Ignored,
        };

        tracing::debug!(?reason, ?transition, "Selection dismiss");
        transition
    }

    /// A click inside the overlay. Only the backdrop closes it.
    pub fn pointer(&mut self, target: PointerTarget) -> Transition {
        match target {
            PointerTarget::Backdrop => self.dismiss(Dismissal::Backdrop),
            PointerTarget::Panel => Transition::Ignored,
        }
    }

    /// What [`Self::key`] would do for `key`, without changing state.
    ///
    /// Lets a caller holding the controller behind a reactive cell skip
    /// taking a write borrow for keys that change nothing.
    pub fn key_transition(&self, key: &str) -> Transition {
        match (&self.state, key == DISMISS_KEY) {
            (Selection::Open(_), true) => Transition::Closed(Dismissal::EscapeKey),
            _ => Transition::Ignored,
        }
    }

    /// A global key press, as delivered by a [`crate::KeySource`].
    pub fn key(&mut self, key: &str) -> Transition {
        match self.key_transition(key) {
            Transition::Closed(reason) => self.dismiss(reason),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_on(id: &str) -> (Catalog, SelectionController) {
        let catalog = Catalog::builtin();
        let mut controller = SelectionController::new();
        controller.activate(&catalog, &ArtworkId::from(id));
        (catalog, controller)
    }

    #[test]
    fn test_starts_closed() {
        let controller = SelectionController::new();
        assert_eq!(controller.state(), &Selection::Closed);
        assert!(controller.selected().is_none());
    }

    #[test]
    fn test_activate_opens_record() {
        let (catalog, controller) = open_on("a2");
        let expected = catalog.get(&ArtworkId::from("a2")).unwrap();
        assert_eq!(controller.state(), &Selection::Open(expected.clone()));
    }

    #[test]
    fn test_each_dismissal_closes() {
        for reason in [Dismissal::Backdrop, Dismissal::CloseButton, Dismissal::EscapeKey] {
            let (_, mut controller) = open_on("a1");
            assert_eq!(controller.dismiss(reason), Transition::Closed(reason));
            assert!(!controller.is_open());
        }
    }

    #[test]
    fn test_dismiss_when_closed_is_noop() {
        let mut controller = SelectionController::new();
        assert_eq!(controller.dismiss(Dismissal::Backdrop), Transition::Ignored);
        assert_eq!(controller.key(DISMISS_KEY), Transition::Ignored);
        assert_eq!(controller.state(), &Selection::Closed);
    }

    #[test]
    fn test_panel_click_keeps_open() {
        let (_, mut controller) = open_on("a4");
        assert_eq!(controller.pointer(PointerTarget::Panel), Transition::Ignored);
        assert!(controller.is_open());

        assert_eq!(
            controller.pointer(PointerTarget::Backdrop),
            Transition::Closed(Dismissal::Backdrop)
        );
        assert!(!controller.is_open());
    }

    #[test]
    fn test_other_keys_ignored() {
        let (_, mut controller) = open_on("a1");
        assert_eq!(controller.key("Enter"), Transition::Ignored);
        assert_eq!(controller.key("escape"), Transition::Ignored);
        assert!(controller.is_open());
    }

    #[test]
    fn test_key_transition_leaves_state_alone() {
        let closed = SelectionController::new();
        assert_eq!(closed.key_transition(DISMISS_KEY), Transition::Ignored);
        assert_eq!(closed.key_transition("Enter"), Transition::Ignored);

        let (_, open) = open_on("a3");
        assert_eq!(open.key_transition("Tab"), Transition::Ignored);
        assert_eq!(
            open.key_transition(DISMISS_KEY),
            Transition::Closed(Dismissal::EscapeKey)
        );
        assert!(open.is_open());
    }

    #[test]
    fn test_key_matches_key_transition() {
        for key in [DISMISS_KEY, "Enter", "a"] {
            let (_, mut controller) = open_on("a1");
            let predicted = controller.key_transition(key);
            assert_eq!(controller.key(key), predicted);
            assert_eq!(controller.is_open(), !predicted.changed());
        }
    }

    #[test]
    fn test_activate_while_open_ignored() {
        let (catalog, mut controller) = open_on("a1");
        let result = controller.activate(&catalog, &ArtworkId::from("a5"));

        assert_eq!(result, Transition::Ignored);
        assert_eq!(controller.selected().unwrap().id.as_str(), "a1");
    }

    #[test]
    fn test_unknown_id_ignored() {
        let catalog = Catalog::builtin();
        let mut controller = SelectionController::new();
        let result = controller.activate(&catalog, &ArtworkId::from("nope"));

        assert!(!result.changed());
        assert!(!controller.is_open());
    }

    #[test]
    fn test_reopen_after_close() {
        let (catalog, mut controller) = open_on("a1");
        controller.dismiss(Dismissal::CloseButton);

        let result = controller.activate(&catalog, &ArtworkId::from("a6"));
        assert_eq!(result, Transition::Opened(ArtworkId::from("a6")));
        assert_eq!(controller.selected().unwrap().title, "Vermilion");
    }
}
