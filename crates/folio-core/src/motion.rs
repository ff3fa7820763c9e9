//! Cosmetic motion.
//!
//! Animation is layered on top of rendering as CSS classes and inline
//! styles. Nothing in the selection flow reads from here, and a disabled
//! [`Motion`] yields no classes at all.

use std::time::Duration;

/// Delay added per tile so the grid fades in left to right
const TILE_STAGGER: Duration = Duration::from_millis(60);

/// Stagger stops growing after this many tiles
const MAX_STAGGERED_TILES: usize = 12;

/// Whether to decorate the page with animations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    enabled: bool,
}

impl Motion {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fade/slide-in class for a grid tile
    pub fn tile_class(&self) -> Option<&'static str> {
        self.enabled.then_some("motion-rise")
    }

    /// Inline `animation-delay` for the tile at `index`
    pub fn tile_style(&self, index: usize) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let delay = TILE_STAGGER * index.min(MAX_STAGGERED_TILES) as u32;
        Some(format!("animation-delay: {}ms;", delay.as_millis()))
    }

    pub fn overlay_class(&self) -> Option<&'static str> {
        self.enabled.then_some("motion-fade")
    }

    pub fn panel_class(&self) -> Option<&'static str> {
        self.enabled.then_some("motion-zoom")
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::enabled()
    }
}

impl From<bool> for Motion {
    fn from(enabled: bool) -> Self {
        Self { enabled }
    }
}
