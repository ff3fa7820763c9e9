//! Site configuration.
//!
//! Everything the page shows besides the artworks: the artist's name, the
//! intro copy and the contact links. All fields default to the placeholder
//! profile, so a config file only needs the values it changes.
//!
//! ```json
//! {
//!   "profile": { "artist_name": "Ada Park", "contact_email": "ada@example.com" },
//!   "motion": false
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::motion::Motion;
use crate::types::ArtworkRecord;

/// External profile link shown in the footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Link text, e.g. `@yourhandle`
    pub label: String,
    pub url: String,
}

/// Copy and contact details for the page chrome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub artist_name: String,
    /// Shown next to the name in the header
    pub tagline: String,
    pub intro_heading: String,
    pub intro_text: String,
    pub contact_text: String,
    pub contact_email: String,
    pub social: Option<SocialLink>,
}

impl SiteProfile {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.artist_name)
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            artist_name: "Your Name".to_string(),
            tagline: "Paintings".to_string(),
            intro_heading: "Selected Works".to_string(),
            intro_text: "A concise gallery of recent paintings. Click any image to view larger."
                .to_string(),
            contact_text: "For commissions, exhibitions, or inquiries, feel free to reach out."
                .to_string(),
            contact_email: "artist@example.com".to_string(),
            social: Some(SocialLink {
                label: "@yourhandle".to_string(),
                url: "https://instagram.com/yourhandle".to_string(),
            }),
        }
    }
}

/// Top-level config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub profile: SiteProfile,
    /// Entrance and lightbox animations
    pub motion: bool,
    /// Replaces the built-in works when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artworks: Option<Vec<ArtworkRecord>>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            profile: SiteProfile::default(),
            motion: true,
            artworks: None,
        }
    }
}

impl FolioConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::info!(?path, "Loaded config");
        Ok(config)
    }

    /// Build the session catalog from the configured works, or the
    /// built-in set when none are configured.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.artworks {
            Some(records) => Catalog::new(records.clone()),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn motion(&self) -> Motion {
        Motion::from(self.motion)
    }
}
