use crate::error::SiteError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Site-wide settings. Every field falls back to the shipped default, so a
/// config file only needs the keys it overrides.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Suffix for composed page titles.
    pub site_name: String,
    /// Directory the gallery images live in, relative to the site root.
    pub gallery_dir: String,
    /// How many images one gallery render shows.
    pub gallery_count: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Eden's Library".to_string(),
            gallery_dir: "Occali".to_string(),
            gallery_count: 6,
        }
    }
}

impl SiteConfig {
    pub fn from_toml(text: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let text = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
