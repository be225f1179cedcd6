use crate::capability::ArtistCapabilities;
use crate::error::{InkgateError, Result};
use crate::paths;
use crate::types::CapabilityField;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub capabilities: ArtistCapabilities,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artist {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            slug: slug.into(),
            name: name.into(),
            capabilities: ArtistCapabilities::unrestricted(),
            created_at: now,
            updated_at: now,
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn create(root: &Path, slug: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let slug = slug.into();
        paths::validate_slug(&slug)?;

        let path = paths::artist_path(root, &slug);
        if path.exists() {
            return Err(InkgateError::ArtistExists(slug));
        }

        let artist = Self::new(slug, name);
        artist.save(root)?;
        Ok(artist)
    }

    pub fn load(root: &Path, slug: &str) -> Result<Self> {
        let path = paths::artist_path(root, slug);
        if !path.exists() {
            return Err(InkgateError::ArtistNotFound(slug.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let artist: Artist = serde_yaml::from_str(&data)?;
        Ok(artist)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::artist_path(root, &self.slug);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::artists_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut artists = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(&path)?;
                let artist: Artist = serde_yaml::from_str(&data)?;
                artists.push(artist);
            }
        }
        artists.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(artists)
    }

    // ---------------------------------------------------------------------------
    // Capability updates
    // ---------------------------------------------------------------------------

    pub fn set_capability(&mut self, field: CapabilityField, value: Option<bool>) {
        self.capabilities.set(field, value);
        self.updated_at = Utc::now();
    }

    pub fn set_capabilities(&mut self, capabilities: ArtistCapabilities) {
        self.capabilities = capabilities;
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn artist_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut artist = Artist::create(dir.path(), "sam-rivera", "Sam Rivera").unwrap();
        artist.set_capability(CapabilityField::ColorWork, Some(false));
        artist.save(dir.path()).unwrap();

        let loaded = Artist::load(dir.path(), "sam-rivera").unwrap();
        assert_eq!(loaded.name, "Sam Rivera");
        assert_eq!(loaded.capabilities.accepts_color_work, Some(false));
    }

    #[test]
    fn create_rejects_duplicate() {
        let dir = TempDir::new().unwrap();
        Artist::create(dir.path(), "sam", "Sam").unwrap();
        assert!(matches!(
            Artist::create(dir.path(), "sam", "Sam Again"),
            Err(InkgateError::ArtistExists(_))
        ));
    }

    #[test]
    fn create_rejects_bad_slug() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Artist::create(dir.path(), "Sam Rivera", "Sam"),
            Err(InkgateError::InvalidSlug(_))
        ));
    }

    #[test]
    fn load_missing_artist() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Artist::load(dir.path(), "nobody"),
            Err(InkgateError::ArtistNotFound(_))
        ));
    }

    #[test]
    fn list_sorted_by_slug() {
        let dir = TempDir::new().unwrap();
        Artist::create(dir.path(), "zoe", "Zoe").unwrap();
        Artist::create(dir.path(), "ana", "Ana").unwrap();
        let artists = Artist::list(dir.path()).unwrap();
        let slugs: Vec<&str> = artists.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, ["ana", "zoe"]);
    }

    #[test]
    fn list_empty_when_no_dir() {
        let dir = TempDir::new().unwrap();
        assert!(Artist::list(dir.path()).unwrap().is_empty());
    }
}
