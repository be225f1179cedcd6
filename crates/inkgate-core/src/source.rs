use crate::artist::Artist;
use crate::capability::ArtistCapabilities;
use crate::config::Config;
use crate::error::{InkgateError, Result};
use crate::question::Question;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Source traits
// ---------------------------------------------------------------------------

/// Where the gate gets its question set. Injected at gate start so the
/// evaluator can be unit-tested without touching the filesystem.
pub trait QuestionSource {
    /// The configured question set, possibly empty. The gate substitutes
    /// the built-in defaults for an empty or failed read.
    fn active_questions(&self) -> Result<Vec<Question>>;
}

/// Where the gate gets capability flags. `artist = None` means "resolve the
/// studio's primary artist"; `Ok(None)` means no record exists.
pub trait CapabilitySource {
    fn capabilities(&self, artist: Option<&str>) -> Result<Option<ArtistCapabilities>>;
}

// ---------------------------------------------------------------------------
// ConfigStore — file-backed implementation
// ---------------------------------------------------------------------------

/// Reads questions from `.inkgate/config.yaml` and capabilities from the
/// artist manifests.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl QuestionSource for ConfigStore {
    fn active_questions(&self) -> Result<Vec<Question>> {
        Ok(Config::load(&self.root)?.questions)
    }
}

impl CapabilitySource for ConfigStore {
    fn capabilities(&self, artist: Option<&str>) -> Result<Option<ArtistCapabilities>> {
        let slug = match artist {
            Some(s) => Some(s.to_string()),
            None => Config::load(&self.root)
                .ok()
                .and_then(|c| c.primary_artist),
        };
        let Some(slug) = slug else {
            return Ok(None);
        };
        match Artist::load(&self.root, &slug) {
            Ok(a) => Ok(Some(a.capabilities)),
            Err(InkgateError::ArtistNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Static sources — fixed in-memory data, mainly for hosts and tests
// ---------------------------------------------------------------------------

pub struct StaticQuestions(pub Vec<Question>);

impl QuestionSource for StaticQuestions {
    fn active_questions(&self) -> Result<Vec<Question>> {
        Ok(self.0.clone())
    }
}

pub struct StaticCapabilities(pub Option<ArtistCapabilities>);

impl CapabilitySource for StaticCapabilities {
    fn capabilities(&self, _artist: Option<&str>) -> Result<Option<ArtistCapabilities>> {
        Ok(self.0.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CapabilityField, QuestionKey};
    use tempfile::TempDir;

    #[test]
    fn config_store_reads_configured_questions() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("Night Owl");
        cfg.questions = vec![Question::new(QuestionKey::Is18Plus, "18+?", 1)];
        cfg.save(dir.path()).unwrap();

        let store = ConfigStore::new(dir.path());
        let questions = store.active_questions().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].key, QuestionKey::Is18Plus);
    }

    #[test]
    fn config_store_errors_when_uninitialized() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path());
        assert!(store.active_questions().is_err());
    }

    #[test]
    fn capabilities_resolve_named_artist() {
        let dir = TempDir::new().unwrap();
        let mut artist = Artist::create(dir.path(), "sam", "Sam").unwrap();
        artist.set_capability(CapabilityField::ColorWork, Some(false));
        artist.save(dir.path()).unwrap();

        let store = ConfigStore::new(dir.path());
        let caps = store.capabilities(Some("sam")).unwrap().unwrap();
        assert_eq!(caps.accepts_color_work, Some(false));
    }

    #[test]
    fn capabilities_fall_back_to_primary_artist() {
        let dir = TempDir::new().unwrap();
        let mut artist = Artist::create(dir.path(), "sam", "Sam").unwrap();
        artist.set_capability(CapabilityField::Coverups, Some(false));
        artist.save(dir.path()).unwrap();

        let mut cfg = Config::new("Night Owl");
        cfg.primary_artist = Some("sam".to_string());
        cfg.save(dir.path()).unwrap();

        let store = ConfigStore::new(dir.path());
        let caps = store.capabilities(None).unwrap().unwrap();
        assert_eq!(caps.accepts_coverups, Some(false));
    }

    #[test]
    fn missing_record_is_none_not_error() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path());
        assert!(store.capabilities(Some("nobody")).unwrap().is_none());
        assert!(store.capabilities(None).unwrap().is_none());
    }
}
