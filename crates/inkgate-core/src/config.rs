use crate::error::{InkgateError, Result};
use crate::paths;
use crate::question::Question;
use crate::types::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// StudioInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub studio: StudioInfo,
    /// Artist the gate falls back to when the client didn't pick one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_artist: Option<String>,
    /// Screening question override. Empty means "use the built-in six".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub locale: Locale,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(studio_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            studio: StudioInfo {
                name: studio_name.into(),
                description: None,
            },
            primary_artist: None,
            questions: Vec::new(),
            locale: Locale::En,
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(InkgateError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let mut seen_keys = HashSet::new();
        let mut seen_orders = HashSet::new();
        for q in &self.questions {
            if !seen_keys.insert(q.key) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("duplicate question key '{}'", q.key),
                });
            }
            if !seen_orders.insert(q.order) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "duplicate order {} on question '{}': presentation order is ambiguous",
                        q.order, q.key
                    ),
                });
            }
            if q.prompt.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("question '{}' has an empty prompt", q.key),
                });
            }
        }

        if let Some(ref slug) = self.primary_artist {
            if paths::validate_slug(slug).is_err() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("primary_artist '{slug}' is not a valid slug"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QuestionKey;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::new("Night Owl Tattoo");
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.studio.name, "Night Owl Tattoo");
        assert_eq!(parsed.version, 1);
        assert!(parsed.questions.is_empty());
        assert_eq!(parsed.locale, Locale::En);
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(InkgateError::NotInitialized)
        ));
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("Night Owl Tattoo");
        cfg.primary_artist = Some("sam".to_string());
        cfg.locale = Locale::Es;
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.primary_artist.as_deref(), Some("sam"));
        assert_eq!(loaded.locale, Locale::Es);
    }

    #[test]
    fn config_without_optional_keys_backward_compat() {
        let yaml = "version: 1\nstudio:\n  name: Night Owl\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.primary_artist.is_none());
        assert!(cfg.questions.is_empty());

        // Re-serializing must not emit the empty optional keys.
        let out = serde_yaml::to_string(&cfg).unwrap();
        assert!(!out.contains("primary_artist"));
        assert!(!out.contains("questions"));
    }

    #[test]
    fn validate_flags_duplicate_keys() {
        let mut cfg = Config::new("Night Owl");
        cfg.questions = vec![
            Question::new(QuestionKey::WantsColor, "Color?", 1),
            Question::new(QuestionKey::WantsColor, "Color again?", 2),
        ];
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("duplicate question key")));
    }

    #[test]
    fn validate_flags_duplicate_orders_and_empty_prompts() {
        let mut cfg = Config::new("Night Owl");
        cfg.questions = vec![
            Question::new(QuestionKey::WantsColor, "Color?", 1),
            Question::new(QuestionKey::Is18Plus, "  ", 1),
        ];
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("duplicate order")));
        assert!(warnings.iter().any(|w| w.message.contains("empty prompt")));
    }

    #[test]
    fn validate_flags_bad_primary_artist_slug() {
        let mut cfg = Config::new("Night Owl");
        cfg.primary_artist = Some("Not A Slug".to_string());
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.level == WarnLevel::Error));
    }

    #[test]
    fn clean_config_validates_quietly() {
        let cfg = Config::new("Night Owl");
        assert!(cfg.validate().is_empty());
    }
}
