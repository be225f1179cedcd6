use crate::error::{InkgateError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const INKGATE_DIR: &str = ".inkgate";
pub const ARTISTS_DIR: &str = ".inkgate/artists";
pub const BOOKINGS_DIR: &str = ".inkgate/bookings";

pub const CONFIG_FILE: &str = ".inkgate/config.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn inkgate_dir(root: &Path) -> PathBuf {
    root.join(INKGATE_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn artists_dir(root: &Path) -> PathBuf {
    root.join(ARTISTS_DIR)
}

pub fn artist_path(root: &Path, slug: &str) -> PathBuf {
    artists_dir(root).join(format!("{slug}.yaml"))
}

pub fn bookings_dir(root: &Path) -> PathBuf {
    root.join(BOOKINGS_DIR)
}

pub fn booking_path(root: &Path, id: &str) -> PathBuf {
    bookings_dir(root).join(format!("{id}.yaml"))
}

// ---------------------------------------------------------------------------
// Slug validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 64 || !slug_re().is_match(slug) {
        return Err(InkgateError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slugs() {
        for slug in ["sam-rivera", "a", "blackwork-23", "x1"] {
            validate_slug(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn invalid_slugs() {
        for slug in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
        ] {
            assert!(validate_slug(slug).is_err(), "expected invalid: {slug}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/studio");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/studio/.inkgate/config.yaml")
        );
        assert_eq!(
            artist_path(root, "sam"),
            PathBuf::from("/tmp/studio/.inkgate/artists/sam.yaml")
        );
        assert_eq!(
            booking_path(root, "b-1"),
            PathBuf::from("/tmp/studio/.inkgate/bookings/b-1.yaml")
        );
    }
}
