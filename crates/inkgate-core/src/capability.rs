use crate::types::CapabilityField;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ArtistCapabilities
// ---------------------------------------------------------------------------

/// Per-artist capability flags. Each flag is tri-state: `None` means the
/// artist never declared a stance, and an undeclared flag never blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_color_work: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_coverups: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_touchups: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepts_reworks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub will_repeat_designs: Option<bool>,
}

impl ArtistCapabilities {
    /// The fallback when no capability record exists: nothing blocks.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CapabilityField) -> Option<bool> {
        match field {
            CapabilityField::ColorWork => self.accepts_color_work,
            CapabilityField::Coverups => self.accepts_coverups,
            CapabilityField::Touchups => self.accepts_touchups,
            CapabilityField::Reworks => self.accepts_reworks,
            CapabilityField::RepeatDesigns => self.will_repeat_designs,
        }
    }

    pub fn set(&mut self, field: CapabilityField, value: Option<bool>) {
        match field {
            CapabilityField::ColorWork => self.accepts_color_work = value,
            CapabilityField::Coverups => self.accepts_coverups = value,
            CapabilityField::Touchups => self.accepts_touchups = value,
            CapabilityField::Reworks => self.accepts_reworks = value,
            CapabilityField::RepeatDesigns => self.will_repeat_designs = value,
        }
    }

    /// Whether this kind of work is accepted. Only an explicit `false`
    /// refuses it.
    pub fn allows(&self, field: CapabilityField) -> bool {
        self.get(field).unwrap_or(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undeclared_flags_allow() {
        let caps = ArtistCapabilities::unrestricted();
        for field in CapabilityField::all() {
            assert!(caps.allows(*field));
        }
    }

    #[test]
    fn explicit_false_refuses() {
        let mut caps = ArtistCapabilities::unrestricted();
        caps.set(CapabilityField::ColorWork, Some(false));
        assert!(!caps.allows(CapabilityField::ColorWork));
        assert!(caps.allows(CapabilityField::Coverups));
    }

    #[test]
    fn explicit_true_allows() {
        let mut caps = ArtistCapabilities::unrestricted();
        caps.set(CapabilityField::Reworks, Some(true));
        assert!(caps.allows(CapabilityField::Reworks));
    }

    #[test]
    fn unset_fields_omitted_from_yaml() {
        let mut caps = ArtistCapabilities::unrestricted();
        caps.set(CapabilityField::Coverups, Some(false));
        let yaml = serde_yaml::to_string(&caps).unwrap();
        assert!(yaml.contains("accepts_coverups: false"));
        assert!(!yaml.contains("accepts_color_work"));
    }

    #[test]
    fn empty_yaml_deserializes_to_unrestricted() {
        let caps: ArtistCapabilities = serde_yaml::from_str("{}").unwrap();
        assert_eq!(caps, ArtistCapabilities::unrestricted());
    }
}
