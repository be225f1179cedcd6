use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// QuestionKey
// ---------------------------------------------------------------------------

/// Stable identifiers for the pre-booking screening questions. Configured
/// question sets reuse these keys; unknown keys are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    WantsColor,
    IsCoverUp,
    IsTouchUp,
    IsRework,
    IsRepeatDesign,
    Is18Plus,
}

impl QuestionKey {
    pub fn all() -> &'static [QuestionKey] {
        &[
            QuestionKey::WantsColor,
            QuestionKey::IsCoverUp,
            QuestionKey::IsTouchUp,
            QuestionKey::IsRework,
            QuestionKey::IsRepeatDesign,
            QuestionKey::Is18Plus,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKey::WantsColor => "wantsColor",
            QuestionKey::IsCoverUp => "isCoverUp",
            QuestionKey::IsTouchUp => "isTouchUp",
            QuestionKey::IsRework => "isRework",
            QuestionKey::IsRepeatDesign => "isRepeatDesign",
            QuestionKey::Is18Plus => "is18Plus",
        }
    }

    /// Response field this question's answer populates.
    pub fn target_field(self) -> &'static str {
        match self {
            QuestionKey::WantsColor => "wants_color",
            QuestionKey::IsCoverUp => "is_cover_up",
            QuestionKey::IsTouchUp => "is_touch_up",
            QuestionKey::IsRework => "is_rework",
            QuestionKey::IsRepeatDesign => "is_repeat_design",
            QuestionKey::Is18Plus => "is_18_plus",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionKey {
    type Err = crate::error::InkgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wantsColor" => Ok(QuestionKey::WantsColor),
            "isCoverUp" => Ok(QuestionKey::IsCoverUp),
            "isTouchUp" => Ok(QuestionKey::IsTouchUp),
            "isRework" => Ok(QuestionKey::IsRework),
            "isRepeatDesign" => Ok(QuestionKey::IsRepeatDesign),
            "is18Plus" => Ok(QuestionKey::Is18Plus),
            _ => Err(crate::error::InkgateError::InvalidQuestionKey(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// CapabilityField
// ---------------------------------------------------------------------------

/// The per-artist capability flags a screening question can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityField {
    ColorWork,
    Coverups,
    Touchups,
    Reworks,
    RepeatDesigns,
}

impl CapabilityField {
    pub fn all() -> &'static [CapabilityField] {
        &[
            CapabilityField::ColorWork,
            CapabilityField::Coverups,
            CapabilityField::Touchups,
            CapabilityField::Reworks,
            CapabilityField::RepeatDesigns,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CapabilityField::ColorWork => "color_work",
            CapabilityField::Coverups => "coverups",
            CapabilityField::Touchups => "touchups",
            CapabilityField::Reworks => "reworks",
            CapabilityField::RepeatDesigns => "repeat_designs",
        }
    }
}

impl fmt::Display for CapabilityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CapabilityField {
    type Err = crate::error::InkgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "color_work" | "color-work" => Ok(CapabilityField::ColorWork),
            "coverups" => Ok(CapabilityField::Coverups),
            "touchups" => Ok(CapabilityField::Touchups),
            "reworks" => Ok(CapabilityField::Reworks),
            "repeat_designs" | "repeat-designs" => Ok(CapabilityField::RepeatDesigns),
            _ => Err(crate::error::InkgateError::InvalidCapabilityField(
                s.to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ReasonCode
// ---------------------------------------------------------------------------

/// Structured reasons a prospective client can be blocked by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    ColorRequested,
    CoverupNotOffered,
    TouchupNotOffered,
    ReworkNotOffered,
    RepeatNotOffered,
    AgeVerificationRequired,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::ColorRequested => "color_requested",
            ReasonCode::CoverupNotOffered => "coverup_not_offered",
            ReasonCode::TouchupNotOffered => "touchup_not_offered",
            ReasonCode::ReworkNotOffered => "rework_not_offered",
            ReasonCode::RepeatNotOffered => "repeat_not_offered",
            ReasonCode::AgeVerificationRequired => "age_verification_required",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a booking request after it clears the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Received,
    InReview,
    NeedsInfo,
    Proposed,
    Scheduled,
    Completed,
    Declined,
    Cancelled,
}

impl RequestStatus {
    pub fn all() -> &'static [RequestStatus] {
        &[
            RequestStatus::Received,
            RequestStatus::InReview,
            RequestStatus::NeedsInfo,
            RequestStatus::Proposed,
            RequestStatus::Scheduled,
            RequestStatus::Completed,
            RequestStatus::Declined,
            RequestStatus::Cancelled,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Received => "received",
            RequestStatus::InReview => "in_review",
            RequestStatus::NeedsInfo => "needs_info",
            RequestStatus::Proposed => "proposed",
            RequestStatus::Scheduled => "scheduled",
            RequestStatus::Completed => "completed",
            RequestStatus::Declined => "declined",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RequestStatus::Completed | RequestStatus::Declined | RequestStatus::Cancelled
        )
    }

    /// Allowed forward moves. `Declined` and `Cancelled` are reachable from
    /// any non-terminal status.
    pub fn can_transition_to(self, target: RequestStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        if matches!(target, RequestStatus::Declined | RequestStatus::Cancelled) {
            return true;
        }
        matches!(
            (self, target),
            (RequestStatus::Received, RequestStatus::InReview)
                | (RequestStatus::InReview, RequestStatus::NeedsInfo)
                | (RequestStatus::InReview, RequestStatus::Proposed)
                | (RequestStatus::NeedsInfo, RequestStatus::InReview)
                | (RequestStatus::Proposed, RequestStatus::InReview)
                | (RequestStatus::Proposed, RequestStatus::Scheduled)
                | (RequestStatus::Scheduled, RequestStatus::Completed)
        )
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = crate::error::InkgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "received" => Ok(RequestStatus::Received),
            "in_review" | "in-review" => Ok(RequestStatus::InReview),
            "needs_info" | "needs-info" => Ok(RequestStatus::NeedsInfo),
            "proposed" => Ok(RequestStatus::Proposed),
            "scheduled" => Ok(RequestStatus::Scheduled),
            "completed" => Ok(RequestStatus::Completed),
            "declined" => Ok(RequestStatus::Declined),
            "cancelled" => Ok(RequestStatus::Cancelled),
            _ => Err(crate::error::InkgateError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ProposalStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a slot/design proposal attached to a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
}

impl ProposalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Sent => "sent",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Declined => "declined",
            ProposalStatus::Expired => "expired",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ProposalStatus::Accepted | ProposalStatus::Declined | ProposalStatus::Expired
        )
    }

    pub fn can_transition_to(self, target: ProposalStatus) -> bool {
        matches!(
            (self, target),
            (ProposalStatus::Draft, ProposalStatus::Sent)
                | (ProposalStatus::Sent, ProposalStatus::Accepted)
                | (ProposalStatus::Sent, ProposalStatus::Declined)
                | (ProposalStatus::Sent, ProposalStatus::Expired)
        )
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProposalStatus {
    type Err = crate::error::InkgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProposalStatus::Draft),
            "sent" => Ok(ProposalStatus::Sent),
            "accepted" => Ok(ProposalStatus::Accepted),
            "declined" => Ok(ProposalStatus::Declined),
            "expired" => Ok(ProposalStatus::Expired),
            _ => Err(crate::error::InkgateError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Languages the scripted block messages ship in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::error::InkgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(crate::error::InkgateError::InvalidLocale(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn question_key_roundtrip() {
        for key in QuestionKey::all() {
            let parsed = QuestionKey::from_str(key.as_str()).unwrap();
            assert_eq!(*key, parsed);
        }
    }

    #[test]
    fn question_key_serde_uses_camel_case() {
        let json = serde_json::to_string(&QuestionKey::Is18Plus).unwrap();
        assert_eq!(json, "\"is18Plus\"");
        let json = serde_json::to_string(&QuestionKey::WantsColor).unwrap();
        assert_eq!(json, "\"wantsColor\"");
    }

    #[test]
    fn unknown_question_key_rejected() {
        assert!(QuestionKey::from_str("hasAllergies").is_err());
        assert!(QuestionKey::from_str("").is_err());
    }

    #[test]
    fn reason_code_strings() {
        assert_eq!(ReasonCode::ColorRequested.as_str(), "color_requested");
        assert_eq!(
            ReasonCode::AgeVerificationRequired.as_str(),
            "age_verification_required"
        );
    }

    #[test]
    fn request_status_forward_moves() {
        assert!(RequestStatus::Received.can_transition_to(RequestStatus::InReview));
        assert!(RequestStatus::InReview.can_transition_to(RequestStatus::Proposed));
        assert!(RequestStatus::Proposed.can_transition_to(RequestStatus::Scheduled));
        assert!(RequestStatus::Scheduled.can_transition_to(RequestStatus::Completed));
        assert!(!RequestStatus::Received.can_transition_to(RequestStatus::Scheduled));
        assert!(!RequestStatus::Scheduled.can_transition_to(RequestStatus::Received));
    }

    #[test]
    fn needs_info_loops_back_to_review() {
        assert!(RequestStatus::InReview.can_transition_to(RequestStatus::NeedsInfo));
        assert!(RequestStatus::NeedsInfo.can_transition_to(RequestStatus::InReview));
    }

    #[test]
    fn decline_and_cancel_from_any_open_status() {
        for status in RequestStatus::all() {
            if status.is_terminal() {
                assert!(!status.can_transition_to(RequestStatus::Declined));
            } else {
                assert!(status.can_transition_to(RequestStatus::Declined));
                assert!(status.can_transition_to(RequestStatus::Cancelled));
            }
        }
    }

    #[test]
    fn terminal_statuses_are_frozen() {
        for terminal in [
            RequestStatus::Completed,
            RequestStatus::Declined,
            RequestStatus::Cancelled,
        ] {
            for target in RequestStatus::all() {
                assert!(!terminal.can_transition_to(*target));
            }
        }
    }

    #[test]
    fn proposal_lifecycle() {
        assert!(ProposalStatus::Draft.can_transition_to(ProposalStatus::Sent));
        assert!(ProposalStatus::Sent.can_transition_to(ProposalStatus::Accepted));
        assert!(!ProposalStatus::Draft.can_transition_to(ProposalStatus::Accepted));
        assert!(!ProposalStatus::Accepted.can_transition_to(ProposalStatus::Sent));
    }

    #[test]
    fn status_string_roundtrip() {
        for status in RequestStatus::all() {
            let parsed = RequestStatus::from_str(status.as_str()).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn locale_parse() {
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert_eq!(Locale::from_str("es").unwrap(), Locale::Es);
        assert!(Locale::from_str("fr").is_err());
        assert_eq!(Locale::default(), Locale::En);
    }
}
