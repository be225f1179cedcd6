use crate::capability::ArtistCapabilities;
use crate::types::{CapabilityField, QuestionKey, ReasonCode};

// ---------------------------------------------------------------------------
// BlockRule
// ---------------------------------------------------------------------------

/// One row of the block predicate table: which answer to which question
/// disqualifies a client, and which capability flag can neutralize it.
///
/// `capability: None` marks an absolute rule: it fires on the matching
/// answer no matter what the artist declares. Age verification is the only
/// such rule.
#[derive(Debug, Clone, Copy)]
pub struct BlockRule {
    pub question: QuestionKey,
    pub fires_on: bool,
    pub capability: Option<CapabilityField>,
    pub reason: ReasonCode,
}

const BLOCK_RULES: [BlockRule; 6] = [
    BlockRule {
        question: QuestionKey::WantsColor,
        fires_on: true,
        capability: Some(CapabilityField::ColorWork),
        reason: ReasonCode::ColorRequested,
    },
    BlockRule {
        question: QuestionKey::IsCoverUp,
        fires_on: true,
        capability: Some(CapabilityField::Coverups),
        reason: ReasonCode::CoverupNotOffered,
    },
    BlockRule {
        question: QuestionKey::IsTouchUp,
        fires_on: true,
        capability: Some(CapabilityField::Touchups),
        reason: ReasonCode::TouchupNotOffered,
    },
    BlockRule {
        question: QuestionKey::IsRework,
        fires_on: true,
        capability: Some(CapabilityField::Reworks),
        reason: ReasonCode::ReworkNotOffered,
    },
    BlockRule {
        question: QuestionKey::IsRepeatDesign,
        fires_on: true,
        capability: Some(CapabilityField::RepeatDesigns),
        reason: ReasonCode::RepeatNotOffered,
    },
    BlockRule {
        question: QuestionKey::Is18Plus,
        fires_on: false,
        capability: None,
        reason: ReasonCode::AgeVerificationRequired,
    },
];

pub fn block_rules() -> &'static [BlockRule] {
    &BLOCK_RULES
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate the block predicate for the question just answered. Returns the
/// disqualifying reason, or `None` when the gate may continue.
pub fn evaluate(
    question: QuestionKey,
    value: bool,
    capabilities: &ArtistCapabilities,
) -> Option<ReasonCode> {
    let rule = BLOCK_RULES.iter().find(|r| r.question == question)?;
    if value != rule.fires_on {
        return None;
    }
    match rule.capability {
        // Capability-gated: only an explicit refusal blocks.
        Some(field) if capabilities.allows(field) => None,
        Some(_) => Some(rule.reason),
        // Absolute rule.
        None => Some(rule.reason),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
