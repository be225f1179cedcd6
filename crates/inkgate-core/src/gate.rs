use crate::capability::ArtistCapabilities;
use crate::error::{InkgateError, Result};
use crate::messages::message_for;
use crate::question::{default_questions, normalize, Question};
use crate::rules;
use crate::source::{CapabilitySource, QuestionSource};
use crate::types::{Locale, QuestionKey, ReasonCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// ResponseSet
// ---------------------------------------------------------------------------

/// Accumulated answers, keyed by each question's `target_field`. Grows one
/// entry per answered question and never shrinks within a session.
pub type ResponseSet = BTreeMap<String, bool>;

// ---------------------------------------------------------------------------
// BlockReason / GateResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockReason {
    pub question_key: QuestionKey,
    pub reason_code: ReasonCode,
    pub message: String,
}

/// Terminal output of a gate session. Produced exactly once: either after
/// every question is answered with no block, or immediately on the first
/// blocking answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateResult {
    pub passed: bool,
    pub responses: ResponseSet,
    /// Question keys that triggered a block. Evaluation stops at the first
    /// match, so this holds at most one entry.
    pub blocked_by: Vec<QuestionKey>,
    pub block_reasons: Vec<BlockReason>,
}

// ---------------------------------------------------------------------------
// GateState / GateStep
// ---------------------------------------------------------------------------

/// Explicit gate state, independent of any rendering layer. `Blocked` and
/// `Passed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GateState {
    Presenting { index: usize },
    Blocked,
    Passed,
}

impl GateState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GateState::Presenting { .. })
    }
}

/// What the host should do after an answer: present the next question, or
/// deliver the terminal result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum GateStep {
    Present { question: Question },
    Blocked { result: GateResult },
    Passed { result: GateResult },
}

// ---------------------------------------------------------------------------
// EligibilityGate
// ---------------------------------------------------------------------------

/// Drives one prospective client through the ordered question list,
/// stopping early on the first disqualifying answer.
///
/// One instance serves exactly one session. Both upstream reads happen at
/// construction; a failed or empty read falls back to the built-in
/// defaults (questions) or "unrestricted" (capabilities) and never
/// surfaces an error to the caller. Abandoning the flow is just dropping
/// the instance; there is no partial state to clean up.
#[derive(Debug, Clone)]
pub struct EligibilityGate {
    questions: Vec<Question>,
    capabilities: ArtistCapabilities,
    locale: Locale,
    responses: ResponseSet,
    state: GateState,
    result: Option<GateResult>,
}

impl EligibilityGate {
    /// Start a session from injected sources. `artist = None` resolves the
    /// studio's primary artist.
    pub fn start(
        questions: &dyn QuestionSource,
        capabilities: &dyn CapabilitySource,
        artist: Option<&str>,
        locale: Locale,
    ) -> Self {
        let questions = match questions.active_questions() {
            Ok(q) if !q.is_empty() => normalize(q),
            _ => default_questions(),
        };
        let capabilities = match capabilities.capabilities(artist) {
            Ok(Some(c)) => c,
            _ => ArtistCapabilities::unrestricted(),
        };
        Self::with_parts(questions, capabilities, locale)
    }

    /// Direct constructor for hosts that already hold the data. An empty
    /// question list still falls back to the built-in defaults.
    pub fn with_parts(
        questions: Vec<Question>,
        capabilities: ArtistCapabilities,
        locale: Locale,
    ) -> Self {
        let questions = if questions.is_empty() {
            default_questions()
        } else {
            normalize(questions)
        };
        Self {
            questions,
            capabilities,
            locale,
            responses: ResponseSet::new(),
            state: GateState::Presenting { index: 0 },
            result: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question currently awaiting an answer, `None` once terminal.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            GateState::Presenting { index } => self.questions.get(index),
            _ => None,
        }
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// The terminal result, once produced.
    pub fn result(&self) -> Option<&GateResult> {
        self.result.as_ref()
    }

    /// Record an answer to the currently presented question and advance.
    ///
    /// Answering out of order or after a terminal state is a host bug and
    /// is rejected, never silently recovered.
    pub fn answer(&mut self, key: QuestionKey, value: bool) -> Result<GateStep> {
        let index = match self.state {
            GateState::Presenting { index } => index,
            _ => return Err(InkgateError::GateFinished),
        };
        let question = &self.questions[index];
        if question.key != key {
            return Err(InkgateError::QuestionNotCurrent {
                expected: question.key.to_string(),
                got: key.to_string(),
            });
        }

        self.responses.insert(question.target_field.clone(), value);

        if let Some(reason) = rules::evaluate(key, value, &self.capabilities) {
            let result = GateResult {
                passed: false,
                responses: self.responses.clone(),
                blocked_by: vec![key],
                block_reasons: vec![BlockReason {
                    question_key: key,
                    reason_code: reason,
                    message: message_for(reason, self.locale).to_string(),
                }],
            };
            self.state = GateState::Blocked;
            self.result = Some(result.clone());
            return Ok(GateStep::Blocked { result });
        }

        let next = index + 1;
        if next < self.questions.len() {
            self.state = GateState::Presenting { index: next };
            Ok(GateStep::Present {
                question: self.questions[next].clone(),
            })
        } else {
            let result = GateResult {
                passed: true,
                responses: self.responses.clone(),
                blocked_by: Vec::new(),
                block_reasons: Vec::new(),
            };
            self.state = GateState::Passed;
            self.result = Some(result.clone());
            Ok(GateStep::Passed { result })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
