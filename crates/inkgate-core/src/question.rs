use crate::types::QuestionKey;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// One screening question presented by the gate.
///
/// Whether an answer can block is not stored here; the rule table decides
/// that from the key and the artist's capability flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: String,
    /// Response field this question populates. Defaults from the key when
    /// omitted in config.
    #[serde(default)]
    pub target_field: String,
    pub order: u32,
}

impl Question {
    pub fn new(key: QuestionKey, prompt: impl Into<String>, order: u32) -> Self {
        Self {
            key,
            prompt: prompt.into(),
            target_field: key.target_field().to_string(),
            order,
        }
    }
}

// ---------------------------------------------------------------------------
// Question set helpers
// ---------------------------------------------------------------------------

/// The six built-in questions in their fixed order, used whenever no
/// question set is configured.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            QuestionKey::WantsColor,
            "Does your idea involve color work?",
            1,
        ),
        Question::new(
            QuestionKey::IsCoverUp,
            "Is this a cover-up of an existing tattoo?",
            2,
        ),
        Question::new(
            QuestionKey::IsTouchUp,
            "Is this a touch-up of an existing tattoo?",
            3,
        ),
        Question::new(
            QuestionKey::IsRework,
            "Is this a rework of another artist's piece?",
            4,
        ),
        Question::new(
            QuestionKey::IsRepeatDesign,
            "Do you want an exact repeat of a design the artist has done before?",
            5,
        ),
        Question::new(QuestionKey::Is18Plus, "Are you 18 or older?", 6),
    ]
}

/// Sort by `order` and fill empty `target_field`s from the key. Configured
/// sets go through this once at gate start; the result is immutable for the
/// rest of the session.
pub fn normalize(mut questions: Vec<Question>) -> Vec<Question> {
    for q in &mut questions {
        if q.target_field.is_empty() {
            q.target_field = q.key.target_field().to_string();
        }
    }
    questions.sort_by_key(|q| q.order);
    questions
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_keys_in_order() {
        let questions = default_questions();
        assert_eq!(questions.len(), 6);
        let keys: Vec<QuestionKey> = questions.iter().map(|q| q.key).collect();
        assert_eq!(keys, QuestionKey::all());
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.order, (i + 1) as u32);
        }
    }

    #[test]
    fn age_question_comes_last() {
        let questions = default_questions();
        assert_eq!(questions.last().unwrap().key, QuestionKey::Is18Plus);
    }

    #[test]
    fn normalize_sorts_by_order() {
        let questions = vec![
            Question::new(QuestionKey::Is18Plus, "Age?", 9),
            Question::new(QuestionKey::WantsColor, "Color?", 2),
        ];
        let normalized = normalize(questions);
        assert_eq!(normalized[0].key, QuestionKey::WantsColor);
        assert_eq!(normalized[1].key, QuestionKey::Is18Plus);
    }

    #[test]
    fn normalize_fills_target_field() {
        let yaml = "key: wantsColor\nprompt: Color?\norder: 1\n";
        let q: Question = serde_yaml::from_str(yaml).unwrap();
        assert!(q.target_field.is_empty());
        let normalized = normalize(vec![q]);
        assert_eq!(normalized[0].target_field, "wants_color");
    }

    #[test]
    fn question_yaml_roundtrip() {
        let q = Question::new(QuestionKey::IsCoverUp, "Cover-up?", 2);
        let yaml = serde_yaml::to_string(&q).unwrap();
        assert!(yaml.contains("isCoverUp"));
        let parsed: Question = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, q);
    }
}
