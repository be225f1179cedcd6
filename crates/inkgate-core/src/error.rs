use thiserror::Error;

#[derive(Debug, Error)]
pub enum InkgateError {
    #[error("not initialized: run 'inkgate init'")]
    NotInitialized,

    #[error("artist not found: {0}")]
    ArtistNotFound(String),

    #[error("artist already exists: {0}")]
    ArtistExists(String),

    #[error("booking not found: {0}")]
    BookingNotFound(String),

    #[error("booking {0} has no proposal")]
    NoProposal(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid question key: {0}")]
    InvalidQuestionKey(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid capability field: {0}")]
    InvalidCapabilityField(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("expected answer for question '{expected}', got '{got}'")]
    QuestionNotCurrent { expected: String, got: String },

    #[error("gate already reached a terminal state")]
    GateFinished,

    #[error("gate result is not a pass: booking requests require a passed gate")]
    GateNotPassed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InkgateError>;
