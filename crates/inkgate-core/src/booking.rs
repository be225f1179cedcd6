use crate::error::{InkgateError, Result};
use crate::gate::{GateResult, ResponseSet};
use crate::paths;
use crate::types::{ProposalStatus, RequestStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// StatusChange / Proposal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<RequestStatus>,
    pub to: RequestStatus,
    pub at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A slot/design proposal the studio sends back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// BookingRequest
// ---------------------------------------------------------------------------

/// A booking request that cleared the eligibility gate. Tracks the studio's
/// handling of the request through a forward-only status model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Screening answers carried over from the gate.
    pub responses: ResponseSet,
    pub status: RequestStatus,
    pub status_history: Vec<StatusChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal: Option<Proposal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRequest {
    /// Build a request from a terminal gate result. Only a passed gate can
    /// become a booking request.
    pub fn from_gate(
        result: &GateResult,
        client_name: impl Into<String>,
        contact: Option<String>,
        idea: Option<String>,
        artist: Option<String>,
    ) -> Result<Self> {
        if !result.passed {
            return Err(InkgateError::GateNotPassed);
        }
        if let Some(ref slug) = artist {
            paths::validate_slug(slug)?;
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            client_name: client_name.into(),
            contact,
            idea,
            artist,
            responses: result.responses.clone(),
            status: RequestStatus::Received,
            status_history: vec![StatusChange {
                from: None,
                to: RequestStatus::Received,
                at: now,
                note: None,
            }],
            created_at: now,
            updated_at: now,
            proposal: None,
        })
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        let path = paths::booking_path(root, id);
        if !path.exists() {
            return Err(InkgateError::BookingNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&path)?;
        let booking: BookingRequest = serde_yaml::from_str(&data)?;
        Ok(booking)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::booking_path(root, &self.id.to_string());
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::bookings_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut bookings = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("yaml") {
                let data = std::fs::read_to_string(&path)?;
                let booking: BookingRequest = serde_yaml::from_str(&data)?;
                bookings.push(booking);
            }
        }
        bookings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(bookings)
    }

    // ---------------------------------------------------------------------------
    // Status transitions
    // ---------------------------------------------------------------------------

    pub fn set_status(&mut self, target: RequestStatus, note: Option<String>) -> Result<()> {
        if !self.status.can_transition_to(target) {
            let reason = if self.status.is_terminal() {
                format!("'{}' is terminal", self.status)
            } else {
                "not an allowed move".to_string()
            };
            return Err(InkgateError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                reason,
            });
        }

        let now = Utc::now();
        self.status_history.push(StatusChange {
            from: Some(self.status),
            to: target,
            at: now,
            note,
        });
        self.status = target;
        self.updated_at = now;
        Ok(())
    }

    /// Attach a draft proposal and move the request to `proposed`.
    pub fn propose(&mut self, note: Option<String>) -> Result<()> {
        self.set_status(RequestStatus::Proposed, None)?;
        let now = Utc::now();
        self.proposal = Some(Proposal {
            status: ProposalStatus::Draft,
            created_at: now,
            updated_at: now,
            note,
        });
        Ok(())
    }

    /// Advance the attached proposal's lifecycle.
    pub fn update_proposal(&mut self, target: ProposalStatus) -> Result<()> {
        let id = self.id.to_string();
        let proposal = self
            .proposal
            .as_mut()
            .ok_or(InkgateError::NoProposal(id))?;
        if !proposal.status.can_transition_to(target) {
            return Err(InkgateError::InvalidTransition {
                from: proposal.status.to_string(),
                to: target.to_string(),
                reason: "not an allowed proposal move".to_string(),
            });
        }
        let now = Utc::now();
        proposal.status = target;
        proposal.updated_at = now;
        self.updated_at = now;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
