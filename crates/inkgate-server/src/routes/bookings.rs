use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use inkgate_core::booking::BookingRequest;
use inkgate_core::types::{ProposalStatus, RequestStatus};

/// GET /api/bookings — list all booking requests.
pub async fn list_bookings(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let bookings = BookingRequest::list(&root)?;
        let list: Vec<serde_json::Value> = bookings
            .iter()
            .map(|b| {
                serde_json::json!({
                    "id": b.id,
                    "client_name": b.client_name,
                    "artist": b.artist,
                    "status": b.status,
                    "proposal_status": b.proposal.as_ref().map(|p| p.status),
                    "created_at": b.created_at,
                    "updated_at": b.updated_at,
                })
            })
            .collect();
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CreateBookingBody {
    pub session_id: Uuid,
    pub client_name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub idea: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

/// POST /api/bookings — create a booking request from a passed gate session.
/// The session is consumed on success.
pub async fn create_booking(
    State(app): State<AppState>,
    Json(body): Json<CreateBookingBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let result = {
        let sessions = app
            .sessions
            .lock()
            .map_err(|_| AppError(anyhow::anyhow!("sessions lock poisoned")))?;
        sessions
            .get(&body.session_id)
            .ok_or_else(|| AppError::not_found(format!("session not found: {}", body.session_id)))?
            .result()
            .cloned()
            .ok_or_else(|| AppError(inkgate_core::InkgateError::GateNotPassed.into()))?
    };

    let root = app.root.clone();
    let booking = tokio::task::spawn_blocking(move || {
        let booking = BookingRequest::from_gate(
            &result,
            body.client_name,
            body.contact,
            body.idea,
            body.artist,
        )?;
        booking.save(&root)?;
        Ok::<_, inkgate_core::InkgateError>(booking)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    // Session is spent once the booking exists.
    app.sessions
        .lock()
        .map_err(|_| AppError(anyhow::anyhow!("sessions lock poisoned")))?
        .remove(&body.session_id);

    Ok(Json(serde_json::json!({
        "id": booking.id,
        "client_name": booking.client_name,
        "status": booking.status,
    })))
}

/// GET /api/bookings/:id — full booking request detail.
pub async fn get_booking(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let b = BookingRequest::load(&root, &id.to_string())?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "id": b.id,
            "client_name": b.client_name,
            "contact": b.contact,
            "idea": b.idea,
            "artist": b.artist,
            "responses": b.responses,
            "status": b.status,
            "status_history": b.status_history,
            "proposal": b.proposal,
            "created_at": b.created_at,
            "updated_at": b.updated_at,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct StatusBody {
    pub status: RequestStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// POST /api/bookings/:id/status — move a booking request to a new status.
pub async fn set_status(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<StatusBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut booking = BookingRequest::load(&root, &id.to_string())?;
        booking.set_status(body.status, body.note)?;
        booking.save(&root)?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "id": booking.id,
            "status": booking.status,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize, Default)]
pub struct ProposeBody {
    #[serde(default)]
    pub note: Option<String>,
}

/// POST /api/bookings/:id/proposal — attach a draft proposal.
pub async fn propose(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ProposeBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut booking = BookingRequest::load(&root, &id.to_string())?;
        booking.propose(body.note)?;
        booking.save(&root)?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "id": booking.id,
            "status": booking.status,
            "proposal": booking.proposal,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct ProposalStatusBody {
    pub status: ProposalStatus,
}

/// POST /api/bookings/:id/proposal/status — advance the proposal lifecycle.
pub async fn set_proposal_status(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ProposalStatusBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut booking = BookingRequest::load(&root, &id.to_string())?;
        booking.update_proposal(body.status)?;
        booking.save(&root)?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "id": booking.id,
            "proposal": booking.proposal,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
