use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use inkgate_core::gate::EligibilityGate;
use inkgate_core::source::ConfigStore;
use inkgate_core::types::{Locale, QuestionKey};

#[derive(serde::Deserialize)]
pub struct StartSessionBody {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// POST /api/gate/sessions — start a gate session.
pub async fn start_session(
    State(app): State<AppState>,
    Json(body): Json<StartSessionBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let artist = body.artist.clone();
    let locale = match body.locale {
        Some(l) => l,
        None => {
            let root = root.clone();
            tokio::task::spawn_blocking(move || {
                inkgate_core::config::Config::load(&root)
                    .map(|c| c.locale)
                    .unwrap_or_default()
            })
            .await
            .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?
        }
    };

    let gate = tokio::task::spawn_blocking(move || {
        let store = ConfigStore::new(root);
        EligibilityGate::start(&store, &store, artist.as_deref(), locale)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;

    let session_id = Uuid::new_v4();
    let question = gate.current_question().cloned();
    let state = gate.state();
    app.sessions
        .lock()
        .map_err(|_| AppError(anyhow::anyhow!("sessions lock poisoned")))?
        .insert(session_id, gate);

    Ok(Json(serde_json::json!({
        "session_id": session_id,
        "state": state,
        "question": question,
    })))
}

/// GET /api/gate/sessions/:id — current state of a session.
pub async fn get_session(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = app
        .sessions
        .lock()
        .map_err(|_| AppError(anyhow::anyhow!("sessions lock poisoned")))?;
    let gate = sessions
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("session not found: {id}")))?;

    Ok(Json(serde_json::json!({
        "session_id": id,
        "state": gate.state(),
        "question": gate.current_question(),
        "responses": gate.responses(),
        "result": gate.result(),
    })))
}

#[derive(serde::Deserialize)]
pub struct AnswerBody {
    pub question_key: QuestionKey,
    pub value: bool,
}

/// POST /api/gate/sessions/:id/answer — answer the current question.
pub async fn answer(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AnswerBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut sessions = app
        .sessions
        .lock()
        .map_err(|_| AppError(anyhow::anyhow!("sessions lock poisoned")))?;
    let gate = sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("session not found: {id}")))?;

    let step = gate.answer(body.question_key, body.value)?;

    Ok(Json(serde_json::json!({
        "session_id": id,
        "state": gate.state(),
        "step": step,
    })))
}

/// DELETE /api/gate/sessions/:id — abandon a session.
pub async fn abandon_session(
    State(app): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = app
        .sessions
        .lock()
        .map_err(|_| AppError(anyhow::anyhow!("sessions lock poisoned")))?
        .remove(&id);
    if removed.is_none() {
        return Err(AppError::not_found(format!("session not found: {id}")));
    }
    Ok(Json(serde_json::json!({ "session_id": id, "abandoned": true })))
}
