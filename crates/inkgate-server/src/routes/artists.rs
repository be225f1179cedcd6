use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use inkgate_core::artist::Artist;
use inkgate_core::capability::ArtistCapabilities;

/// GET /api/artists — list all artists.
pub async fn list_artists(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let artists = Artist::list(&root)?;
        let list: Vec<serde_json::Value> = artists
            .iter()
            .map(|a| {
                serde_json::json!({
                    "slug": a.slug,
                    "name": a.name,
                    "capabilities": a.capabilities,
                    "updated_at": a.updated_at,
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
pub struct CreateArtistBody {
    pub slug: String,
    pub name: String,
}

/// POST /api/artists — register an artist.
pub async fn create_artist(
    State(app): State<AppState>,
    Json(body): Json<CreateArtistBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let artist = Artist::create(&root, body.slug, body.name)?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "slug": artist.slug,
            "name": artist.name,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/artists/:slug — one artist with capability flags.
pub async fn get_artist(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let a = Artist::load(&root, &slug)?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "slug": a.slug,
            "name": a.name,
            "capabilities": a.capabilities,
            "created_at": a.created_at,
            "updated_at": a.updated_at,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// PUT /api/artists/:slug/capabilities — replace the capability flags.
pub async fn put_capabilities(
    State(app): State<AppState>,
    Path(slug): Path<String>,
    Json(capabilities): Json<ArtistCapabilities>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut artist = Artist::load(&root, &slug)?;
        artist.set_capabilities(capabilities);
        artist.save(&root)?;
        Ok::<_, inkgate_core::InkgateError>(serde_json::json!({
            "slug": artist.slug,
            "capabilities": artist.capabilities,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
