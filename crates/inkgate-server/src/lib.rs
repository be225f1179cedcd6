pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Gate sessions
        .route("/api/gate/sessions", post(routes::gate::start_session))
        .route("/api/gate/sessions/{id}", get(routes::gate::get_session))
        .route(
            "/api/gate/sessions/{id}/answer",
            post(routes::gate::answer),
        )
        .route(
            "/api/gate/sessions/{id}",
            delete(routes::gate::abandon_session),
        )
        // Bookings
        .route("/api/bookings", get(routes::bookings::list_bookings))
        .route("/api/bookings", post(routes::bookings::create_booking))
        .route("/api/bookings/{id}", get(routes::bookings::get_booking))
        .route(
            "/api/bookings/{id}/status",
            post(routes::bookings::set_status),
        )
        .route(
            "/api/bookings/{id}/proposal",
            post(routes::bookings::propose),
        )
        .route(
            "/api/bookings/{id}/proposal/status",
            post(routes::bookings::set_proposal_status),
        )
        // Artists
        .route("/api/artists", get(routes::artists::list_artists))
        .route("/api/artists", post(routes::artists::create_artist))
        .route("/api/artists/{slug}", get(routes::artists::get_artist))
        .route(
            "/api/artists/{slug}/capabilities",
            put(routes::artists::put_capabilities),
        )
        // Config
        .route("/api/config", get(routes::config::get_config))
        .layer(cors)
        .with_state(app_state)
}

/// Start the inkgate API server.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    let app = build_router(root);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("inkgate API listening on http://localhost:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}
