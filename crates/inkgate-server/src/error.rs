use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use inkgate_core::error::InkgateError;

// ---------------------------------------------------------------------------
// Internal sentinel for explicit 404 errors
// ---------------------------------------------------------------------------

/// Private sentinel error type used to carry an explicit HTTP 404 through
/// the `anyhow::Error` chain without touching the `InkgateError` enum.
#[derive(Debug)]
struct NotFoundError(String);

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFoundError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 404 Not Found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(n) = self.0.downcast_ref::<NotFoundError>() {
            let body = serde_json::json!({ "error": n.0.clone() });
            return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<InkgateError>() {
            match e {
                InkgateError::NotInitialized => StatusCode::BAD_REQUEST,
                InkgateError::ArtistNotFound(_)
                | InkgateError::BookingNotFound(_)
                | InkgateError::NoProposal(_) => StatusCode::NOT_FOUND,
                InkgateError::ArtistExists(_) => StatusCode::CONFLICT,
                InkgateError::InvalidSlug(_)
                | InkgateError::InvalidQuestionKey(_)
                | InkgateError::InvalidStatus(_)
                | InkgateError::InvalidCapabilityField(_)
                | InkgateError::InvalidLocale(_) => StatusCode::BAD_REQUEST,
                InkgateError::InvalidTransition { .. } | InkgateError::GateNotPassed => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                InkgateError::QuestionNotCurrent { .. } | InkgateError::GateFinished => {
                    StatusCode::CONFLICT
                }
                InkgateError::Io(_) | InkgateError::Yaml(_) | InkgateError::Json(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_not_found_maps_to_404() {
        let err = AppError(InkgateError::ArtistNotFound("sam".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn booking_not_found_maps_to_404() {
        let err = AppError(InkgateError::BookingNotFound("b-1".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn artist_exists_maps_to_409() {
        let err = AppError(InkgateError::ArtistExists("sam".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn invalid_slug_maps_to_400() {
        let err = AppError(InkgateError::InvalidSlug("BAD SLUG".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_initialized_maps_to_400() {
        let err = AppError(InkgateError::NotInitialized.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_transition_maps_to_422() {
        let err = AppError(
            InkgateError::InvalidTransition {
                from: "received".into(),
                to: "completed".into(),
                reason: "not an allowed move".into(),
            }
            .into(),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn gate_not_passed_maps_to_422() {
        let err = AppError(InkgateError::GateNotPassed.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn gate_finished_maps_to_409() {
        let err = AppError(InkgateError::GateFinished.into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn out_of_order_answer_maps_to_409() {
        let err = AppError(
            InkgateError::QuestionNotCurrent {
                expected: "wantsColor".into(),
                got: "is18Plus".into(),
            }
            .into(),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(InkgateError::Io(io_err).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_inkgate_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_constructor_maps_to_404() {
        let err = AppError::not_found("session not found");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn response_body_is_json() {
        let err = AppError(InkgateError::BookingNotFound("b-9".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
