use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Student already signed up for an activity")]
    AlreadySignedUp,

    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    // Display stays generic; the source error is logged, not sent to clients.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(source) = &self {
            tracing::error!(error = %source, "activity store operation failed");
        }

        let status = match self {
            AppError::EmailRequired | AppError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            AppError::ActivityNotFound | AppError::ParticipantNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
