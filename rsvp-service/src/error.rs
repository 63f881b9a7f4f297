use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use rsvp_shared::error::{StoreError, ValidationError};
use thiserror::Error;

pub const STORE_WRITE_FAILED: &str = "Could not save your response. Please try again.";
pub const STORE_READ_FAILED: &str = "Could not load the list right now. Please try again.";

#[derive(Error, Debug)]
#[error("{message}")]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn bad_request(message: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: String) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

// Store detail stays in the logs; the visitor only learns that they can retry.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        error!("Store error: {}", err);
        match err {
            StoreError::Write { .. } => AppError::internal_server_error(STORE_WRITE_FAILED.into()),
            StoreError::Read { .. } => AppError::internal_server_error(STORE_READ_FAILED.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
