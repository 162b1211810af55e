use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, error, info};

pub const NOT_FOUND_MESSAGE: &str = "Auto not found";

/// The six auto operations, used to pick the failure message and log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Replace,
    Patch,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "An error occurred while retrieving autos.",
            Operation::Get => "An error occurred while retrieving the auto.",
            Operation::Create => "An error occurred while creating the auto.",
            Operation::Replace => "An error occurred while updating the auto.",
            Operation::Patch => "An error occurred while partially updating the auto.",
            Operation::Delete => "An error occurred while deleting the auto.",
        }
    }
}

/// Error returned by every handler; always rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self { status: StatusCode::NOT_FOUND, message: NOT_FOUND_MESSAGE }
    }

    pub fn internal(op: Operation) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: op.failure_message() }
    }

    /// NotFound is an expected outcome and is not logged as an error.
    /// Everything else is logged in full and hidden behind the generic message.
    pub fn from_service(op: Operation, auto_id: Option<i32>, err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => {
                info!(?op, ?auto_id, "auto not found");
                Self::not_found()
            }
            // Reported as 500 like any other create failure.
            ServiceError::MissingField(field) => {
                error!(?op, field, "request body missing required field");
                Self::internal(op)
            }
            ServiceError::Db(_) => {
                error!(?op, ?auto_id, error = %err, "storage failure");
                Self::internal(op)
            }
        }
    }

    /// Unreadable body: wrong content type, invalid JSON, or a key of the wrong type.
    pub fn from_json_rejection(op: Operation, auto_id: Option<i32>, rejection: JsonRejection) -> Self {
        error!(?op, ?auto_id, error = %rejection.body_text(), "invalid request body");
        Self::internal(op)
    }

    /// A non-integer id cannot name any auto.
    pub fn from_path_rejection(rejection: PathRejection) -> Self {
        debug!(error = %rejection.body_text(), "unparseable auto_id");
        Self::not_found()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("schema migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
