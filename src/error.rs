//! Typed errors and HTTP mapping.

use crate::response::{common_error, join_field_errors, validation_error, ErrorResponse};
use crate::validation::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Startup configuration failures. The entrypoint exits on any of these.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config path is not set (use CONFIG_PATH or --config)")]
    MissingPath,
    #[error("config file does not exist: {0}")]
    FileNotFound(String),
    #[error("unable to read config: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no student found with id {0}")]
    NotFound(i64),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("storage directory: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // Not-found shares the 500 mapping with every other storage failure.
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }
        let body: ErrorResponse = match &self {
            AppError::Validation(errs) => validation_error(errs),
            other => common_error(other),
        };
        (status, Json(body)).into_response()
    }
}
