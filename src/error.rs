//! Typed errors and HTTP mapping.
//!
//! Only two outcomes reach the client: 404 for a missing record and 500 for
//! every other failure, with the underlying error carried in `message`.

use crate::response::MessageBody;
use crate::service::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
    #[error("invalid schema name: '{0}'")]
    SchemaName(String),
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Carries the message sent back to the client.
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("invalid identifier: '{0}'")]
    InvalidId(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("store: {0}")]
    Store(String),
}

impl AppError {
    /// The raw error as it is reported in a 500 body.
    pub fn payload(&self) -> Value {
        match self {
            AppError::Validation(errors) => errors.to_json(),
            other => Value::String(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::NotFound(message) = self {
            return (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response();
        }
        tracing::error!(error = %self, "request failed");
        let body = MessageBody {
            message: self.payload(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
