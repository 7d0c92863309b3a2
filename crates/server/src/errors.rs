use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use service::example::ExampleError;

/// Wire shape shared by both surfaces: `{ code, kind, message }`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// `BAD_REQUEST`, `CONFLICT`, `UNAUTHORIZED` or `INTERNAL_SERVER_ERROR`
    pub code: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl From<&ExampleError> for ErrorBody {
    fn from(e: &ExampleError) -> Self {
        Self { code: e.code().as_str(), kind: e.kind(), message: e.public_message() }
    }
}

fn status_of(e: &ExampleError) -> StatusCode {
    StatusCode::from_u16(e.code().http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn log_error(e: &ExampleError) {
    match e {
        ExampleError::Store(detail) => error!(err = %detail, "request failed on store"),
        other => info!(kind = other.kind(), message = %other, "request rejected"),
    }
}

/// Schema mismatches are reported before any handler logic runs.
pub fn invalid_input(rejection: JsonRejection) -> ExampleError {
    ExampleError::InvalidInput(rejection.body_text())
}

/// REST error response: the error body at the top level.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl From<ExampleError> for JsonApiError {
    fn from(e: ExampleError) -> Self {
        log_error(&e);
        Self { status: status_of(&e), body: ErrorBody::from(&e) }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        invalid_input(r).into()
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// RPC fault: the error body nested under `error`.
#[derive(Debug)]
pub struct RpcFault {
    pub status: StatusCode,
    pub body: ErrorBody,
}

#[derive(Serialize)]
struct RpcFaultEnvelope<'a> {
    error: &'a ErrorBody,
}

impl From<ExampleError> for RpcFault {
    fn from(e: ExampleError) -> Self {
        log_error(&e);
        Self { status: status_of(&e), body: ErrorBody::from(&e) }
    }
}

impl IntoResponse for RpcFault {
    fn into_response(self) -> Response {
        (self.status, Json(RpcFaultEnvelope { error: &self.body })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server error: {0}")]
    Serve(std::io::Error),
}
