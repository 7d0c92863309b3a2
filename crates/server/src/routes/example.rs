use axum::{extract::{rejection::JsonRejection, State}, Json};
use tracing::info;

use service::example::domain::{AllEnvelope, PushInput, PushOutput};

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

/// Get secret message
#[utoipa::path(
    get, path = "/secret", tag = "secret",
    responses((status = 200, description = "Secret message", body = String))
)]
pub async fn secret(State(state): State<ServerState>) -> Json<&'static str> {
    Json(state.examples.get_secret_public())
}

/// Get all
#[utoipa::path(
    get, path = "/all", tag = "all",
    responses(
        (status = 200, description = "Every stored record", body = crate::openapi::AllEnvelopeDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn all(State(state): State<ServerState>) -> Result<Json<AllEnvelope>, JsonApiError> {
    Ok(Json(state.examples.list_all_enveloped().await?))
}

/// Push example
#[utoipa::path(
    post, path = "/push", tag = "push",
    request_body = crate::openapi::PushInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::PushOutputDoc),
        (status = 400, description = "Malformed body or id already exists", body = crate::openapi::ErrorBodyDoc),
        (status = 409, description = "Id length outside 3..=5", body = crate::openapi::ErrorBodyDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn push(
    State(state): State<ServerState>,
    payload: Result<Json<PushInput>, JsonRejection>,
) -> Result<Json<PushOutput>, JsonApiError> {
    let Json(input) = payload?;
    let out = state.examples.create_record(input).await?;
    info!(id = %out.data.id, "push ok");
    Ok(Json(out))
}
