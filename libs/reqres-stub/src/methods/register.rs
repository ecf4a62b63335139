use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::methods::entities::{RegisterRequest, RegisterResponse};
use crate::methods::routes::REGISTER_PATH;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = REGISTER_PATH,
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = RegisterResponse),
        (status = 400, description = "Missing email, missing password or undefined user", body = crate::error::ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let email = payload
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(ApiError::missing_email)?;
    payload
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(ApiError::missing_password)?;

    let user = state
        .user_by_email(&email)
        .ok_or_else(ApiError::undefined_user)?;
    tracing::debug!(user_id = user.id, "registration accepted");

    Ok(Json(RegisterResponse {
        id: user.id,
        token: user.token(),
    }))
}
