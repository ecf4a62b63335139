use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::methods::entities::{SingleUserResponse, Support, UserData};
use crate::methods::routes::USER_BY_ID_PATH;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = USER_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = SingleUserResponse),
        (status = 404, description = "Unknown user, empty JSON object"),
    )
)]
pub async fn get_user_by_id(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SingleUserResponse>, ApiError> {
    let id: i64 = id.parse().map_err(|_| ApiError::NotFound)?;

    let user = state.user(id).ok_or(ApiError::NotFound)?;
    tracing::debug!(user_id = id, "serving seeded user");

    Ok(Json(SingleUserResponse {
        data: UserData::from(user),
        support: Support::default(),
    }))
}
