use axum::extract::Path;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::methods::entities::{UpdateUserRequest, UpdateUserResponse};
use crate::methods::routes::USER_BY_ID_PATH;

pub const UPDATED_AT_KEY: &str = "updatedAt";

#[utoipa::path(
    put,
    path = USER_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id, not checked")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Body echoed with a server-side updatedAt", body = UpdateUserResponse),
    )
)]
pub async fn update_user(
    Path(_id): Path<String>,
    Json(mut body): Json<Map<String, Value>>,
) -> Json<Map<String, Value>> {
    // Any client-supplied value is replaced.
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    body.insert(UPDATED_AT_KEY.to_string(), Value::String(now));
    Json(body)
}
