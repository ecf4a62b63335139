use axum::extract::Path;
use axum::http::StatusCode;

use crate::methods::routes::USER_BY_ID_PATH;

#[utoipa::path(
    delete,
    path = USER_BY_ID_PATH,
    tag = "users",
    params(
        ("id" = i64, Path, description = "User id, existing or not")
    ),
    responses(
        (status = 204, description = "Always succeeds"),
    )
)]
pub async fn delete_user(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}
