use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    /// Rendered as an empty JSON object, the way the public backend does
    NotFound,
}

impl ApiError {
    pub fn missing_email() -> Self {
        ApiError::BadRequest("Missing email or username".to_string())
    }

    pub fn missing_password() -> Self {
        ApiError::BadRequest("Missing password".to_string())
    }

    pub fn undefined_user() -> Self {
        ApiError::BadRequest("Note: Only defined users succeed registration".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response()
            }
        }
    }
}
