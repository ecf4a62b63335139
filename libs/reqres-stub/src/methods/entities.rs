use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::{SeedUser, SUPPORT_TEXT, SUPPORT_URL};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserData {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl From<&SeedUser> for UserData {
    fn from(user: &SeedUser) -> Self {
        UserData {
            id: user.id,
            email: user.email.to_string(),
            first_name: user.first_name.to_string(),
            last_name: user.last_name.to_string(),
            avatar: user.avatar(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Support {
    pub url: String,
    pub text: String,
}

impl Default for Support {
    fn default() -> Self {
        Support {
            url: SUPPORT_URL.to_string(),
            text: SUPPORT_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SingleUserResponse {
    pub data: UserData,
    pub support: Support,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub id: i64,
    pub token: String,
}

/// Documented shape of the update body; any extra keys are echoed back too
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub name: Option<String>,
    pub job: Option<String>,
    pub updated_at: String,
}
