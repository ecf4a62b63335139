use serde::{Deserialize, Serialize};

/// Body of `POST /api/register`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful registration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterSuccess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Rejected registration, only sent with a 4xx status
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterFailure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// User representation returned by `GET /api/users/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The `{ "data": ... }` wrapper of single-resource responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

/// Profile fields shared by update requests and responses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
}

impl ProfileFields {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            job: Some(job.into()),
        }
    }
}

/// Body of `PUT /api/users/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    #[serde(flatten)]
    pub profile: ProfileFields,
}

impl From<ProfileFields> for ProfileUpdateRequest {
    fn from(profile: ProfileFields) -> Self {
        Self { profile }
    }
}

/// Update body carrying a client-chosen `updatedAt`, which the service overwrites
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateRequestWithTimestamp {
    #[serde(flatten)]
    pub profile: ProfileFields,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl ProfileUpdateRequestWithTimestamp {
    pub fn new(profile: ProfileFields, updated_at: impl Into<String>) -> Self {
        Self {
            profile,
            updated_at: Some(updated_at.into()),
        }
    }
}

/// Response of `PUT /api/users/{id}`; `updatedAt` is generated by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdateResponse {
    #[serde(flatten)]
    pub profile: ProfileFields,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}
