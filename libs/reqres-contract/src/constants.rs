// Environment variables
pub const REQRES_BASE_URL: &str = "REQRES_BASE_URL";
pub const REQRES_API_KEY: &str = "REQRES_API_KEY";
pub const REQRES_TIMEOUT_SECS: &str = "REQRES_TIMEOUT_SECS";
pub const REQRES_LOG: &str = "REQRES_LOG";
pub const REQRES_EXISTING_USER_ID: &str = "REQRES_EXISTING_USER_ID";
pub const REQRES_MISSING_USER_ID: &str = "REQRES_MISSING_USER_ID";
pub const REQRES_REGISTER_EMAIL: &str = "REQRES_REGISTER_EMAIL";
pub const REQRES_REGISTER_PASSWORD: &str = "REQRES_REGISTER_PASSWORD";
pub const REQRES_REGISTER_ID: &str = "REQRES_REGISTER_ID";
pub const REQRES_REGISTER_TOKEN: &str = "REQRES_REGISTER_TOKEN";

// Defaults
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EXISTING_USER_ID: i64 = 2;
pub const DEFAULT_MISSING_USER_ID: i64 = 9999;

// Fixture values owned by the public backend
pub const FIXTURE_REGISTER_EMAIL: &str = "eve.holt@reqres.in";
pub const FIXTURE_REGISTER_PASSWORD: &str = "pistol";
pub const FIXTURE_REGISTER_ID: i64 = 4;
pub const FIXTURE_REGISTER_TOKEN: &str = "QpwL5tke4Pnpja7X4";
pub const MISSING_PASSWORD_ERROR: &str = "Missing password";

pub const FIXTURE_PROFILE_NAME: &str = "morpheus";
pub const FIXTURE_PROFILE_JOB: &str = "zion resident";
pub const FIXTURE_CLIENT_UPDATED_AT: &str = "2020-01-01T00:00:00.000Z";

// Paths
pub const REGISTER_PATH: &str = "/api/register";
pub const USERS_PATH: &str = "/api/users";

pub const API_KEY_HEADER: &str = "x-api-key";

pub fn user_path(id: i64) -> String {
    format!("{}/{}", USERS_PATH, id)
}
