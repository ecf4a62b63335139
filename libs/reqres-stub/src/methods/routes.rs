// Endpoints mirrored from the public service
pub const USER_BY_ID_PATH: &str = "/api/users/{id}";
pub const REGISTER_PATH: &str = "/api/register";

// Stub-only routes
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const OPENAPI_JSON_PATH: &str = "/api-doc/openapi.json";
