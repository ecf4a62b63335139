use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_EXISTING_USER_ID, DEFAULT_MISSING_USER_ID, DEFAULT_TIMEOUT_SECS,
    FIXTURE_REGISTER_EMAIL, FIXTURE_REGISTER_ID, FIXTURE_REGISTER_PASSWORD,
    FIXTURE_REGISTER_TOKEN, REQRES_API_KEY, REQRES_BASE_URL, REQRES_EXISTING_USER_ID,
    REQRES_LOG, REQRES_MISSING_USER_ID, REQRES_REGISTER_EMAIL, REQRES_REGISTER_ID,
    REQRES_REGISTER_PASSWORD, REQRES_REGISTER_TOKEN, REQRES_TIMEOUT_SECS,
};
use crate::error::ContractError;
use crate::spec::{LogDetail, RequestSpec};

/// Credentials that register successfully and the values the backend answers with.
///
/// The expected id and token belong to the external fixture backend and can
/// change without notice, hence overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFixture {
    pub email: String,
    pub password: String,
    pub expected_id: i64,
    pub expected_token: String,
}

impl Default for RegistrationFixture {
    fn default() -> Self {
        Self {
            email: FIXTURE_REGISTER_EMAIL.to_string(),
            password: FIXTURE_REGISTER_PASSWORD.to_string(),
            expected_id: FIXTURE_REGISTER_ID,
            expected_token: FIXTURE_REGISTER_TOKEN.to_string(),
        }
    }
}

impl RegistrationFixture {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or empty values fall back to the public fixture.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            email: non_empty(REQRES_REGISTER_EMAIL).unwrap_or(default.email),
            password: non_empty(REQRES_REGISTER_PASSWORD).unwrap_or(default.password),
            expected_id: non_empty(REQRES_REGISTER_ID)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.expected_id),
            expected_token: non_empty(REQRES_REGISTER_TOKEN).unwrap_or(default.expected_token),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContractConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub log_detail: LogDetail,
    pub existing_user_id: i64,
    pub missing_user_id: i64,
    pub registration: RegistrationFixture,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_detail: LogDetail::All,
            existing_user_id: DEFAULT_EXISTING_USER_ID,
            missing_user_id: DEFAULT_MISSING_USER_ID,
            registration: RegistrationFixture::default(),
        }
    }
}

impl ContractConfig {
    pub fn from_env() -> Self {
        let default = Self::default();

        let base_url = std::env::var(REQRES_BASE_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default.base_url);

        let api_key = std::env::var(REQRES_API_KEY)
            .ok()
            .filter(|v| !v.is_empty());

        let timeout_secs: u64 = std::env::var(REQRES_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let log_detail = match std::env::var(REQRES_LOG) {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!(env_var = REQRES_LOG, error = %e, "ignoring invalid log detail");
                default.log_detail
            }),
            Err(_) => default.log_detail,
        };

        let existing_user_id = std::env::var(REQRES_EXISTING_USER_ID)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default.existing_user_id);

        let missing_user_id = std::env::var(REQRES_MISSING_USER_ID)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default.missing_user_id);

        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
            log_detail,
            existing_user_id,
            missing_user_id,
            registration: RegistrationFixture::from_env(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request side of every specification built from this configuration
    pub fn request_spec(&self) -> Result<RequestSpec, ContractError> {
        let spec = RequestSpec::new(self.base_url.as_str()).with_log_detail(self.log_detail);
        match &self.api_key {
            Some(key) => spec.with_api_key(key),
            None => Ok(spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_public_service() {
        let config = ContractConfig::default();

        assert_eq!(config.base_url, "https://reqres.in");
        assert_eq!(config.existing_user_id, 2);
        assert_eq!(config.missing_user_id, 9999);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.registration.expected_id, 4);
        assert_eq!(config.registration.expected_token, "QpwL5tke4Pnpja7X4");
    }

    #[test]
    fn empty_registration_values_fall_back_to_fixture() {
        let fixture = RegistrationFixture::from_lookup(|key| match key {
            REQRES_REGISTER_EMAIL | REQRES_REGISTER_PASSWORD | REQRES_REGISTER_TOKEN => {
                Some(String::new())
            }
            _ => None,
        });

        assert_eq!(fixture, RegistrationFixture::default());
    }

    #[test]
    fn registration_values_override_fixture() {
        let fixture = RegistrationFixture::from_lookup(|key| match key {
            REQRES_REGISTER_EMAIL => Some("tracey.ramos@reqres.in".to_string()),
            REQRES_REGISTER_ID => Some("6".to_string()),
            REQRES_REGISTER_TOKEN => Some("drifted".to_string()),
            _ => None,
        });

        assert_eq!(fixture.email, "tracey.ramos@reqres.in");
        assert_eq!(fixture.password, "pistol");
        assert_eq!(fixture.expected_id, 6);
        assert_eq!(fixture.expected_token, "drifted");
    }

    #[test]
    fn request_spec_carries_base_url_and_key() {
        let mut config = ContractConfig::default().with_base_url("http://127.0.0.1:3334");
        config.api_key = Some("reqres-free-v1".to_string());
        config.log_detail = LogDetail::Summary;

        let spec = config.request_spec().unwrap();

        assert_eq!(spec.base_url(), "http://127.0.0.1:3334");
        assert_eq!(spec.log_detail(), LogDetail::Summary);
        assert!(spec.headers().contains_key("x-api-key"));
    }

    #[test]
    fn request_spec_without_key_sends_no_key_header() {
        let spec = ContractConfig::default().request_spec().unwrap();
        assert!(!spec.headers().contains_key("x-api-key"));
    }
}
