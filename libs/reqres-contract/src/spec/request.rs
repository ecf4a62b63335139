use std::fmt;
use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::constants::API_KEY_HEADER;
use crate::error::ContractError;

const APPLICATION_JSON: &str = "application/json";

/// How much of each exchange gets logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDetail {
    None,
    /// Method, URL and status only
    Summary,
    /// Summary plus headers and bodies
    #[default]
    All,
}

impl FromStr for LogDetail {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(LogDetail::None),
            "summary" => Ok(LogDetail::Summary),
            "all" => Ok(LogDetail::All),
            other => Err(ContractError::InvalidConfig(format!(
                "unknown log detail `{other}`"
            ))),
        }
    }
}

impl fmt::Display for LogDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogDetail::None => write!(f, "none"),
            LogDetail::Summary => write!(f, "summary"),
            LogDetail::All => write!(f, "all"),
        }
    }
}

/// Client-side defaults for every call made under a specification
#[derive(Debug, Clone)]
pub struct RequestSpec {
    base_url: String,
    headers: HeaderMap,
    log_detail: LogDetail,
}

impl RequestSpec {
    /// JSON in, JSON out, everything logged.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers,
            log_detail: LogDetail::All,
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds the `x-api-key` header. The value is never written to logs.
    pub fn with_api_key(self, key: &str) -> Result<Self, ContractError> {
        let mut value = HeaderValue::from_str(key)
            .map_err(|_| ContractError::InvalidConfig("api key is not a valid header value".to_string()))?;
        value.set_sensitive(true);
        Ok(self.with_header(HeaderName::from_static(API_KEY_HEADER), value))
    }

    pub fn with_log_detail(mut self, log_detail: LogDetail) -> Self {
        self.log_detail = log_detail;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn log_detail(&self) -> LogDetail {
        self.log_detail
    }

    /// Joins `path` onto the base URL; a leading slash on `path` is optional.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Headers rendered for logs, sensitive values masked
    pub fn loggable_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(name, value)| {
                let shown = if value.is_sensitive() {
                    "***".to_string()
                } else {
                    value.to_str().unwrap_or("<binary>").to_string()
                };
                (name.as_str().to_string(), shown)
            })
            .collect()
    }
}
