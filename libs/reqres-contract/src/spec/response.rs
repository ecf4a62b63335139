use reqwest::StatusCode;

use crate::client::Exchange;
use crate::error::ContractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyExpectation {
    Json,
    Empty,
}

/// Expectations applied to every response before check-specific assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    expected_status: StatusCode,
    body: BodyExpectation,
}

impl ResponseSpec {
    pub fn ok_200() -> Self {
        Self::json(StatusCode::OK)
    }

    pub fn bad_request_400() -> Self {
        Self::json(StatusCode::BAD_REQUEST)
    }

    pub fn not_found_404() -> Self {
        Self::json(StatusCode::NOT_FOUND)
    }

    /// Any status code. Codes that carry no body (1xx, 204, 304) expect an
    /// empty body instead of a JSON content type.
    pub fn with_status(code: u16) -> Result<Self, ContractError> {
        let status = StatusCode::from_u16(code).map_err(|_| ContractError::InvalidStatus(code))?;
        let body = if carries_no_body(status) {
            BodyExpectation::Empty
        } else {
            BodyExpectation::Json
        };
        Ok(Self {
            expected_status: status,
            body,
        })
    }

    fn json(status: StatusCode) -> Self {
        Self {
            expected_status: status,
            body: BodyExpectation::Json,
        }
    }

    pub fn expected_status(&self) -> StatusCode {
        self.expected_status
    }

    pub fn expects_json(&self) -> bool {
        self.body == BodyExpectation::Json
    }

    /// Status first, then content type or emptiness.
    pub fn verify(&self, exchange: &Exchange) -> Result<(), ContractError> {
        if exchange.status != self.expected_status {
            return Err(ContractError::UnexpectedStatus {
                expected: self.expected_status.as_u16(),
                actual: exchange.status.as_u16(),
                exchange: exchange.to_string(),
            });
        }

        match self.body {
            BodyExpectation::Json => {
                let content_type = exchange.content_type.as_deref().unwrap_or_default();
                if !is_json(content_type) {
                    return Err(ContractError::UnexpectedContentType {
                        actual: content_type.to_string(),
                        exchange: exchange.to_string(),
                    });
                }
            }
            BodyExpectation::Empty => {
                if !exchange.body.is_empty() {
                    return Err(ContractError::UnexpectedBody {
                        status: exchange.status.as_u16(),
                        length: exchange.body.len(),
                        exchange: exchange.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn carries_no_body(status: StatusCode) -> bool {
    status.is_informational()
        || status == StatusCode::NO_CONTENT
        || status == StatusCode::NOT_MODIFIED
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")
}
