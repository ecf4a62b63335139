//! Request and response specifications.
//!
//! A [`Specification`] is the pair a check installs before its call: where to
//! send and how (request side), and what the reply must look like before any
//! check-specific assertion runs (response side).

mod request;
mod response;

pub use request::{LogDetail, RequestSpec};
pub use response::ResponseSpec;

/// Installed request/response pair
#[derive(Debug, Clone)]
pub struct Specification {
    pub request: RequestSpec,
    pub response: ResponseSpec,
}

impl Specification {
    pub fn new(request: RequestSpec, response: ResponseSpec) -> Self {
        Self { request, response }
    }
}
