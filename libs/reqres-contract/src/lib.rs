//! # reqres-contract
//!
//! Contract checks for the public reqres.in user-management API.
//!
//! A check is always the same straight line: install a request/response
//! [`Specification`] on a [`ContractClient`], issue exactly one call, decode
//! the body into a model and assert its invariants.
//!
//! ```rust,ignore
//! use reqres_contract::{ContractConfig, ContractSuite};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reqres_contract::ContractError> {
//!     let mut suite = ContractSuite::new(ContractConfig::from_env())?;
//!     let user = suite.get_user(2).await?;
//!     println!("{:?}", user.email);
//!     Ok(())
//! }
//! ```
//!
//! The installed specification lives in the client value, not in a global, so
//! every suite is isolated from every other one.

pub mod assertions;
pub mod client;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod scenarios;
pub mod spec;

pub use client::{ContractClient, Exchange};
pub use clock::{Clock, SystemClock};
pub use config::{ContractConfig, RegistrationFixture};
pub use error::ContractError;
pub use models::*;
pub use scenarios::{ContractSuite, Scenario, ScenarioReport};
pub use spec::{LogDetail, RequestSpec, ResponseSpec, Specification};
