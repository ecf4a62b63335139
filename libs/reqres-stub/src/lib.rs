//! # reqres-stub
//!
//! An in-process stand-in for the four reqres.in user endpoints, seeded with
//! the same public fixture users. Contract checks run against it when no live
//! base URL is configured.
//!
//! ```rust,ignore
//! let stub = reqres_stub::spawn_local().await?;
//! let base_url = stub.base_url(); // http://127.0.0.1:<port>
//! ```

pub mod error;
pub mod methods;
pub mod server;
pub mod shutdown;
pub mod state;

pub use server::{router, serve, spawn, spawn_local, RunningStub, StubApiDoc};
pub use state::AppState;
