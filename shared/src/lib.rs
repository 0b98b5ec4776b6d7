//! Shared types for the kopi session engine
//!
//! Common types used across the engine and client crates: session domain
//! models, drink catalog types, error taxonomy, request payloads and the
//! tagged response surface.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use error::{SessionError, SessionResult};
pub use response::SessionResponse;
pub use serde::{Deserialize, Serialize};
