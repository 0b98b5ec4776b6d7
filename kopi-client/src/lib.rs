//! Kopi Client - local session facade
//!
//! Holds the one session the local user is attached to, mirrored to
//! durable local storage for warm restart. The authoritative record always
//! lives in the engine's store; this crate only ever has a transient,
//! possibly-stale copy.

mod facade;

pub use facade::{FacadeError, SessionFacade};
