//! Kopi Engine - authoritative session store and services
//!
//! The engine owns session records for their full lifetime:
//! - [`storage`]: injected durability capability (JSON blobs)
//! - [`store`]: the session store with explicit initialize/close
//! - [`ids`]: session code and user/order id generation
//! - [`catalog`]: read-only drink catalog used to price batch orders
//! - [`services`]: lifecycle (create/join/close) and order aggregation
//! - [`api`]: the tagged success/error surface over both services

pub mod api;
pub mod catalog;
pub mod ids;
pub mod logger;
pub mod services;
pub mod storage;
pub mod store;

pub use api::SessionApi;
pub use catalog::DrinkCatalog;
pub use services::{LifecycleService, OrderService};
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore, StorageError};
pub use store::SessionStore;
