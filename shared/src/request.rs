//! Request payloads
//!
//! One closed struct per operation, compile-time checked instead of an
//! open bag of properties.

use crate::models::{DrinkSelection, VendorRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Create a new session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub creator_name: String,
}

/// Join an existing session by code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinSessionRequest {
    /// Matched case-insensitively against stored codes
    pub session_id: String,
    pub user_name: String,
}

/// Append a single pre-priced order line
///
/// The caller has already resolved the drink and computed
/// `total_price = unit price with modifiers x quantity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderRequest {
    pub session_id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub drink_id: String,
    pub drink_name: String,
    /// Customization-category id -> chosen option id
    pub customizations: BTreeMap<String, String>,
    pub quantity: u32,
    pub total_price: f64,
}

/// Append a batch of drink lines for one vendor
///
/// Prices are resolved against the catalog by the engine; the whole batch
/// is appended atomically or rejected as a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddVendorOrderRequest {
    pub session_id: String,
    pub user_id: String,
    pub vendor: VendorRef,
    pub drink_selections: Vec<DrinkSelection>,
}
