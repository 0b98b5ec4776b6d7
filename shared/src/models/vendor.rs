//! Vendor reference
//!
//! Orders denormalize the vendor into each line; the full vendor record
//! (location, hours, promos) lives outside this engine.

use serde::{Deserialize, Serialize};

/// Minimal vendor identity carried on order lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VendorRef {
    pub id: String,
    pub name: String,
}

impl VendorRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
