//! Session Model
//!
//! A session is a shared, code-identified group order: an ordered member
//! list plus an append-only order log with a running total. The persisted
//! layout keeps the camelCase keys and ISO-8601 timestamps of the stored
//! record format, so existing session databases round-trip losslessly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A member of a session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Unique within the store's lifetime
    pub id: String,
    /// Free text; compared case-insensitively for re-join checks
    pub name: String,
    pub joined_at: DateTime<Utc>,
}

/// One appended order line, immutable once added
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionOrder {
    pub id: String,
    /// Snapshot of the submitting user at submission time
    pub user_id: String,
    pub user_name: String,
    /// Denormalized vendor reference
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub drink_id: String,
    pub drink_name: String,
    /// Customization-category id -> chosen option id
    pub customizations: BTreeMap<String, String>,
    pub quantity: u32,
    /// Line total in SGD: (base + modifiers) x quantity
    pub price: f64,
    pub ordered_at: DateTime<Utc>,
}

/// Session entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// 6-character uppercase alphanumeric code
    pub id: String,
    /// Immutable after creation; only this user may close the session
    pub creator_id: String,
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
    /// Insertion order = join order; first entry is always the creator
    pub users: Vec<SessionUser>,
    /// Insertion order = submission order
    pub orders: Vec<SessionOrder>,
    /// true from creation until closed; never reactivated
    pub is_active: bool,
    /// Running sum of orders[].price
    pub total_amount: f64,
}

impl Session {
    /// Create a new active session with the creator as sole member
    pub fn new(id: String, creator_id: String, creator_name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            creator_id: creator_id.clone(),
            creator_name: creator_name.clone(),
            created_at: now,
            users: vec![SessionUser {
                id: creator_id,
                name: creator_name,
                joined_at: now,
            }],
            orders: Vec::new(),
            is_active: true,
            total_amount: 0.0,
        }
    }

    /// Look up a member by id
    pub fn find_user(&self, user_id: &str) -> Option<&SessionUser> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Look up a member by name, case-insensitively
    pub fn find_user_by_name(&self, name: &str) -> Option<&SessionUser> {
        self.users
            .iter()
            .find(|u| u.name.eq_ignore_ascii_case(name))
    }

    /// Re-derive the total from the order log
    ///
    /// `total_amount` is maintained incrementally; this is the invariant
    /// check used by callers that want to verify or repair it.
    pub fn computed_total(&self) -> f64 {
        self.orders.iter().map(|o| o.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_orders(prices: &[f64]) -> Session {
        let mut session = Session::new(
            "ABC123".to_string(),
            "user_1".to_string(),
            "Alice".to_string(),
        );
        for (i, price) in prices.iter().enumerate() {
            session.orders.push(SessionOrder {
                id: format!("order_{}", i),
                user_id: "user_1".to_string(),
                user_name: "Alice".to_string(),
                restaurant_id: "r1".to_string(),
                restaurant_name: "Kopitiam".to_string(),
                drink_id: "kopi".to_string(),
                drink_name: "Kopi".to_string(),
                customizations: BTreeMap::new(),
                quantity: 1,
                price: *price,
                ordered_at: Utc::now(),
            });
            session.total_amount += price;
        }
        session
    }

    #[test]
    fn new_session_has_creator_as_first_user() {
        let session = Session::new(
            "ABC123".to_string(),
            "user_1".to_string(),
            "Alice".to_string(),
        );
        assert_eq!(session.users.len(), 1);
        assert_eq!(session.users[0].id, session.creator_id);
        assert_eq!(session.users[0].name, "Alice");
        assert!(session.is_active);
        assert_eq!(session.total_amount, 0.0);
    }

    #[test]
    fn find_user_by_name_is_case_insensitive() {
        let session = session_with_orders(&[]);
        assert!(session.find_user_by_name("ALICE").is_some());
        assert!(session.find_user_by_name("alice").is_some());
        assert!(session.find_user_by_name("Bob").is_none());
    }

    #[test]
    fn computed_total_matches_running_total() {
        let session = session_with_orders(&[1.80, 3.60, 2.50]);
        assert!((session.total_amount - session.computed_total()).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_round_trip_preserves_instants() {
        let session = session_with_orders(&[4.20]);
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        assert_eq!(back.created_at, session.created_at);
        assert_eq!(back.orders[0].ordered_at, session.orders[0].ordered_at);
    }

    #[test]
    fn persisted_layout_uses_camel_case_keys() {
        let session = session_with_orders(&[]);
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("creatorId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("isActive").is_some());
        assert!(json.get("totalAmount").is_some());
    }
}
