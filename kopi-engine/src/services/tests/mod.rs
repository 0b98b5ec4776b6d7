use super::*;
use crate::catalog::DrinkCatalog;
use crate::storage::MemoryBlobStore;
use crate::store::SessionStore;
use shared::error::SessionError;
use shared::models::{DrinkSelection, Session, VendorRef};
use shared::request::{
    AddOrderRequest, AddVendorOrderRequest, CreateSessionRequest, JoinSessionRequest,
};
use std::collections::BTreeMap;
use std::sync::Arc;


fn create_test_services() -> (Arc<SessionStore>, LifecycleService, OrderService) {
    let store = Arc::new(SessionStore::initialize(MemoryBlobStore::new()));
    let catalog = Arc::new(DrinkCatalog::singapore());
    let lifecycle = LifecycleService::new(store.clone());
    let orders = OrderService::new(store.clone(), catalog);
    (store, lifecycle, orders)
}

fn create_session(lifecycle: &LifecycleService, creator: &str) -> Session {
    lifecycle
        .create_session(CreateSessionRequest {
            creator_name: creator.to_string(),
        })
        .unwrap()
}

fn join(lifecycle: &LifecycleService, session_id: &str, user_name: &str) -> Session {
    lifecycle
        .join_session(JoinSessionRequest {
            session_id: session_id.to_string(),
            user_name: user_name.to_string(),
        })
        .unwrap()
}

fn add_order_request(
    session_id: &str,
    user_id: &str,
    quantity: u32,
    total_price: f64,
) -> AddOrderRequest {
    AddOrderRequest {
        session_id: session_id.to_string(),
        user_id: user_id.to_string(),
        restaurant_id: "r-42".to_string(),
        restaurant_name: "Tiong Bahru Kopitiam".to_string(),
        drink_id: "teh-tarik".to_string(),
        drink_name: "Teh Tarik".to_string(),
        customizations: BTreeMap::new(),
        quantity,
        total_price,
    }
}

fn selection(drink_id: &str, quantity: u32, picks: &[(&str, &str)]) -> DrinkSelection {
    DrinkSelection {
        drink_id: drink_id.to_string(),
        customizations: picks
            .iter()
            .map(|(c, o)| (c.to_string(), o.to_string()))
            .collect(),
        quantity,
    }
}

fn vendor_order_request(
    session_id: &str,
    user_id: &str,
    selections: Vec<DrinkSelection>,
) -> AddVendorOrderRequest {
    AddVendorOrderRequest {
        session_id: session_id.to_string(),
        user_id: user_id.to_string(),
        vendor: VendorRef::new("r-7", "Maxwell Hawker Centre"),
        drink_selections: selections,
    }
}

/// Invariant check used after every mutation in these tests
fn assert_total_consistent(session: &Session) {
    assert!(
        (session.total_amount - session.computed_total()).abs() < 1e-9,
        "total_amount {} != sum of order prices {}",
        session.total_amount,
        session.computed_total()
    );
}
