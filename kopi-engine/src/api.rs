//! SessionApi - the logical request/response surface
//!
//! Bundles the lifecycle and order services behind the tagged
//! [`SessionResponse`] shape: callers branch on `success` instead of
//! matching error variants. Mutating calls surface either the updated
//! session or a human-readable error string; there is no partial-success
//! form.

use crate::catalog::DrinkCatalog;
use crate::services::{LifecycleService, OrderService};
use crate::store::SessionStore;
use shared::models::Session;
use shared::request::{
    AddOrderRequest, AddVendorOrderRequest, CreateSessionRequest, JoinSessionRequest,
};
use shared::response::SessionResponse;
use std::sync::Arc;

/// Callable operation surface over one store
pub struct SessionApi {
    store: Arc<SessionStore>,
    lifecycle: LifecycleService,
    orders: OrderService,
}

impl SessionApi {
    pub fn new(store: Arc<SessionStore>, catalog: Arc<DrinkCatalog>) -> Self {
        Self {
            lifecycle: LifecycleService::new(store.clone()),
            orders: OrderService::new(store.clone(), catalog),
            store,
        }
    }

    pub fn create_session(&self, creator_name: impl Into<String>) -> SessionResponse {
        match self.lifecycle.create_session(CreateSessionRequest {
            creator_name: creator_name.into(),
        }) {
            Ok(session) => {
                let message = format!("Session {} created successfully", session.id);
                SessionResponse::ok_with_message(session, message)
            }
            Err(e) => e.into(),
        }
    }

    pub fn join_session(&self, session_id: &str, user_name: &str) -> SessionResponse {
        // Distinguish a fresh join from an idempotent re-join for the message
        let already_member = self
            .store
            .get(session_id)
            .is_some_and(|s| s.find_user_by_name(user_name).is_some());
        match self.lifecycle.join_session(JoinSessionRequest {
            session_id: session_id.to_string(),
            user_name: user_name.to_string(),
        }) {
            Ok(session) => {
                let message = if already_member {
                    "Welcome back to the session!".to_string()
                } else {
                    format!("Successfully joined session {}", session.id)
                };
                SessionResponse::ok_with_message(session, message)
            }
            Err(e) => e.into(),
        }
    }

    pub fn get_session(&self, session_id: &str) -> SessionResponse {
        self.lifecycle.get_session(session_id).into()
    }

    pub fn add_order(&self, request: AddOrderRequest) -> SessionResponse {
        match self.orders.add_order(request) {
            Ok(session) => SessionResponse::ok_with_message(session, "Order added successfully"),
            Err(e) => e.into(),
        }
    }

    pub fn add_vendor_order(&self, request: AddVendorOrderRequest) -> SessionResponse {
        let line_count = request.drink_selections.len();
        match self.orders.add_vendor_order(request) {
            Ok(session) => {
                let message = format!(
                    "{} drink order(s) added to session successfully",
                    line_count
                );
                SessionResponse::ok_with_message(session, message)
            }
            Err(e) => e.into(),
        }
    }

    pub fn close_session(&self, session_id: &str, user_id: &str) -> SessionResponse {
        match self.lifecycle.close_session(session_id, user_id) {
            Ok(session) => {
                SessionResponse::ok_with_message(session, "Session closed successfully")
            }
            Err(e) => e.into(),
        }
    }

    pub fn list_sessions(&self) -> Vec<Session> {
        self.lifecycle.list_sessions()
    }

    pub fn available_session_ids(&self) -> Vec<String> {
        self.lifecycle.available_session_ids()
    }
}
