//! Order aggregation - appending drink orders to a session
//!
//! Orders are immutable once appended; `total_amount` only ever grows
//! while a session is active. Batch vendor orders resolve every line
//! against the catalog before touching the session, so an unresolvable
//! drink rejects the whole batch with no partial append.

use crate::catalog::DrinkCatalog;
use crate::ids;
use crate::store::SessionStore;
use chrono::Utc;
use shared::error::{SessionError, SessionResult};
use shared::models::{Session, SessionOrder};
use shared::request::{AddOrderRequest, AddVendorOrderRequest};
use std::sync::Arc;

/// Order append operations against the store
pub struct OrderService {
    store: Arc<SessionStore>,
    catalog: Arc<DrinkCatalog>,
}

impl OrderService {
    pub fn new(store: Arc<SessionStore>, catalog: Arc<DrinkCatalog>) -> Self {
        Self { store, catalog }
    }

    /// Append one pre-priced order line
    pub fn add_order(&self, request: AddOrderRequest) -> SessionResult<Session> {
        let session = self.store.mutate(&request.session_id, |session| {
            if !session.is_active {
                return Err(SessionError::Inactive);
            }
            let user = session
                .find_user(&request.user_id)
                .ok_or(SessionError::UserNotFound)?;
            let order = SessionOrder {
                id: ids::order_id(),
                user_id: user.id.clone(),
                user_name: user.name.clone(),
                restaurant_id: request.restaurant_id.clone(),
                restaurant_name: request.restaurant_name.clone(),
                drink_id: request.drink_id.clone(),
                drink_name: request.drink_name.clone(),
                customizations: request.customizations.clone(),
                quantity: request.quantity,
                price: request.total_price,
                ordered_at: Utc::now(),
            };
            session.total_amount += order.price;
            session.orders.push(order);
            Ok(())
        })?;
        tracing::debug!(
            session_id = %session.id,
            total = session.total_amount,
            "Order added"
        );
        Ok(session)
    }

    /// Append a batch of catalog-priced lines for one vendor
    ///
    /// All lines are added and the total updated together, or the whole
    /// batch is rejected.
    pub fn add_vendor_order(&self, request: AddVendorOrderRequest) -> SessionResult<Session> {
        // Resolve drinks and prices up front; nothing is mutated on failure
        let mut priced = Vec::with_capacity(request.drink_selections.len());
        for selection in &request.drink_selections {
            let drink = self
                .catalog
                .get(&selection.drink_id)
                .ok_or_else(|| SessionError::DrinkNotFound(selection.drink_id.clone()))?;
            let line_price = self.catalog.line_price(selection)?;
            priced.push((selection, drink.name.clone(), line_price));
        }

        let line_count = priced.len();
        let session = self.store.mutate(&request.session_id, |session| {
            if !session.is_active {
                return Err(SessionError::Inactive);
            }
            let user = session
                .find_user(&request.user_id)
                .ok_or(SessionError::UserNotFound)?;
            let (user_id, user_name) = (user.id.clone(), user.name.clone());
            let mut batch_total = 0.0;
            for (selection, drink_name, line_price) in &priced {
                session.orders.push(SessionOrder {
                    id: ids::order_id(),
                    user_id: user_id.clone(),
                    user_name: user_name.clone(),
                    restaurant_id: request.vendor.id.clone(),
                    restaurant_name: request.vendor.name.clone(),
                    drink_id: selection.drink_id.clone(),
                    drink_name: drink_name.clone(),
                    customizations: selection.customizations.clone(),
                    quantity: selection.quantity,
                    price: *line_price,
                    ordered_at: Utc::now(),
                });
                batch_total += line_price;
            }
            session.total_amount += batch_total;
            Ok(())
        })?;
        tracing::debug!(
            session_id = %session.id,
            lines = line_count,
            total = session.total_amount,
            "Vendor order added"
        );
        Ok(session)
    }
}
