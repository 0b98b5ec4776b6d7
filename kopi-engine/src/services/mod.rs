//! Session services
//!
//! Validation rules and mutations over the [`SessionStore`](crate::store::SessionStore):
//! - [`LifecycleService`]: create, join, close
//! - [`OrderService`]: single and batch order aggregation

mod lifecycle;
mod orders;

pub use lifecycle::LifecycleService;
pub use orders::OrderService;

#[cfg(test)]
mod tests;
