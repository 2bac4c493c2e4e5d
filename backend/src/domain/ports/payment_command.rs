//! Driving port for the checkout flow.
//!
//! HTTP handlers depend on this trait rather than on the orchestrator, so
//! handler tests can script outcomes without a gateway or store.

use async_trait::async_trait;

use crate::domain::{CheckoutOrder, Error, OrderRequest, PaymentVerification};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentCommand: Send + Sync {
    /// Raise a gateway order and record it as `created`.
    async fn create_order(&self, request: OrderRequest) -> Result<CheckoutOrder, Error>;

    /// Reconcile a checkout callback and record the outcome.
    async fn verify_payment(&self, verification: PaymentVerification) -> Result<(), Error>;
}
