//! Port abstraction for payment records keyed by gateway order id.
use async_trait::async_trait;

use crate::domain::{NewPayment, Payment, PaymentStatus};

use super::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Store a payment under its order id, replacing any record with the same
    /// order id.
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, StoreError>;

    /// Fetch the payment raised for `order_id`.
    async fn find_payment_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<Payment>, StoreError>;

    /// Move the payment for `order_id` to `status`, recording `payment_id`
    /// when given.
    ///
    /// The change is applied atomically and only when
    /// [`PaymentStatus::can_transition_to`] allows it. Returns the record as
    /// stored after the call, so callers can tell an applied transition from
    /// a rejected one; `None` when the order is unknown.
    async fn update_payment_status(
        &self,
        order_id: &str,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<Option<Payment>, StoreError>;

    /// All payments, newest first.
    async fn list_payments(&self) -> Result<Vec<Payment>, StoreError>;
}
