use async_trait::async_trait;
use uuid::Uuid;

use super::{MemoryStore, lock, newest_first};
use crate::domain::ports::{PaymentRepository, StoreError};
use crate::domain::{NewPayment, Payment, PaymentStatus};

#[async_trait]
impl PaymentRepository for MemoryStore {
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, StoreError> {
        let NewPayment {
            order_id,
            amount,
            currency,
            plan_name,
            category,
            status,
            customer_name,
            customer_email,
            customer_phone,
        } = payment;
        let created = Payment {
            id: Uuid::new_v4(),
            order_id,
            payment_id: None,
            amount,
            currency,
            plan_name,
            category,
            status,
            customer_name,
            customer_email,
            customer_phone,
            created_at: self.now(),
        };
        lock(&self.payments).insert(created.order_id.clone(), self.sequenced(created.clone()));
        Ok(created)
    }

    async fn find_payment_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<Payment>, StoreError> {
        Ok(lock(&self.payments)
            .get(order_id)
            .map(|entry| entry.record.clone()))
    }

    async fn update_payment_status(
        &self,
        order_id: &str,
        status: PaymentStatus,
        payment_id: Option<String>,
    ) -> Result<Option<Payment>, StoreError> {
        let mut payments = lock(&self.payments);
        let Some(entry) = payments.get_mut(order_id) else {
            return Ok(None);
        };
        let payment = &mut entry.record;
        if payment.status.can_transition_to(status) {
            payment.status = status;
            if payment_id.is_some() {
                payment.payment_id = payment_id;
            }
        }
        Ok(Some(payment.clone()))
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, StoreError> {
        Ok(newest_first(lock(&self.payments).values(), |payment| {
            payment.created_at
        }))
    }
}
