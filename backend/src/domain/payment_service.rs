//! Checkout orchestration: raise gateway orders and reconcile callbacks.
//!
//! The service is the only writer of payment status. Order creation records
//! a `created` payment keyed by the gateway order id; verification recomputes
//! the callback signature and moves the payment to `paid` or `failed` exactly
//! once.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::Serialize;
use tracing::{error, info, warn};

use super::ports::{
    GatewayCredentials, GatewayOrderRequest, PaymentCommand, PaymentGateway, PaymentGatewayError,
    PaymentRepository, StoreError,
};
use super::{
    DEFAULT_CURRENCY, Error, NewPayment, Payment, PaymentStatus, minor_units_from_major,
    verify_checkout,
};

/// Message returned whenever gateway credentials are absent.
pub const GATEWAY_NOT_CONFIGURED: &str = "Payment gateway not configured";
/// Message returned when the gateway refuses or fails to raise an order.
pub const ORDER_CREATION_FAILED: &str = "Failed to create order";
/// Message returned when a callback signature does not match.
pub const INVALID_SIGNATURE: &str = "Invalid signature";
/// Message returned for callbacks referencing an unknown order.
pub const ORDER_NOT_FOUND: &str = "Payment order not found";
/// Message returned when a callback contradicts an already final payment.
pub const ALREADY_FINALISED: &str = "Payment already finalised";

/// Validated order request in major currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub amount: f64,
    pub plan_name: String,
    pub category: String,
}

/// Order details handed to the browser to open hosted checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOrder {
    pub id: String,
    /// Amount in minor units, as issued by the gateway.
    pub amount: i64,
    pub currency: String,
    pub key_id: String,
}

/// Checkout callback fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentVerification {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Payment orchestrator over a payment repository and a gateway.
pub struct PaymentService {
    payments: Arc<dyn PaymentRepository>,
    gateway: Arc<dyn PaymentGateway>,
    credentials: Option<GatewayCredentials>,
    clock: Arc<dyn Clock>,
}

impl PaymentService {
    /// Build the service. `credentials` is `None` when the merchant keys are
    /// not configured; every operation then fails with a configuration error.
    pub fn new(
        payments: Arc<dyn PaymentRepository>,
        gateway: Arc<dyn PaymentGateway>,
        credentials: Option<GatewayCredentials>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            payments,
            gateway,
            credentials,
            clock,
        }
    }

    fn credentials(&self) -> Result<&GatewayCredentials, Error> {
        self.credentials.as_ref().ok_or_else(|| {
            error!("payment gateway credentials are not configured");
            Error::configuration(GATEWAY_NOT_CONFIGURED)
        })
    }

    fn receipt(&self) -> String {
        format!("receipt_{}", self.clock.utc().timestamp_millis())
    }

    async fn finalise(
        &self,
        verification: &PaymentVerification,
        target: PaymentStatus,
    ) -> Result<Payment, Error> {
        let payment_id = matches!(target, PaymentStatus::Paid)
            .then(|| verification.payment_id.clone());
        let stored = self
            .payments
            .update_payment_status(&verification.order_id, target, payment_id)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| unknown_order(&verification.order_id))?;
        if stored.status != target {
            warn!(
                order_id = %verification.order_id,
                stored = %stored.status,
                attempted = %target,
                "payment callback contradicts final status"
            );
            return Err(Error::conflict(ALREADY_FINALISED));
        }
        Ok(stored)
    }
}

fn store_failure(err: StoreError) -> Error {
    error!(error = %err, "payment repository failed");
    Error::internal("payment storage failed")
}

fn gateway_failure(err: PaymentGatewayError) -> Error {
    error!(error = %err, "payment gateway order creation failed");
    Error::gateway(ORDER_CREATION_FAILED)
}

fn unknown_order(order_id: &str) -> Error {
    warn!(order_id, "payment callback for unknown order");
    Error::not_found(ORDER_NOT_FOUND)
}

fn invalid_signature() -> Error {
    Error::invalid_request(INVALID_SIGNATURE)
        .with_details(serde_json::json!({ "code": "invalid_signature" }))
}

#[async_trait]
impl PaymentCommand for PaymentService {
    async fn create_order(&self, request: OrderRequest) -> Result<CheckoutOrder, Error> {
        let credentials = self.credentials()?;
        let amount = minor_units_from_major(request.amount).map_err(|err| {
            Error::invalid_request(err.to_string())
                .with_details(serde_json::json!({ "field": "amount", "code": "amount" }))
        })?;

        let gateway_request = GatewayOrderRequest {
            amount,
            currency: DEFAULT_CURRENCY.to_owned(),
            receipt: self.receipt(),
        };
        let order = self
            .gateway
            .create_order(credentials, &gateway_request)
            .await
            .map_err(gateway_failure)?;

        self.payments
            .create_payment(NewPayment::created(
                order.id.clone(),
                amount,
                request.plan_name,
                request.category,
            ))
            .await
            .map_err(store_failure)?;
        info!(order_id = %order.id, amount, "payment order created");

        Ok(CheckoutOrder {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
            key_id: credentials.key_id().to_owned(),
        })
    }

    async fn verify_payment(&self, verification: PaymentVerification) -> Result<(), Error> {
        let credentials = self.credentials()?;
        let authentic = verify_checkout(
            credentials.key_secret(),
            &verification.order_id,
            &verification.payment_id,
            &verification.signature,
        );

        if authentic {
            self.finalise(&verification, PaymentStatus::Paid).await?;
            info!(order_id = %verification.order_id, "payment verified");
            Ok(())
        } else {
            self.finalise(&verification, PaymentStatus::Failed).await?;
            warn!(order_id = %verification.order_id, "payment signature mismatch");
            Err(invalid_signature())
        }
    }
}
