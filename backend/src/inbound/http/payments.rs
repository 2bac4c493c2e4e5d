//! Checkout endpoints and the admin payments listing.
//!
//! ```text
//! POST /api/payment/create-order {"amount":5999,"planName":"Achieve Online","category":"10-12 Students"}
//! POST /api/payment/verify       {"razorpay_order_id":"...","razorpay_payment_id":"...","razorpay_signature":"..."}
//! GET  /api/admin/payments
//! ```

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CheckoutOrder, OrderRequest, Payment, PaymentStatus, PaymentVerification};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::store_error;
use crate::inbound::http::schemas::{CheckoutOrderSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate;

const VERIFIED_MESSAGE: &str = "Payment verified successfully";

/// Order request body in major currency units.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 5999)]
    pub amount: f64,
    #[schema(example = "Achieve Online")]
    pub plan_name: String,
    #[schema(example = "10-12 Students")]
    pub category: String,
}

impl From<CreateOrderRequest> for OrderRequest {
    fn from(value: CreateOrderRequest) -> Self {
        Self {
            amount: value.amount,
            plan_name: value.plan_name,
            category: value.category,
        }
    }
}

/// Checkout callback fields, named as the gateway's widget reports them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

impl From<VerifyPaymentRequest> for PaymentVerification {
    fn from(value: VerifyPaymentRequest) -> Self {
        Self {
            order_id: value.razorpay_order_id,
            payment_id: value.razorpay_payment_id,
            signature: value.razorpay_signature,
        }
    }
}

/// Verification outcome.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    #[schema(value_type = String, example = "Payment verified successfully")]
    pub message: &'static str,
}

/// Payment row for the admin dashboard.
///
/// `packageName` and `email` repeat `planName` and `customerEmail` under the
/// names the dashboard table reads.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminPaymentView {
    pub id: Uuid,
    pub order_id: String,
    pub payment_id: Option<String>,
    /// Amount in minor units.
    pub amount: i64,
    pub currency: String,
    pub plan_name: String,
    pub package_name: String,
    pub category: String,
    #[schema(value_type = String, example = "paid")]
    pub status: PaymentStatus,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub email: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for AdminPaymentView {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            order_id: payment.order_id,
            payment_id: payment.payment_id,
            amount: payment.amount,
            currency: payment.currency,
            package_name: payment.plan_name.clone(),
            plan_name: payment.plan_name,
            category: payment.category,
            status: payment.status,
            email: payment.customer_email.clone(),
            customer_name: payment.customer_name,
            customer_email: payment.customer_email,
            customer_phone: payment.customer_phone,
            created_at: payment.created_at,
        }
    }
}

/// Raise a gateway order for the chosen plan.
#[utoipa::path(
    post,
    path = "/api/payment/create-order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order raised", body = CheckoutOrderSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Payment gateway not configured", body = ErrorSchema),
        (status = 502, description = "Gateway rejected the order", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "createOrder",
    security([])
)]
#[post("/payment/create-order")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<CreateOrderRequest>,
) -> ApiResult<web::Json<CheckoutOrder>> {
    validate(&*payload)?;
    let order = state.payments.create_order(payload.into_inner().into()).await?;
    Ok(web::Json(order))
}

/// Reconcile the checkout callback.
///
/// A signature mismatch marks the payment failed and answers 400 with
/// `details.code = "invalid_signature"`.
#[utoipa::path(
    post,
    path = "/api/payment/verify",
    request_body = VerifyPaymentRequest,
    responses(
        (status = 200, description = "Payment verified", body = VerifyPaymentResponse),
        (status = 400, description = "Invalid request or signature", body = ErrorSchema),
        (status = 404, description = "Unknown order", body = ErrorSchema),
        (status = 409, description = "Payment already finalised", body = ErrorSchema),
        (status = 500, description = "Payment gateway not configured", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "verifyPayment",
    security([])
)]
#[post("/payment/verify")]
pub async fn verify_payment(
    state: web::Data<HttpState>,
    payload: web::Json<VerifyPaymentRequest>,
) -> ApiResult<web::Json<VerifyPaymentResponse>> {
    let verification: PaymentVerification = payload.into_inner().into();
    state.payments.verify_payment(verification).await?;
    Ok(web::Json(VerifyPaymentResponse {
        success: true,
        message: VERIFIED_MESSAGE,
    }))
}

/// Every stored payment, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/payments",
    responses(
        (status = 200, description = "Payments", body = [AdminPaymentView]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminListPayments"
)]
#[get("/payments")]
pub async fn list_payments(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<AdminPaymentView>>> {
    session.require_admin()?;
    let payments = state
        .payment_records
        .list_payments()
        .await
        .map_err(store_error("list payments"))?;
    Ok(web::Json(payments.into_iter().map(Into::into).collect()))
}
