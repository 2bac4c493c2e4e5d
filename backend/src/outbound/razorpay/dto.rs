//! Wire shapes for the Razorpay Orders API.

use serde::{Deserialize, Serialize};

use crate::domain::ports::{GatewayOrder, GatewayOrderRequest};

#[derive(Debug, Serialize)]
pub(super) struct CreateOrderDto<'a> {
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: &'a str,
}

impl<'a> From<&'a GatewayOrderRequest> for CreateOrderDto<'a> {
    fn from(request: &'a GatewayOrderRequest) -> Self {
        Self {
            amount: request.amount,
            currency: request.currency.as_str(),
            receipt: request.receipt.as_str(),
        }
    }
}

/// Subset of the order entity returned by `POST /orders`.
#[derive(Debug, Deserialize)]
pub(super) struct OrderDto {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

impl From<OrderDto> for GatewayOrder {
    fn from(dto: OrderDto) -> Self {
        Self {
            id: dto.id,
            amount: dto.amount,
            currency: dto.currency,
        }
    }
}
