//! Port abstraction for the external payment gateway's order API.
use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

use super::define_port_error;

define_port_error! {
    /// Failures raised by payment gateway adapters.
    pub enum PaymentGatewayError {
        /// Request could not be sent or timed out.
        Transport { message: String } => "gateway transport failed: {message}",
        /// Gateway answered with a non-success status.
        Upstream { status: u16, body: String } => "gateway rejected request with status {status}: {body}",
        /// Gateway response body could not be decoded.
        Decode { message: String } => "gateway response could not be decoded: {message}",
    }
}

/// Merchant API key pair.
#[derive(Clone)]
pub struct GatewayCredentials {
    key_id: String,
    key_secret: Zeroizing<String>,
}

impl GatewayCredentials {
    /// Pair a public key id with its secret.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: Zeroizing::new(key_secret.into()),
        }
    }

    /// Public key id, safe to hand to browsers.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Secret used for API authentication and signature checks.
    pub fn key_secret(&self) -> &str {
        self.key_secret.as_str()
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayCredentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

/// Order creation request sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrderRequest {
    /// Amount in minor units.
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

/// Order issued by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrder {
    pub id: String,
    /// Amount in minor units, as echoed by the gateway.
    pub amount: i64,
    pub currency: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Raise an order the browser can complete through hosted checkout.
    async fn create_order(
        &self,
        credentials: &GatewayCredentials,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrder, PaymentGatewayError>;
}
