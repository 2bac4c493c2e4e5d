//! Reqwest-backed Razorpay gateway adapter.
//!
//! This adapter owns transport details only: request serialisation, basic
//! authentication, timeout and HTTP error mapping, and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::error;

use super::dto::{CreateOrderDto, OrderDto};
use crate::domain::ports::{
    GatewayCredentials, GatewayOrder, GatewayOrderRequest, PaymentGateway, PaymentGatewayError,
};

/// Production Orders API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.razorpay.com/v1/";

/// Gateway adapter posting orders to one API base URL.
pub struct RazorpayHttpGateway {
    client: Client,
    orders_endpoint: Url,
}

impl RazorpayHttpGateway {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(api_base: &Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            orders_endpoint: orders_endpoint(api_base),
        })
    }
}

fn orders_endpoint(api_base: &Url) -> Url {
    let mut base = api_base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    match base.join("orders") {
        Ok(url) => url,
        // Joining a relative segment onto an http(s) base cannot fail.
        Err(_) => base,
    }
}

#[async_trait]
impl PaymentGateway for RazorpayHttpGateway {
    async fn create_order(
        &self,
        credentials: &GatewayCredentials,
        request: &GatewayOrderRequest,
    ) -> Result<GatewayOrder, PaymentGatewayError> {
        let response = self
            .client
            .post(self.orders_endpoint.clone())
            .basic_auth(credentials.key_id(), Some(credentials.key_secret()))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CreateOrderDto::from(request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_order(body.as_ref())
    }
}

fn parse_order(body: &[u8]) -> Result<GatewayOrder, PaymentGatewayError> {
    let decoded: OrderDto = serde_json::from_slice(body).map_err(|error| {
        PaymentGatewayError::decode(format!("invalid order JSON payload: {error}"))
    })?;
    Ok(decoded.into())
}

fn map_transport_error(error: reqwest::Error) -> PaymentGatewayError {
    if error.is_timeout() {
        PaymentGatewayError::transport(format!("request timed out: {error}"))
    } else {
        PaymentGatewayError::transport(error.to_string())
    }
}

/// Log the complete rejection body and return an error carrying a preview.
fn map_status_error(status: StatusCode, body: &[u8]) -> PaymentGatewayError {
    let body = String::from_utf8_lossy(body);
    error!(status = status.as_u16(), body = %body, "gateway rejected order request");
    PaymentGatewayError::upstream(status.as_u16(), body_preview(&body))
}

fn body_preview(body: &str) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = body
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use crate::test_support::logs::CapturedLogs;
    use rstest::rstest;

    #[rstest]
    #[case("https://api.razorpay.com/v1/", "https://api.razorpay.com/v1/orders")]
    #[case("https://api.razorpay.com/v1", "https://api.razorpay.com/v1/orders")]
    #[case("http://127.0.0.1:9000", "http://127.0.0.1:9000/orders")]
    fn appends_orders_path(#[case] base: &str, #[case] expected: &str) {
        let base = Url::parse(base).expect("valid url");
        assert_eq!(orders_endpoint(&base).as_str(), expected);
    }

    #[test]
    fn serialises_order_request() {
        let request = GatewayOrderRequest {
            amount: 599_900,
            currency: "INR".to_owned(),
            receipt: "receipt_1".to_owned(),
        };
        let value = serde_json::to_value(CreateOrderDto::from(&request)).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!({ "amount": 599_900, "currency": "INR", "receipt": "receipt_1" })
        );
    }

    #[test]
    fn parses_order_ignoring_extra_fields() {
        let body = r#"{
            "id": "order_EKwxwAgItmmXdp",
            "entity": "order",
            "amount": 599900,
            "amount_paid": 0,
            "currency": "INR",
            "receipt": "receipt_1",
            "status": "created"
        }"#;
        let order = parse_order(body.as_bytes()).expect("decode");
        assert_eq!(
            order,
            GatewayOrder {
                id: "order_EKwxwAgItmmXdp".to_owned(),
                amount: 599_900,
                currency: "INR".to_owned(),
            }
        );
    }

    #[test]
    fn rejects_undecodable_body() {
        let error = parse_order(b"<html>").expect_err("decode should fail");
        assert!(matches!(error, PaymentGatewayError::Decode { .. }));
    }

    #[test]
    fn maps_status_with_compacted_body() {
        let error = map_status_error(
            StatusCode::UNAUTHORIZED,
            b"{\n  \"error\": {\"code\": \"BAD_REQUEST_ERROR\"}\n}",
        );
        assert_eq!(
            error,
            PaymentGatewayError::upstream(401_u16, "{ \"error\": {\"code\": \"BAD_REQUEST_ERROR\"} }")
        );
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(400);
        let preview = body_preview(&body);
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn logs_the_full_rejection_body() {
        let (logs, _guard) = CapturedLogs::install();
        let detail = "z".repeat(400);
        let body = format!("{{\"error\":\"{detail}\"}}");

        let error = map_status_error(StatusCode::BAD_REQUEST, body.as_bytes());

        assert!(logs.contents().contains(&detail));
        match error {
            PaymentGatewayError::Upstream { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body.chars().count(), 163);
                assert!(body.ends_with("..."));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
