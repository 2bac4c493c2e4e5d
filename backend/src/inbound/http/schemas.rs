//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are only read by utoipa when generating OpenAPI"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Authentication failed or is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with the stored state.
    #[schema(rename = "conflict")]
    Conflict,
    /// A required server setting is missing.
    #[schema(rename = "configuration_error")]
    ConfigurationError,
    /// The payment gateway failed.
    #[schema(rename = "gateway_error")]
    GatewayError,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Validation failed")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::ContactStatus`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ContactStatus)]
pub enum ContactStatusSchema {
    #[schema(rename = "new")]
    New,
    #[schema(rename = "read")]
    Read,
    #[schema(rename = "replied")]
    Replied,
}

/// OpenAPI schema for [`crate::domain::ContactSubmission`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ContactSubmission, rename_all = "camelCase")]
pub struct ContactSubmissionSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "Asha Verma")]
    name: String,
    #[schema(example = "asha@example.com")]
    email: String,
    phone: Option<String>,
    subject: String,
    message: String,
    status: ContactStatusSchema,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::NewsletterSubscription`].
#[derive(ToSchema)]
#[schema(as = crate::domain::NewsletterSubscription, rename_all = "camelCase")]
pub struct NewsletterSubscriptionSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    email: String,
    is_active: bool,
    #[schema(value_type = String, format = DateTime)]
    subscribed_at: String,
}

/// OpenAPI schema for [`crate::domain::ButtonClick`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ButtonClick, rename_all = "camelCase")]
pub struct ButtonClickSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    #[schema(example = "hero-book-call")]
    button_id: String,
    button_name: String,
    section: String,
    #[schema(minimum = 1)]
    click_count: u64,
    #[schema(value_type = String, format = DateTime)]
    last_clicked: String,
}

/// OpenAPI schema for [`crate::domain::PopularButton`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PopularButton)]
pub struct PopularButtonSchema {
    name: String,
    clicks: u64,
}

/// OpenAPI schema for [`crate::domain::AdminStats`].
///
/// Revenue is reported in minor currency units.
#[derive(ToSchema)]
#[schema(as = crate::domain::AdminStats, rename_all = "camelCase")]
pub struct AdminStatsSchema {
    total_visitors: u64,
    total_clicks: u64,
    total_contacts: u64,
    total_subscribers: u64,
    total_payments: u64,
    #[schema(example = 1_659_800)]
    total_revenue: i64,
    /// Paid payments per hundred visitors, rounded.
    conversion_rate: u64,
    popular_buttons: Vec<PopularButtonSchema>,
}

/// OpenAPI schema for [`crate::domain::Review`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Review, rename_all = "camelCase")]
pub struct ReviewSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    name: String,
    role: String,
    company: String,
    content: String,
    #[schema(minimum = 1, maximum = 5)]
    rating: u8,
    image_url: Option<String>,
    is_active: bool,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::BlogPost`].
#[derive(ToSchema)]
#[schema(as = crate::domain::BlogPost, rename_all = "camelCase")]
pub struct BlogPostSchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    title: String,
    excerpt: String,
    content: String,
    category: String,
    image_url: Option<String>,
    #[schema(example = "Manisha Sharma")]
    author: String,
    #[schema(example = "5 min read")]
    read_time: String,
    is_published: bool,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::CheckoutOrder`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CheckoutOrder, rename_all = "camelCase")]
pub struct CheckoutOrderSchema {
    /// Gateway order identifier.
    #[schema(example = "order_9A33XWu170gUtm")]
    id: String,
    /// Amount in minor units.
    #[schema(example = 599_900)]
    amount: i64,
    #[schema(example = "INR")]
    currency: String,
    /// Public gateway key for the checkout widget.
    key_id: String,
}
