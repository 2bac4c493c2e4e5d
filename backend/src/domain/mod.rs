//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define the entities stored by the site, the rules that govern
//! them, and the ports adapters implement. Nothing here knows about HTTP or
//! the storage backend.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error envelope.
//! - Entities: Payment, ContactSubmission, NewsletterSubscription,
//!   ButtonClick, Review, BlogPost, User.
//! - PaymentService: checkout orchestration over the payment ports.
//! - AccountLoginService: admin authentication over the user port.

pub mod auth;
pub mod content;
pub mod engagement;
pub mod error;
pub mod payment;
pub mod payment_service;
pub mod ports;
pub mod signature;
pub mod stats;
pub mod trace_id;
pub mod upload;
pub mod user;

pub use self::auth::{AccountLoginService, LoginCredentials, LoginValidationError, ensure_admin};
pub use self::content::{
    ALL_CATEGORIES, BlogFilter, BlogPost, BlogPostPatch, DEFAULT_BLOG_AUTHOR, DEFAULT_READ_TIME,
    NewBlogPost, NewReview, Review, ReviewPatch,
};
pub use self::engagement::{
    ButtonClick, ClickEvent, ContactStatus, ContactSubmission, NewContact, NewsletterSubscription,
};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::payment::{
    AmountError, DEFAULT_CURRENCY, NewPayment, Payment, PaymentStatus, minor_units_from_major,
};
pub use self::payment_service::{
    CheckoutOrder, OrderRequest, PaymentService, PaymentVerification,
};
pub use self::signature::{sign_checkout, verify_checkout};
pub use self::stats::{AdminStats, POPULAR_BUTTON_LIMIT, PopularButton, StatsSnapshot, conversion_rate};
pub use self::trace_id::TraceId;
pub use self::upload::{
    ImageFormat, MAX_UPLOAD_BYTES, UPLOADS_URL_PREFIX, image_url, stored_image_format,
};
pub use self::user::{NewUser, PasswordHash, PasswordHashError, User};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use coaching_site::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
