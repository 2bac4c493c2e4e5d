//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ContentRepository, EngagementRepository, ImageStore, LoginService, PaymentCommand,
    PaymentRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    /// Checkout orchestration: order creation and callback verification.
    pub payments: Arc<dyn PaymentCommand>,
    /// Read access to stored payments for the admin dashboard.
    pub payment_records: Arc<dyn PaymentRepository>,
    pub engagement: Arc<dyn EngagementRepository>,
    pub content: Arc<dyn ContentRepository>,
    pub images: Arc<dyn ImageStore>,
}
