//! Public engagement endpoints.
//!
//! ```text
//! POST /api/contact      {"name":"Asha","email":"asha@example.com","subject":"Coaching","message":"..."}
//! POST /api/newsletter   {"email":"asha@example.com"}
//! POST /api/track-click  {"buttonId":"hero-cta","buttonName":"Book a Call","section":"Hero"}
//! POST /api/visit
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{ClickEvent, NewContact};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::store_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::validate;

/// Contact form body for `POST /api/contact`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 5))]
    pub subject: String,
    #[validate(length(min = 10))]
    pub message: String,
}

impl From<ContactRequest> for NewContact {
    fn from(value: ContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            subject: value.subject,
            message: value.message,
        }
    }
}

/// Newsletter body for `POST /api/newsletter`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct NewsletterRequest {
    #[validate(email)]
    pub email: String,
}

/// Click report for `POST /api/track-click`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackClickRequest {
    #[validate(length(min = 1))]
    pub button_id: String,
    #[validate(length(min = 1))]
    pub button_name: String,
    #[validate(length(min = 1))]
    pub section: String,
}

/// Acknowledgement carrying the id of the stored record.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: Uuid,
}

/// Running total for the clicked button.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClickResponse {
    pub success: bool,
    pub clicks: u64,
}

/// Running total of recorded visits.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitResponse {
    pub success: bool,
    pub total_visitors: u64,
}

/// Store a contact form submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = CreatedResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "submitContact",
    security([])
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<CreatedResponse>> {
    validate(&*payload)?;
    let contact = state
        .engagement
        .create_contact(payload.into_inner().into())
        .await
        .map_err(store_error("save contact"))?;
    info!(contact_id = %contact.id, "contact submission stored");
    Ok(web::Json(CreatedResponse {
        success: true,
        id: contact.id,
    }))
}

/// Subscribe an email address. Repeat subscriptions return the original id.
#[utoipa::path(
    post,
    path = "/api/newsletter",
    request_body = NewsletterRequest,
    responses(
        (status = 200, description = "Subscribed", body = CreatedResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "subscribeNewsletter",
    security([])
)]
#[post("/newsletter")]
pub async fn subscribe(
    state: web::Data<HttpState>,
    payload: web::Json<NewsletterRequest>,
) -> ApiResult<web::Json<CreatedResponse>> {
    validate(&*payload)?;
    let subscription = state
        .engagement
        .subscribe(&payload.email)
        .await
        .map_err(store_error("subscribe"))?;
    Ok(web::Json(CreatedResponse {
        success: true,
        id: subscription.id,
    }))
}

/// Count one click on a UI button.
#[utoipa::path(
    post,
    path = "/api/track-click",
    request_body = TrackClickRequest,
    responses(
        (status = 200, description = "Click counted", body = ClickResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "trackClick",
    security([])
)]
#[post("/track-click")]
pub async fn track_click(
    state: web::Data<HttpState>,
    payload: web::Json<TrackClickRequest>,
) -> ApiResult<web::Json<ClickResponse>> {
    validate(&*payload)?;
    let TrackClickRequest {
        button_id,
        button_name,
        section,
    } = payload.into_inner();
    let click = state
        .engagement
        .track_button_click(ClickEvent::new(button_id, button_name, section))
        .await
        .map_err(store_error("track click"))?;
    Ok(web::Json(ClickResponse {
        success: true,
        clicks: click.click_count,
    }))
}

/// Record one page visit.
#[utoipa::path(
    post,
    path = "/api/visit",
    responses(
        (status = 200, description = "Visit recorded", body = VisitResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["engagement"],
    operation_id = "recordVisit",
    security([])
)]
#[post("/visit")]
pub async fn record_visit(state: web::Data<HttpState>) -> ApiResult<web::Json<VisitResponse>> {
    let total_visitors = state
        .engagement
        .record_visit()
        .await
        .map_err(store_error("record visit"))?;
    Ok(web::Json(VisitResponse {
        success: true,
        total_visitors,
    }))
}
