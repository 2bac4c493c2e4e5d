//! Admin session and dashboard handlers.
//!
//! ```text
//! POST /api/admin/login {"username":"admin","password":"..."}
//! POST /api/admin/logout
//! GET  /api/admin/stats
//! GET  /api/admin/contacts
//! GET  /api/admin/subscribers
//! GET  /api/admin/button-clicks
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    AdminStats, ButtonClick, ContactSubmission, Error, LoginCredentials, LoginValidationError,
    NewsletterSubscription,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::store_error;
use crate::inbound::http::schemas::{
    AdminStatsSchema, ButtonClickSchema, ContactSubmissionSchema, ErrorSchema,
    NewsletterSubscriptionSchema,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/admin/login`.
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Bare acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub(crate) fn ok() -> web::Json<Self> {
        web::Json(Self { success: true })
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Authenticate the admin and establish a session.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SuccessResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Admin login not configured", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminLogin",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SuccessResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let admin_id = state.login.authenticate(&credentials).await?;
    session.persist_admin(&admin_id)?;
    info!(%admin_id, "admin signed in");
    Ok(SuccessResponse::ok())
}

/// End the admin session.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses((status = 200, description = "Session cleared", body = SuccessResponse)),
    tags = ["admin"],
    operation_id = "adminLogout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> web::Json<SuccessResponse> {
    session.clear();
    SuccessResponse::ok()
}

/// Dashboard headline numbers. Reading them does not count a visit.
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Aggregate statistics", body = AdminStatsSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminStats"
)]
#[get("/stats")]
pub async fn stats(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<AdminStats>> {
    session.require_admin()?;
    let dashboard = state
        .engagement
        .stats()
        .await
        .map_err(store_error("load stats"))?;
    Ok(web::Json(dashboard))
}

/// Contact submissions, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    responses(
        (status = 200, description = "Contact submissions", body = [ContactSubmissionSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminListContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<ContactSubmission>>> {
    session.require_admin()?;
    let contacts = state
        .engagement
        .list_contacts()
        .await
        .map_err(store_error("list contacts"))?;
    Ok(web::Json(contacts))
}

/// Newsletter subscribers, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/subscribers",
    responses(
        (status = 200, description = "Subscribers", body = [NewsletterSubscriptionSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminListSubscribers"
)]
#[get("/subscribers")]
pub async fn list_subscribers(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<NewsletterSubscription>>> {
    session.require_admin()?;
    let subscribers = state
        .engagement
        .list_subscribers()
        .await
        .map_err(store_error("list subscribers"))?;
    Ok(web::Json(subscribers))
}

/// Tracked buttons, most clicked first.
#[utoipa::path(
    get,
    path = "/api/admin/button-clicks",
    responses(
        (status = 200, description = "Button click counters", body = [ButtonClickSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminListButtonClicks"
)]
#[get("/button-clicks")]
pub async fn list_button_clicks(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<ButtonClick>>> {
    session.require_admin()?;
    let clicks = state
        .engagement
        .list_button_clicks()
        .await
        .map_err(store_error("list button clicks"))?;
    Ok(web::Json(clicks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{EngagementRepository, MockLoginService};
    use crate::domain::{ClickEvent, NewContact};
    use crate::inbound::http::test_utils::{
        ADMIN_PASSWORD, ADMIN_USERNAME, admin_cookie, memory_state, test_app,
    };
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    #[rstest]
    #[case("/api/admin/stats")]
    #[case("/api/admin/contacts")]
    #[case("/api/admin/subscribers")]
    #[case("/api/admin/payments")]
    #[case("/api/admin/button-clicks")]
    #[case("/api/admin/reviews")]
    #[case("/api/admin/blogs")]
    #[actix_web::test]
    async fn dashboard_requires_session(#[case] uri: &str) {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "unauthorized");
    }

    #[rstest]
    #[case(ADMIN_USERNAME, "wrong", StatusCode::UNAUTHORIZED, "unauthorized")]
    #[case("someone", ADMIN_PASSWORD, StatusCode::UNAUTHORIZED, "unauthorized")]
    #[case("  ", ADMIN_PASSWORD, StatusCode::BAD_REQUEST, "invalid_request")]
    #[case(ADMIN_USERNAME, "", StatusCode::BAD_REQUEST, "invalid_request")]
    #[actix_web::test]
    async fn bad_logins_are_rejected(
        #[case] username: &str,
        #[case] password: &str,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), status);
        assert!(
            response
                .response()
                .cookies()
                .all(|cookie| cookie.name() != "session")
        );
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], code);
    }

    #[actix_web::test]
    async fn unconfigured_login_is_a_configuration_error() {
        let (_, mut state) = memory_state().await;
        let mut login_service = MockLoginService::new();
        login_service
            .expect_authenticate()
            .returning(|_| Err(Error::configuration("Admin login not configured")));
        state.login = Arc::new(login_service);
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(json!({ "username": "admin", "password": "x" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "configuration_error");
        assert_eq!(body["message"], "Admin login not configured");
    }

    #[actix_web::test]
    async fn stats_reflect_store_without_counting_visits() {
        let (store, state) = memory_state().await;
        store.record_visit().await.expect("visit");
        store
            .track_button_click(ClickEvent::new("hero", "Book a Call", "Hero"))
            .await
            .expect("click");
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        for _ in 0..2 {
            let request = actix_test::TestRequest::get()
                .uri("/api/admin/stats")
                .cookie(cookie.clone())
                .to_request();
            let body: Value = actix_test::call_and_read_body_json(&app, request).await;
            assert_eq!(body["totalVisitors"], 1);
            assert_eq!(body["totalClicks"], 1);
            assert_eq!(body["conversionRate"], 0);
            assert_eq!(body["popularButtons"][0]["name"], "Book a Call");
        }
    }

    #[actix_web::test]
    async fn contacts_are_listed_for_admin() {
        let (store, state) = memory_state().await;
        store
            .create_contact(NewContact {
                name: "Asha".into(),
                email: "asha@example.com".into(),
                phone: Some("+91 98765 43210".into()),
                subject: "Mentoring".into(),
                message: "Looking for interview practice.".into(),
            })
            .await
            .expect("contact");
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/admin/contacts")
            .cookie(cookie)
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body[0]["name"], "Asha");
        assert_eq!(body[0]["status"], "new");
        assert!(body[0].get("createdAt").is_some());
    }

    #[actix_web::test]
    async fn logout_ends_the_session() {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let logout_request = actix_test::TestRequest::post()
            .uri("/api/admin/logout")
            .cookie(cookie)
            .to_request();
        let response = actix_test::call_service(&app, logout_request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let cleared = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("removal cookie")
            .into_owned();

        let request = actix_test::TestRequest::get()
            .uri("/api/admin/subscribers")
            .cookie(cleared)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
