//! Client review endpoints.
//!
//! ```text
//! GET    /api/reviews
//! GET    /api/admin/reviews
//! POST   /api/admin/reviews
//! GET    /api/admin/reviews/{id}
//! PATCH  /api/admin/reviews/{id}
//! DELETE /api/admin/reviews/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Error, NewReview, Review, ReviewPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::admin::SuccessResponse;
use crate::inbound::http::error::store_error;
use crate::inbound::http::schemas::{ErrorSchema, ReviewSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, nullable, parse_uuid, validate};

const REVIEW_ID: FieldName = FieldName::new("id");

fn default_active() -> bool {
    true
}

/// Body for `POST /api/admin/reviews`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(length(min = 2))]
    pub role: String,
    #[validate(length(min = 2))]
    pub company: String,
    #[validate(length(min = 10))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<ReviewRequest> for NewReview {
    fn from(value: ReviewRequest) -> Self {
        Self {
            name: value.name,
            role: value.role,
            company: value.company,
            content: value.content,
            rating: value.rating,
            image_url: value.image_url,
            is_active: value.is_active,
        }
    }
}

/// Body for `PATCH /api/admin/reviews/{id}`; absent fields are left as
/// stored and `imageUrl: null` clears the image.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatchRequest {
    #[validate(length(min = 2))]
    pub name: Option<String>,
    #[validate(length(min = 2))]
    pub role: Option<String>,
    #[validate(length(min = 2))]
    pub company: Option<String>,
    #[validate(length(min = 10))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl From<ReviewPatchRequest> for ReviewPatch {
    fn from(value: ReviewPatchRequest) -> Self {
        Self {
            name: value.name,
            role: value.role,
            company: value.company,
            content: value.content,
            rating: value.rating,
            image_url: value.image_url,
            is_active: value.is_active,
        }
    }
}

fn review_not_found(id: &Uuid) -> Error {
    Error::not_found(format!("review {id} not found"))
}

/// Active reviews for the public site, newest first.
#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "Active reviews", body = [ReviewSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reviews"],
    operation_id = "listActiveReviews",
    security([])
)]
#[get("/reviews")]
pub async fn list_active_reviews(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Review>>> {
    let mut reviews = state
        .content
        .list_reviews()
        .await
        .map_err(store_error("list reviews"))?;
    reviews.retain(|review| review.is_active);
    Ok(web::Json(reviews))
}

/// Every review, including hidden ones.
#[utoipa::path(
    get,
    path = "/api/admin/reviews",
    responses(
        (status = 200, description = "All reviews", body = [ReviewSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminListReviews"
)]
#[get("/reviews")]
pub async fn list_reviews(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Review>>> {
    session.require_admin()?;
    let reviews = state
        .content
        .list_reviews()
        .await
        .map_err(store_error("list reviews"))?;
    Ok(web::Json(reviews))
}

#[utoipa::path(
    post,
    path = "/api/admin/reviews",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminCreateReview"
)]
#[post("/reviews")]
pub async fn create_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ReviewRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    validate(&*payload)?;
    let review = state
        .content
        .create_review(payload.into_inner().into())
        .await
        .map_err(store_error("create review"))?;
    Ok(HttpResponse::Created().json(review))
}

#[utoipa::path(
    get,
    path = "/api/admin/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review", body = ReviewSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminGetReview"
)]
#[get("/reviews/{id}")]
pub async fn get_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Review>> {
    session.require_admin()?;
    let id = parse_uuid(&path, REVIEW_ID)?;
    state
        .content
        .find_review(&id)
        .await
        .map_err(store_error("find review"))?
        .map(web::Json)
        .ok_or_else(|| review_not_found(&id))
}

#[utoipa::path(
    patch,
    path = "/api/admin/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    request_body = ReviewPatchRequest,
    responses(
        (status = 200, description = "Updated review", body = ReviewSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateReview"
)]
#[patch("/reviews/{id}")]
pub async fn update_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ReviewPatchRequest>,
) -> ApiResult<web::Json<Review>> {
    session.require_admin()?;
    let id = parse_uuid(&path, REVIEW_ID)?;
    validate(&*payload)?;
    state
        .content
        .update_review(&id, payload.into_inner().into())
        .await
        .map_err(store_error("update review"))?
        .map(web::Json)
        .ok_or_else(|| review_not_found(&id))
}

#[utoipa::path(
    delete,
    path = "/api/admin/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review deleted", body = SuccessResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteReview"
)]
#[delete("/reviews/{id}")]
pub async fn delete_review(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<SuccessResponse>> {
    session.require_admin()?;
    let id = parse_uuid(&path, REVIEW_ID)?;
    let deleted = state
        .content
        .delete_review(&id)
        .await
        .map_err(store_error("delete review"))?;
    if !deleted {
        return Err(review_not_found(&id));
    }
    Ok(SuccessResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ContentRepository;
    use crate::inbound::http::test_utils::{admin_cookie, memory_state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn review_body() -> Value {
        json!({
            "name": "Priya Nair",
            "role": "Product Manager",
            "company": "Flipkart",
            "content": "The mock interviews made all the difference.",
            "rating": 5,
        })
    }

    fn new_review(name: &str, is_active: bool) -> NewReview {
        NewReview {
            name: name.into(),
            role: "Engineer".into(),
            company: "Infosys".into(),
            content: "Clear, structured and honest guidance.".into(),
            rating: 4,
            image_url: None,
            is_active,
        }
    }

    #[actix_web::test]
    async fn public_listing_hides_inactive_reviews() {
        let (store, state) = memory_state().await;
        store.create_review(new_review("Shown", true)).await.expect("review");
        store.create_review(new_review("Hidden", false)).await.expect("review");
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get().uri("/api/reviews").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        let names: Vec<_> = body
            .as_array()
            .expect("array")
            .iter()
            .map(|review| review["name"].clone())
            .collect();
        assert_eq!(names, [json!("Shown")]);
    }

    #[actix_web::test]
    async fn create_applies_defaults() {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/admin/reviews")
            .cookie(cookie)
            .set_json(review_body())
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["isActive"], true);
        assert_eq!(body["imageUrl"], Value::Null);
        assert!(Uuid::parse_str(body["id"].as_str().expect("id")).is_ok());
    }

    #[rstest]
    #[case("rating", json!(6), "validation_failed")]
    #[case("rating", json!(0), "validation_failed")]
    #[case("rating", json!(4.5), "invalid_json")]
    #[case("content", json!("Too short"), "validation_failed")]
    #[case("company", json!("X"), "validation_failed")]
    #[actix_web::test]
    async fn invalid_reviews_are_rejected(
        #[case] key: &str,
        #[case] value: Value,
        #[case] code: &str,
    ) {
        let (store, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;
        let mut body = review_body();
        body[key] = value;

        let request = actix_test::TestRequest::post()
            .uri("/api/admin/reviews")
            .cookie(cookie)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = actix_test::read_body_json(response).await;
        assert_eq!(error["details"]["code"], code);
        assert!(store.list_reviews().await.expect("list").is_empty());
    }

    #[actix_web::test]
    async fn patch_updates_only_present_fields() {
        let (store, state) = memory_state().await;
        let mut seeded = new_review("Asha", true);
        seeded.image_url = Some("/uploads/a.png".into());
        let review = store.create_review(seeded).await.expect("review");
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = actix_test::TestRequest::patch()
            .uri(&format!("/api/admin/reviews/{}", review.id))
            .cookie(cookie)
            .set_json(json!({ "rating": 2, "imageUrl": null }))
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body["rating"], 2);
        assert_eq!(body["name"], "Asha");
        assert_eq!(body["imageUrl"], Value::Null);
    }

    #[actix_web::test]
    async fn patch_validates_present_fields() {
        let (store, state) = memory_state().await;
        let review = store.create_review(new_review("Asha", true)).await.expect("review");
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = actix_test::TestRequest::patch()
            .uri(&format!("/api/admin/reviews/{}", review.id))
            .cookie(cookie)
            .set_json(json!({ "rating": 9 }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let stored = store.find_review(&review.id).await.expect("find").expect("present");
        assert_eq!(stored.rating, 4);
    }

    #[rstest]
    #[case("GET")]
    #[case("PATCH")]
    #[case("DELETE")]
    #[actix_web::test]
    async fn unknown_review_is_not_found(#[case] method: &str) {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;
        let uri = format!("/api/admin/reviews/{}", Uuid::new_v4());

        let request = match method {
            "GET" => actix_test::TestRequest::get(),
            "PATCH" => actix_test::TestRequest::patch().set_json(json!({})),
            _ => actix_test::TestRequest::delete(),
        }
        .uri(&uri)
        .cookie(cookie)
        .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_id_is_a_bad_request() {
        let (_, state) = memory_state().await;
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = actix_test::TestRequest::delete()
            .uri("/api/admin/reviews/not-a-uuid")
            .cookie(cookie)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = actix_test::read_body_json(response).await;
        assert_eq!(error["details"]["code"], "invalid_uuid");
    }

    #[actix_web::test]
    async fn delete_removes_review() {
        let (store, state) = memory_state().await;
        let review = store.create_review(new_review("Asha", true)).await.expect("review");
        let app = actix_test::init_service(test_app(state)).await;
        let cookie = admin_cookie(&app).await;

        let request = actix_test::TestRequest::delete()
            .uri(&format!("/api/admin/reviews/{}", review.id))
            .cookie(cookie)
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, request).await;
        assert_eq!(body, json!({ "success": true }));
        assert!(store.find_review(&review.id).await.expect("find").is_none());
    }
}
