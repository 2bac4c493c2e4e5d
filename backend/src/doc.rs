//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] that provide OpenAPI definitions
//!   without coupling domain types to utoipa
//! - **Security**: session cookie authentication for admin routes
//!
//! The generated specification is served by Swagger UI in debug builds and
//! printed by the `openapi-dump` binary.

use crate::inbound::http::schemas::{
    AdminStatsSchema, BlogPostSchema, ButtonClickSchema, CheckoutOrderSchema, ContactStatusSchema,
    ContactSubmissionSchema, ErrorCodeSchema, ErrorSchema, NewsletterSubscriptionSchema,
    PopularButtonSchema, ReviewSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/admin/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Career coaching site API",
        description = "Checkout, lead capture, editorial content and the admin dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::payments::create_order,
        crate::inbound::http::payments::verify_payment,
        crate::inbound::http::payments::list_payments,
        crate::inbound::http::engagement::submit_contact,
        crate::inbound::http::engagement::subscribe,
        crate::inbound::http::engagement::track_click,
        crate::inbound::http::engagement::record_visit,
        crate::inbound::http::reviews::list_active_reviews,
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::reviews::get_review,
        crate::inbound::http::reviews::update_review,
        crate::inbound::http::reviews::delete_review,
        crate::inbound::http::blogs::list_published_posts,
        crate::inbound::http::blogs::list_posts,
        crate::inbound::http::blogs::create_post,
        crate::inbound::http::blogs::get_post,
        crate::inbound::http::blogs::update_post,
        crate::inbound::http::blogs::delete_post,
        crate::inbound::http::admin::login,
        crate::inbound::http::admin::logout,
        crate::inbound::http::admin::stats,
        crate::inbound::http::admin::list_contacts,
        crate::inbound::http::admin::list_subscribers,
        crate::inbound::http::admin::list_button_clicks,
        crate::inbound::http::uploads::upload_image,
        crate::inbound::http::uploads::serve_upload,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        ContactStatusSchema,
        ContactSubmissionSchema,
        NewsletterSubscriptionSchema,
        ButtonClickSchema,
        PopularButtonSchema,
        AdminStatsSchema,
        ReviewSchema,
        BlogPostSchema,
        CheckoutOrderSchema,
    )),
    tags(
        (name = "payments", description = "Checkout order creation and verification"),
        (name = "engagement", description = "Contact forms, newsletter and analytics"),
        (name = "reviews", description = "Published client reviews"),
        (name = "blogs", description = "Published blog posts"),
        (name = "admin", description = "Session-protected dashboard operations"),
        (name = "uploads", description = "Uploaded image files"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema and path registration.

    use super::*;
    use rstest::rstest;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    // utoipa replaces :: with . in schema names
    #[rstest]
    #[case("crate.domain.Error", &["code", "message", "traceId", "details"])]
    #[case("crate.domain.Review", &["id", "name", "rating", "imageUrl", "isActive", "createdAt"])]
    #[case("crate.domain.BlogPost", &["title", "excerpt", "readTime", "isPublished"])]
    #[case("crate.domain.AdminStats", &["totalVisitors", "totalRevenue", "conversionRate", "popularButtons"])]
    #[case("crate.domain.CheckoutOrder", &["id", "amount", "currency", "keyId"])]
    fn wrapper_schemas_use_wire_field_names(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/payment/create-order")]
    #[case("/api/payment/verify")]
    #[case("/api/contact")]
    #[case("/api/newsletter")]
    #[case("/api/track-click")]
    #[case("/api/visit")]
    #[case("/api/reviews")]
    #[case("/api/blogs")]
    #[case("/api/upload")]
    #[case("/api/admin/login")]
    #[case("/api/admin/stats")]
    #[case("/api/admin/payments")]
    #[case("/api/admin/reviews/{id}")]
    #[case("/api/admin/blogs/{id}")]
    #[case("/uploads/{name}")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn session_cookie_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("SessionCookie"));
    }
}
