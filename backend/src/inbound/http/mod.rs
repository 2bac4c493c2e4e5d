//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure`] registers every API route; the server adds session,
//! tracing and health endpoints around it.

pub mod admin;
pub mod blogs;
pub mod engagement;
pub mod error;
pub mod health;
pub mod payments;
pub mod reviews;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod uploads;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the public API, the admin API and the upload file server.
///
/// Handlers extract [`state::HttpState`] from app data and expect a session
/// middleware to be wrapped around the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let admin = web::scope("/admin")
        .service(admin::login)
        .service(admin::logout)
        .service(admin::stats)
        .service(admin::list_contacts)
        .service(admin::list_subscribers)
        .service(admin::list_button_clicks)
        .service(payments::list_payments)
        .service(reviews::list_reviews)
        .service(reviews::create_review)
        .service(reviews::get_review)
        .service(reviews::update_review)
        .service(reviews::delete_review)
        .service(blogs::list_posts)
        .service(blogs::create_post)
        .service(blogs::get_post)
        .service(blogs::update_post)
        .service(blogs::delete_post);

    let api = web::scope("/api")
        .service(payments::create_order)
        .service(payments::verify_payment)
        .service(engagement::submit_contact)
        .service(engagement::subscribe)
        .service(engagement::track_click)
        .service(engagement::record_visit)
        .service(reviews::list_active_reviews)
        .service(blogs::list_published_posts)
        .service(uploads::upload_image)
        .service(admin);

    cfg.app_data(validation::json_config())
        .app_data(validation::query_config())
        .service(api)
        .service(uploads::serve_upload);
}
