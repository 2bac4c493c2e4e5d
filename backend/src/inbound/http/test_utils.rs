//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
/// bcrypt's minimum cost (private in the `bcrypt` crate).
const MIN_COST: u32 = 4;
use mockable::DefaultClock;
use serde_json::json;

use crate::domain::ports::{MockImageStore, MockPaymentCommand, UserRepository};
use crate::domain::{AccountLoginService, NewUser, PasswordHash};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStore;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Memory-backed state with a provisioned admin account.
///
/// Payment and image ports are strict mocks; tests that reach them replace
/// the corresponding field.
pub async fn memory_state() -> (Arc<MemoryStore>, HttpState) {
    let store = Arc::new(MemoryStore::new(Arc::new(DefaultClock)));
    let admin = NewUser {
        username: ADMIN_USERNAME.to_owned(),
        password_hash: PasswordHash::hash_with_cost(ADMIN_PASSWORD, MIN_COST).expect("hash"),
    };
    store.create_user(admin).await.expect("provision admin");
    let state = HttpState {
        login: Arc::new(AccountLoginService::new(store.clone())),
        payments: Arc::new(MockPaymentCommand::new()),
        payment_records: store.clone(),
        engagement: store.clone(),
        content: store.clone(),
        images: Arc::new(MockImageStore::new()),
    };
    (store, state)
}

/// Application with every API route, the session middleware and `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .configure(crate::inbound::http::configure)
}

/// Sign in as the provisioned admin and return the session cookie.
pub async fn admin_cookie(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
) -> Cookie<'static> {
    let request = test::TestRequest::post()
        .uri("/api/admin/login")
        .set_json(json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(response.status().is_success(), "admin login failed");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
