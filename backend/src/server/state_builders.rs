//! Builders for the HTTP state and its port adapters.

use std::io;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::warn;

use coaching_site::domain::ports::LoginService;
use coaching_site::domain::{AccountLoginService, LoginCredentials, PaymentService, ensure_admin};
use coaching_site::inbound::http::state::HttpState;
use coaching_site::outbound::memory::MemoryStore;
use coaching_site::outbound::razorpay::RazorpayHttpGateway;
use coaching_site::outbound::uploads::LocalImageStore;
use coaching_site::settings::{GatewaySettings, SiteSettings};

/// Provision the administrator account and return the login service.
///
/// Login stays disabled, answering with a configuration error, when no
/// admin password is configured.
async fn build_login_service(
    site: &SiteSettings,
    store: &Arc<MemoryStore>,
) -> io::Result<Arc<dyn LoginService>> {
    let Some(password) = site.admin_password() else {
        warn!("SITE_ADMIN_PASSWORD is not set; admin login is disabled");
        return Ok(Arc::new(AccountLoginService::unconfigured()));
    };
    let credentials = LoginCredentials::try_from_parts(site.admin_username(), password)
        .map_err(|error| io::Error::other(format!("invalid admin credentials: {error}")))?;
    ensure_admin(store.as_ref(), &credentials)
        .await
        .map_err(|error| io::Error::other(format!("provision admin account: {error}")))?;
    Ok(Arc::new(AccountLoginService::new(store.clone())))
}

/// Assemble every port behind [`HttpState`].
///
/// # Errors
///
/// Returns an error when the gateway client, the upload directory or the
/// admin account cannot be set up.
pub async fn build_http_state(
    site: &SiteSettings,
    gateway: &GatewaySettings,
) -> io::Result<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let store = Arc::new(MemoryStore::new(clock.clone()));

    let api_base = site
        .gateway_api_base()
        .map_err(|error| io::Error::other(format!("invalid gateway API base: {error}")))?;
    let gateway_client = RazorpayHttpGateway::new(&api_base, site.gateway_timeout())
        .map_err(|error| io::Error::other(format!("build gateway client: {error}")))?;
    let credentials = gateway.credentials();
    if credentials.is_none() {
        warn!("RAZORPAY_KEY_ID/RAZORPAY_KEY_SECRET not set; checkout is disabled");
    }
    let payments = PaymentService::new(store.clone(), Arc::new(gateway_client), credentials, clock);

    let upload_dir = site.upload_dir();
    let images = LocalImageStore::open(upload_dir).map_err(|error| {
        io::Error::other(format!(
            "open upload directory {}: {error}",
            upload_dir.display()
        ))
    })?;

    Ok(HttpState {
        login: build_login_service(site, &store).await?,
        payments: Arc::new(payments),
        payment_records: store.clone(),
        engagement: store.clone(),
        content: store,
        images: Arc::new(images),
    })
}
