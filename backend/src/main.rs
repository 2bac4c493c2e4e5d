//! Backend entry-point: loads settings, provisions ports and runs the HTTP server.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use coaching_site::inbound::http::health::HealthState;
use coaching_site::inbound::http::session_config::{BuildMode, session_settings_from_env};
use coaching_site::settings::{GatewaySettings, SiteSettings};
use server::{ServerConfig, build_http_state, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let site = SiteSettings::load()
        .map_err(|error| io::Error::other(format!("load site settings: {error}")))?;
    let gateway = GatewaySettings::from_env()?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;
    let bind_addr = site
        .bind_addr()
        .map_err(|error| io::Error::other(format!("invalid SITE_BIND_ADDR: {error}")))?;

    let http_state = build_http_state(&site, &gateway).await?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        http_state,
        ServerConfig::new(session, bind_addr),
    )?;
    info!(%bind_addr, "server listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
