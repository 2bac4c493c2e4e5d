//! Process configuration loaded via OrthoConfig.
//!
//! [`SiteSettings`] layers CLI flags over `SITE_*` environment variables.
//! [`GatewaySettings`] is read from `RAZORPAY_*` variables only, so merchant
//! secrets never appear in process arguments.

use std::ffi::OsString;
use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::ports::GatewayCredentials;
use crate::outbound::razorpay::DEFAULT_API_BASE;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 10;

/// Site-wide runtime settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SITE")]
pub struct SiteSettings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Directory uploaded images are written to.
    #[ortho_config(default = PathBuf::from(DEFAULT_UPLOAD_DIR))]
    pub upload_dir: PathBuf,
    /// Username of the dashboard administrator.
    #[ortho_config(default = DEFAULT_ADMIN_USERNAME.to_owned())]
    pub admin_username: String,
    /// Administrator password. Login is disabled when unset.
    pub admin_password: Option<String>,
    /// Base URL of the payment gateway's REST API.
    #[ortho_config(default = DEFAULT_API_BASE.to_owned())]
    pub gateway_api_base: String,
    /// Timeout applied to each gateway request.
    #[ortho_config(default = DEFAULT_GATEWAY_TIMEOUT_SECS)]
    pub gateway_timeout_secs: u64,
}

impl SiteSettings {
    /// Configured bind address.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.parse()
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Administrator password, ignoring blank values.
    pub fn admin_password(&self) -> Option<&str> {
        self.admin_password
            .as_deref()
            .filter(|password| !password.trim().is_empty())
    }

    /// Gateway API base URL.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured value is not a URL.
    pub fn gateway_api_base(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.gateway_api_base)
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_secs(self.gateway_timeout_secs)
    }
}

/// Merchant credentials for the payment gateway.
///
/// Both values default to blank, which leaves checkout unconfigured.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RAZORPAY")]
pub struct GatewaySettings {
    #[ortho_config(default = String::new())]
    pub key_id: String,
    #[ortho_config(default = String::new())]
    pub key_secret: String,
}

impl GatewaySettings {
    /// Load from the environment only, ignoring process arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable holds a malformed value.
    pub fn from_env() -> std::io::Result<Self> {
        let program = std::env::args_os()
            .next()
            .unwrap_or_else(|| OsString::from("coaching-site"));
        Self::load_from_iter([program])
            .map_err(|error| std::io::Error::other(format!("load gateway settings: {error}")))
    }

    /// Credential pair when both halves are configured and non-blank.
    pub fn credentials(&self) -> Option<GatewayCredentials> {
        let key_id = self.key_id.trim();
        let key_secret = self.key_secret.trim();
        if key_id.is_empty() || key_secret.is_empty() {
            return None;
        }
        Some(GatewayCredentials::new(key_id, key_secret))
    }
}
