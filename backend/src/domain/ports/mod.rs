//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, gateway, image store) are implemented by
//! outbound adapters. Driving ports ([`LoginService`], [`PaymentCommand`])
//! are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod content_repository;
mod engagement_repository;
mod image_store;
mod login_service;
mod payment_command;
mod payment_gateway;
mod payment_repository;
mod store_error;
mod user_repository;

pub use content_repository::ContentRepository;
#[cfg(test)]
pub use content_repository::MockContentRepository;
pub use engagement_repository::EngagementRepository;
#[cfg(test)]
pub use engagement_repository::MockEngagementRepository;
#[cfg(test)]
pub use image_store::MockImageStore;
pub use image_store::{ImageStore, ImageStoreError, StoredImage};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use payment_command::MockPaymentCommand;
pub use payment_command::PaymentCommand;
#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
pub use payment_gateway::{
    GatewayCredentials, GatewayOrder, GatewayOrderRequest, PaymentGateway, PaymentGatewayError,
};
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
pub use payment_repository::PaymentRepository;
pub use store_error::StoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
