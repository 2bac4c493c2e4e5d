//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local repositories for every storage port
//! - **razorpay**: HTTP payment gateway client
//! - **uploads**: filesystem image store
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod razorpay;
pub mod uploads;
