//! Razorpay outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `PaymentGateway`
//! port against the Razorpay Orders API.

mod dto;
mod http_gateway;

pub use http_gateway::{DEFAULT_API_BASE, RazorpayHttpGateway};
