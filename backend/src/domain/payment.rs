//! Payment records and their status lifecycle.
//!
//! A payment is created in [`PaymentStatus::Created`] when the gateway issues
//! an order, and moves exactly once to either [`PaymentStatus::Paid`] or
//! [`PaymentStatus::Failed`] when the checkout callback is verified.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Currency every order is raised in.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Minor units per major unit (paise per rupee).
const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

/// Lifecycle state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Order raised with the gateway, checkout not yet reconciled.
    Created,
    /// Callback signature verified.
    Paid,
    /// Callback signature rejected.
    Failed,
}

impl PaymentStatus {
    /// Whether no further transition is permitted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Created)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::PaymentStatus;
    ///
    /// assert!(PaymentStatus::Created.can_transition_to(PaymentStatus::Paid));
    /// assert!(!PaymentStatus::Paid.can_transition_to(PaymentStatus::Failed));
    /// ```
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Created, Self::Paid) | (Self::Created, Self::Failed)
        )
    }

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored payment record, keyed by the gateway-issued order id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub order_id: String,
    pub payment_id: Option<String>,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub plan_name: String,
    pub category: String,
    pub status: PaymentStatus,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when recording a new payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub plan_name: String,
    pub category: String,
    pub status: PaymentStatus,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl NewPayment {
    /// A freshly raised order awaiting checkout.
    pub fn created(
        order_id: impl Into<String>,
        amount: i64,
        plan_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            amount,
            currency: DEFAULT_CURRENCY.to_owned(),
            plan_name: plan_name.into(),
            category: category.into(),
            status: PaymentStatus::Created,
            customer_name: None,
            customer_email: None,
            customer_phone: None,
        }
    }
}

/// Reasons a major-unit amount cannot be charged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AmountError {
    /// Not a finite number.
    #[error("amount must be a finite number")]
    NotFinite,
    /// Rounds to less than one minor unit.
    #[error("amount must be at least 0.01")]
    TooSmall,
    /// Does not fit the minor-unit representation.
    #[error("amount is too large")]
    TooLarge,
}

/// Convert a major-unit amount (rupees) to minor units (paise), rounding to
/// the nearest minor unit.
///
/// # Examples
/// ```
/// use coaching_site::domain::minor_units_from_major;
///
/// assert_eq!(minor_units_from_major(5999.0), Ok(599_900));
/// assert_eq!(minor_units_from_major(0.5), Ok(50));
/// ```
pub fn minor_units_from_major(major: f64) -> Result<i64, AmountError> {
    if !major.is_finite() {
        return Err(AmountError::NotFinite);
    }
    let minor = (major * MINOR_UNITS_PER_MAJOR).round();
    if minor < 1.0 {
        return Err(AmountError::TooSmall);
    }
    // i64::MAX is not exactly representable; 2^63 is the first value past it.
    if minor >= 9_223_372_036_854_775_808.0 {
        return Err(AmountError::TooLarge);
    }
    Ok(minor as i64)
}
