//! Aggregate dashboard statistics.
//!
//! Storage adapters gather a [`StatsSnapshot`] under their own locking rules
//! and hand it to [`AdminStats::from_snapshot`], so the arithmetic is shared
//! by every backend.

use serde::{Deserialize, Serialize};

use super::ButtonClick;

/// Number of buttons reported in [`AdminStats::popular_buttons`].
pub const POPULAR_BUTTON_LIMIT: usize = 5;

/// One entry of the most-clicked buttons list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularButton {
    pub name: String,
    pub clicks: u64,
}

/// Dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_visitors: u64,
    pub total_clicks: u64,
    pub total_contacts: u64,
    pub total_subscribers: u64,
    /// Count of payments in `paid` status.
    pub total_payments: u64,
    /// Sum of `paid` payment amounts, in minor units.
    pub total_revenue: i64,
    /// Paid payments per visitor, as a rounded whole percentage.
    pub conversion_rate: u64,
    pub popular_buttons: Vec<PopularButton>,
}

/// Raw counts collected from storage.
#[derive(Debug, Clone, Default)]
pub struct StatsSnapshot {
    pub visitors: u64,
    pub contacts: u64,
    pub subscribers: u64,
    /// Amounts of every `paid` payment.
    pub paid_amounts: Vec<i64>,
    pub clicks: Vec<ButtonClick>,
}

impl AdminStats {
    /// Derive dashboard numbers from raw storage counts.
    pub fn from_snapshot(snapshot: StatsSnapshot) -> Self {
        let StatsSnapshot {
            visitors,
            contacts,
            subscribers,
            paid_amounts,
            mut clicks,
        } = snapshot;

        let total_payments = paid_amounts.len() as u64;
        let total_revenue = paid_amounts.iter().copied().fold(0_i64, i64::saturating_add);
        let total_clicks = clicks
            .iter()
            .map(|click| click.click_count)
            .fold(0_u64, u64::saturating_add);

        clicks.sort_by(|a, b| {
            b.click_count
                .cmp(&a.click_count)
                .then_with(|| b.last_clicked.cmp(&a.last_clicked))
        });
        let popular_buttons = clicks
            .into_iter()
            .take(POPULAR_BUTTON_LIMIT)
            .map(|click| PopularButton {
                name: click.button_name,
                clicks: click.click_count,
            })
            .collect();

        Self {
            total_visitors: visitors,
            total_clicks,
            total_contacts: contacts,
            total_subscribers: subscribers,
            total_payments,
            total_revenue,
            conversion_rate: conversion_rate(total_payments, visitors),
            popular_buttons,
        }
    }
}

/// `paid * 100 / visitors`, rounded half up; zero when nobody visited.
///
/// # Examples
/// ```
/// use coaching_site::domain::conversion_rate;
///
/// assert_eq!(conversion_rate(1, 3), 33);
/// assert_eq!(conversion_rate(2, 3), 67);
/// assert_eq!(conversion_rate(5, 0), 0);
/// ```
pub fn conversion_rate(paid: u64, visitors: u64) -> u64 {
    if visitors == 0 {
        return 0;
    }
    let scaled = u128::from(paid) * 100;
    let visitors = u128::from(visitors);
    let rounded = (scaled * 2 + visitors) / (visitors * 2);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}
