//! Visitor engagement records: contact submissions, newsletter
//! subscriptions and UI button clicks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Triage state of a contact submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// Message left through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated contact form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Newsletter subscriber. Email is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
}

/// Running click counter for one UI button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonClick {
    pub id: Uuid,
    pub button_id: String,
    pub button_name: String,
    pub section: String,
    pub click_count: u64,
    pub last_clicked: DateTime<Utc>,
}

/// A single click reported by the public site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub button_id: String,
    pub button_name: String,
    pub section: String,
}

impl ClickEvent {
    /// Build an event from its three identifying strings.
    pub fn new(
        button_id: impl Into<String>,
        button_name: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            button_id: button_id.into(),
            button_name: button_name.into(),
            section: section.into(),
        }
    }
}
