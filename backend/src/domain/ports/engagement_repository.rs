//! Port abstraction for visitor engagement: contacts, subscribers, button
//! clicks and visit counting.
use async_trait::async_trait;

use crate::domain::{
    AdminStats, ButtonClick, ClickEvent, ContactSubmission, NewContact, NewsletterSubscription,
};

use super::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Record a contact form submission with status `new`.
    async fn create_contact(&self, contact: NewContact) -> Result<ContactSubmission, StoreError>;

    /// All submissions, newest first.
    async fn list_contacts(&self) -> Result<Vec<ContactSubmission>, StoreError>;

    /// Subscribe `email`, returning the existing subscription when the
    /// address is already known.
    async fn subscribe(&self, email: &str) -> Result<NewsletterSubscription, StoreError>;

    /// All subscribers, newest first.
    async fn list_subscribers(&self) -> Result<Vec<NewsletterSubscription>, StoreError>;

    /// Count one click, creating the counter on first sight of the button.
    async fn track_button_click(&self, event: ClickEvent) -> Result<ButtonClick, StoreError>;

    /// All counters, most clicked first.
    async fn list_button_clicks(&self) -> Result<Vec<ButtonClick>, StoreError>;

    /// Count one page visit and return the new total.
    async fn record_visit(&self) -> Result<u64, StoreError>;

    /// Dashboard aggregates. Read-only.
    async fn stats(&self) -> Result<AdminStats, StoreError>;
}
