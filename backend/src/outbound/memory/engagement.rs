use std::sync::atomic::Ordering;

use async_trait::async_trait;
use uuid::Uuid;

use super::{MemoryStore, lock, newest_first};
use crate::domain::ports::{EngagementRepository, StoreError};
use crate::domain::{
    AdminStats, ButtonClick, ClickEvent, ContactStatus, ContactSubmission, NewContact,
    NewsletterSubscription, PaymentStatus, StatsSnapshot,
};

impl MemoryStore {
    fn sorted_clicks(&self) -> Vec<ButtonClick> {
        let mut clicks: Vec<ButtonClick> = lock(&self.clicks).values().cloned().collect();
        clicks.sort_by(|a, b| {
            b.click_count
                .cmp(&a.click_count)
                .then_with(|| b.last_clicked.cmp(&a.last_clicked))
        });
        clicks
    }
}

#[async_trait]
impl EngagementRepository for MemoryStore {
    async fn create_contact(&self, contact: NewContact) -> Result<ContactSubmission, StoreError> {
        let NewContact {
            name,
            email,
            phone,
            subject,
            message,
        } = contact;
        let created = ContactSubmission {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            subject,
            message,
            status: ContactStatus::New,
            created_at: self.now(),
        };
        lock(&self.contacts).insert(created.id, self.sequenced(created.clone()));
        Ok(created)
    }

    async fn list_contacts(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        Ok(newest_first(lock(&self.contacts).values(), |contact| {
            contact.created_at
        }))
    }

    async fn subscribe(&self, email: &str) -> Result<NewsletterSubscription, StoreError> {
        let mut subscribers = lock(&self.subscribers);
        if let Some(existing) = subscribers.get(email) {
            return Ok(existing.record.clone());
        }
        let created = NewsletterSubscription {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            is_active: true,
            subscribed_at: self.now(),
        };
        subscribers.insert(email.to_owned(), self.sequenced(created.clone()));
        Ok(created)
    }

    async fn list_subscribers(&self) -> Result<Vec<NewsletterSubscription>, StoreError> {
        Ok(newest_first(lock(&self.subscribers).values(), |subscriber| {
            subscriber.subscribed_at
        }))
    }

    async fn track_button_click(&self, event: ClickEvent) -> Result<ButtonClick, StoreError> {
        let now = self.now();
        let mut clicks = lock(&self.clicks);
        let click = clicks
            .entry(event.button_id.clone())
            .and_modify(|click| {
                click.click_count = click.click_count.saturating_add(1);
                click.last_clicked = now;
            })
            .or_insert_with(|| ButtonClick {
                id: Uuid::new_v4(),
                button_id: event.button_id,
                button_name: event.button_name,
                section: event.section,
                click_count: 1,
                last_clicked: now,
            });
        Ok(click.clone())
    }

    async fn list_button_clicks(&self) -> Result<Vec<ButtonClick>, StoreError> {
        Ok(self.sorted_clicks())
    }

    async fn record_visit(&self) -> Result<u64, StoreError> {
        Ok(self.visitors.fetch_add(1, Ordering::Relaxed) + 1)
    }

    async fn stats(&self) -> Result<AdminStats, StoreError> {
        let paid_amounts = lock(&self.payments)
            .values()
            .filter(|entry| entry.record.status == PaymentStatus::Paid)
            .map(|entry| entry.record.amount)
            .collect();
        let contacts = lock(&self.contacts).len() as u64;
        let subscribers = lock(&self.subscribers).len() as u64;
        Ok(AdminStats::from_snapshot(StatsSnapshot {
            visitors: self.visitors.load(Ordering::Relaxed),
            contacts,
            subscribers,
            paid_amounts,
            clicks: self.sorted_clicks(),
        }))
    }
}
