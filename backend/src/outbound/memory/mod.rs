//! In-memory storage adapter.
//!
//! [`MemoryStore`] implements every repository port over mutex-guarded maps.
//! Each operation holds at most one lock, and only for its synchronous body,
//! so no guard ever lives across an `.await`. State is lost on restart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::{
    BlogPost, ButtonClick, ContactSubmission, NewsletterSubscription, Payment, Review, User,
};

mod content;
mod engagement;
mod payments;
mod users;

#[cfg(test)]
mod tests;

/// Record tagged with its insertion sequence, used to order records that
/// share a timestamp.
#[derive(Debug, Clone)]
struct Sequenced<T> {
    seq: u64,
    record: T,
}

/// Process-local store backing all repository ports.
pub struct MemoryStore {
    clock: Arc<dyn Clock>,
    sequence: AtomicU64,
    visitors: AtomicU64,
    users: Mutex<HashMap<Uuid, Sequenced<User>>>,
    payments: Mutex<HashMap<String, Sequenced<Payment>>>,
    contacts: Mutex<HashMap<Uuid, Sequenced<ContactSubmission>>>,
    subscribers: Mutex<HashMap<String, Sequenced<NewsletterSubscription>>>,
    clicks: Mutex<HashMap<String, ButtonClick>>,
    reviews: Mutex<HashMap<Uuid, Sequenced<Review>>>,
    blog_posts: Mutex<HashMap<Uuid, Sequenced<BlogPost>>>,
}

impl MemoryStore {
    /// Empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            sequence: AtomicU64::new(0),
            visitors: AtomicU64::new(0),
            users: Mutex::default(),
            payments: Mutex::default(),
            contacts: Mutex::default(),
            subscribers: Mutex::default(),
            clicks: Mutex::default(),
            reviews: Mutex::default(),
            blog_posts: Mutex::default(),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    fn sequenced<T>(&self, record: T) -> Sequenced<T> {
        Sequenced {
            seq: self.sequence.fetch_add(1, Ordering::Relaxed),
            record,
        }
    }
}

/// Lock a map, recovering the data if a previous holder panicked.
///
/// Every mutation completes before its guard drops, so a poisoned map still
/// holds consistent records.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clone records newest first by `timestamp`, latest insertion first on ties.
fn newest_first<'a, T, I, F>(entries: I, timestamp: F) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Sequenced<T>>,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut sorted: Vec<&Sequenced<T>> = entries.into_iter().collect();
    sorted.sort_by(|a, b| {
        timestamp(&b.record)
            .cmp(&timestamp(&a.record))
            .then_with(|| b.seq.cmp(&a.seq))
    });
    sorted.into_iter().map(|entry| entry.record.clone()).collect()
}
