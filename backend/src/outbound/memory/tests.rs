//! Behavioural coverage for the in-memory store.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::MemoryStore;
use crate::domain::ports::{
    ContentRepository, EngagementRepository, PaymentRepository, StoreError, UserRepository,
};
use crate::domain::{
    BlogPostPatch, ClickEvent, ContactStatus, NewBlogPost, NewContact, NewPayment, NewReview,
    NewUser, PaymentStatus, ReviewPatch,
};
use crate::test_support::clock::MutableClock;

struct Harness {
    clock: Arc<MutableClock>,
    store: MemoryStore,
}

#[fixture]
fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn harness(start: DateTime<Utc>) -> Harness {
    let clock = Arc::new(MutableClock::new(start));
    let store = MemoryStore::new(clock.clone());
    Harness { clock, store }
}

fn contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        subject: "Coaching enquiry".to_owned(),
        message: "I would like to book a session.".to_owned(),
    }
}

fn review(name: &str) -> NewReview {
    NewReview {
        name: name.to_owned(),
        role: "Manager".to_owned(),
        company: "Initech".to_owned(),
        content: "Sharp, honest and practical advice.".to_owned(),
        rating: 5,
        image_url: None,
        is_active: true,
    }
}

fn blog_post(title: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_owned(),
        excerpt: "A short excerpt for the card.".to_owned(),
        content: "c".repeat(80),
        category: "Career".to_owned(),
        image_url: None,
        author: "Manisha Sharma".to_owned(),
        read_time: "5 min read".to_owned(),
        is_published: false,
    }
}

#[rstest]
#[tokio::test]
async fn usernames_are_unique(harness: Harness) {
    let store = &harness.store;
    let created = store
        .create_user(NewUser::with_password("admin", "pw").expect("hash"))
        .await
        .expect("create");

    let err = store
        .create_user(NewUser::with_password("admin", "other").expect("hash"))
        .await
        .expect_err("duplicate");
    assert!(matches!(err, StoreError::Conflict { .. }));

    let by_name = store
        .find_user_by_username("admin")
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(by_name.id, created.id);
    assert_eq!(
        store.find_user(&created.id).await.expect("lookup"),
        Some(created)
    );
}

#[rstest]
#[tokio::test]
async fn payment_status_leaves_created_once(harness: Harness) {
    let store = &harness.store;
    store
        .create_payment(NewPayment::created("order_1", 599_900, "Launch", "Freshers"))
        .await
        .expect("create");

    let paid = store
        .update_payment_status("order_1", PaymentStatus::Paid, Some("pay_1".to_owned()))
        .await
        .expect("update")
        .expect("known order");
    assert_eq!(paid.status, PaymentStatus::Paid);
    assert_eq!(paid.payment_id.as_deref(), Some("pay_1"));

    let unchanged = store
        .update_payment_status("order_1", PaymentStatus::Failed, None)
        .await
        .expect("update")
        .expect("known order");
    assert_eq!(unchanged.status, PaymentStatus::Paid);
    assert_eq!(unchanged.payment_id.as_deref(), Some("pay_1"));
}

#[rstest]
#[tokio::test]
async fn unknown_order_updates_nothing(harness: Harness) {
    let store = &harness.store;
    let result = store
        .update_payment_status("order_missing", PaymentStatus::Paid, None)
        .await
        .expect("update");
    assert!(result.is_none());
    assert!(store.list_payments().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn recreating_an_order_replaces_it(harness: Harness) {
    let store = &harness.store;
    store
        .create_payment(NewPayment::created("order_1", 100, "A", "X"))
        .await
        .expect("create");
    store
        .create_payment(NewPayment::created("order_1", 200, "B", "Y"))
        .await
        .expect("create");

    let payments = store.list_payments().await.expect("list");
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 200);
}

#[rstest]
#[tokio::test]
async fn lists_are_newest_first(harness: Harness) {
    let store = &harness.store;
    store.create_contact(contact("Ada")).await.expect("create");
    harness.clock.advance_seconds(60);
    store.create_contact(contact("Grace")).await.expect("create");
    // Same timestamp as Grace; insertion order breaks the tie.
    store.create_contact(contact("Linus")).await.expect("create");

    let names: Vec<_> = store
        .list_contacts()
        .await
        .expect("list")
        .into_iter()
        .map(|contact| contact.name)
        .collect();
    assert_eq!(names, ["Linus", "Grace", "Ada"]);
}

#[rstest]
#[tokio::test]
async fn contacts_start_as_new(harness: Harness) {
    let created = harness
        .store
        .create_contact(contact("Ada"))
        .await
        .expect("create");
    assert_eq!(created.status, ContactStatus::New);
}

#[rstest]
#[tokio::test]
async fn subscribing_twice_is_idempotent(harness: Harness) {
    let store = &harness.store;
    let first = store.subscribe("a@example.com").await.expect("subscribe");
    harness.clock.advance_seconds(5);
    let second = store.subscribe("a@example.com").await.expect("subscribe");

    assert_eq!(first, second);
    assert!(first.is_active);
    assert_eq!(store.list_subscribers().await.expect("list").len(), 1);
}

#[rstest]
#[tokio::test]
async fn clicks_accumulate_per_button(harness: Harness, start: DateTime<Utc>) {
    let store = &harness.store;
    let hero = || ClickEvent::new("hero-cta", "Book a Call", "Hero");
    store.track_button_click(hero()).await.expect("click");
    harness.clock.advance_seconds(30);
    let second = store.track_button_click(hero()).await.expect("click");
    store
        .track_button_click(ClickEvent::new("footer", "Subscribe", "Footer"))
        .await
        .expect("click");

    assert_eq!(second.click_count, 2);
    assert_eq!(second.last_clicked, start + chrono::TimeDelta::seconds(30));

    let clicks = store.list_button_clicks().await.expect("list");
    let counts: Vec<_> = clicks
        .iter()
        .map(|click| (click.button_id.as_str(), click.click_count))
        .collect();
    assert_eq!(counts, [("hero-cta", 2), ("footer", 1)]);
}

#[rstest]
#[tokio::test]
async fn stats_count_only_paid_payments(harness: Harness) {
    let store = &harness.store;
    for (order_id, amount) in [("o1", 5999), ("o2", 10599), ("o3", 777)] {
        store
            .create_payment(NewPayment::created(order_id, amount, "Plan", "Cat"))
            .await
            .expect("create");
    }
    for order_id in ["o1", "o2"] {
        store
            .update_payment_status(order_id, PaymentStatus::Paid, Some(format!("pay_{order_id}")))
            .await
            .expect("update");
    }
    store
        .update_payment_status("o3", PaymentStatus::Failed, None)
        .await
        .expect("update");
    for _ in 0..4 {
        store.record_visit().await.expect("visit");
    }
    store.create_contact(contact("Ada")).await.expect("contact");
    store.subscribe("a@example.com").await.expect("subscribe");
    store
        .track_button_click(ClickEvent::new("cta", "Start", "Hero"))
        .await
        .expect("click");

    let stats = store.stats().await.expect("stats");
    assert_eq!(stats.total_payments, 2);
    assert_eq!(stats.total_revenue, 16598);
    assert_eq!(stats.total_visitors, 4);
    assert_eq!(stats.conversion_rate, 50);
    assert_eq!(stats.total_contacts, 1);
    assert_eq!(stats.total_subscribers, 1);
    assert_eq!(stats.total_clicks, 1);
    assert_eq!(stats.popular_buttons.len(), 1);
}

#[rstest]
#[tokio::test]
async fn stats_do_not_count_visits(harness: Harness) {
    let store = &harness.store;
    store.stats().await.expect("stats");
    let stats = store.stats().await.expect("stats");
    assert_eq!(stats.total_visitors, 0);
    assert_eq!(stats.conversion_rate, 0);
    assert_eq!(store.record_visit().await.expect("visit"), 1);
}

#[rstest]
#[tokio::test]
async fn review_crud(harness: Harness) {
    let store = &harness.store;
    let created = store.create_review(review("Asha")).await.expect("create");

    let updated = store
        .update_review(
            &created.id,
            ReviewPatch {
                rating: Some(3),
                ..ReviewPatch::default()
            },
        )
        .await
        .expect("update")
        .expect("known");
    assert_eq!(updated.rating, 3);
    assert_eq!(updated.name, "Asha");
    assert_eq!(updated.created_at, created.created_at);

    assert!(store.delete_review(&created.id).await.expect("delete"));
    assert!(!store.delete_review(&created.id).await.expect("delete"));
    assert!(store.find_review(&created.id).await.expect("find").is_none());
}

#[rstest]
#[tokio::test]
async fn updating_unknown_content_returns_none(harness: Harness) {
    let store = &harness.store;
    let missing = Uuid::new_v4();
    assert!(
        store
            .update_review(&missing, ReviewPatch::default())
            .await
            .expect("update")
            .is_none()
    );
    assert!(
        store
            .update_blog_post(&missing, BlogPostPatch::default())
            .await
            .expect("update")
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn blog_posts_keep_drafts_in_admin_listing(harness: Harness) {
    let store = &harness.store;
    let draft = store
        .create_blog_post(blog_post("First Draft"))
        .await
        .expect("create");
    harness.clock.advance_seconds(1);
    let live = store
        .create_blog_post(NewBlogPost {
            is_published: true,
            ..blog_post("Live Article")
        })
        .await
        .expect("create");

    let listed: Vec<_> = store
        .list_blog_posts()
        .await
        .expect("list")
        .into_iter()
        .map(|post| post.id)
        .collect();
    assert_eq!(listed, [live.id, draft.id]);
}
