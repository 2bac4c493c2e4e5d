//! Port abstraction for reviews and blog posts.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost, NewReview, Review, ReviewPatch};

use super::StoreError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create_review(&self, review: NewReview) -> Result<Review, StoreError>;

    async fn find_review(&self, id: &Uuid) -> Result<Option<Review>, StoreError>;

    /// Merge `patch` into the review; `None` when the id is unknown.
    async fn update_review(
        &self,
        id: &Uuid,
        patch: ReviewPatch,
    ) -> Result<Option<Review>, StoreError>;

    /// Whether a review was removed.
    async fn delete_review(&self, id: &Uuid) -> Result<bool, StoreError>;

    /// All reviews, newest first.
    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError>;

    async fn create_blog_post(&self, post: NewBlogPost) -> Result<BlogPost, StoreError>;

    async fn find_blog_post(&self, id: &Uuid) -> Result<Option<BlogPost>, StoreError>;

    /// Merge `patch` into the post; `None` when the id is unknown.
    async fn update_blog_post(
        &self,
        id: &Uuid,
        patch: BlogPostPatch,
    ) -> Result<Option<BlogPost>, StoreError>;

    /// Whether a post was removed.
    async fn delete_blog_post(&self, id: &Uuid) -> Result<bool, StoreError>;

    /// All posts, drafts included, newest first.
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError>;
}
