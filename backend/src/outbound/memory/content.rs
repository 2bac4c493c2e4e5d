use async_trait::async_trait;
use uuid::Uuid;

use super::{MemoryStore, lock, newest_first};
use crate::domain::ports::{ContentRepository, StoreError};
use crate::domain::{BlogPost, BlogPostPatch, NewBlogPost, NewReview, Review, ReviewPatch};

#[async_trait]
impl ContentRepository for MemoryStore {
    async fn create_review(&self, review: NewReview) -> Result<Review, StoreError> {
        let NewReview {
            name,
            role,
            company,
            content,
            rating,
            image_url,
            is_active,
        } = review;
        let created = Review {
            id: Uuid::new_v4(),
            name,
            role,
            company,
            content,
            rating,
            image_url,
            is_active,
            created_at: self.now(),
        };
        lock(&self.reviews).insert(created.id, self.sequenced(created.clone()));
        Ok(created)
    }

    async fn find_review(&self, id: &Uuid) -> Result<Option<Review>, StoreError> {
        Ok(lock(&self.reviews).get(id).map(|entry| entry.record.clone()))
    }

    async fn update_review(
        &self,
        id: &Uuid,
        patch: ReviewPatch,
    ) -> Result<Option<Review>, StoreError> {
        Ok(lock(&self.reviews).get_mut(id).map(|entry| {
            entry.record.apply(patch);
            entry.record.clone()
        }))
    }

    async fn delete_review(&self, id: &Uuid) -> Result<bool, StoreError> {
        Ok(lock(&self.reviews).remove(id).is_some())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(newest_first(lock(&self.reviews).values(), |review| {
            review.created_at
        }))
    }

    async fn create_blog_post(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let NewBlogPost {
            title,
            excerpt,
            content,
            category,
            image_url,
            author,
            read_time,
            is_published,
        } = post;
        let created = BlogPost {
            id: Uuid::new_v4(),
            title,
            excerpt,
            content,
            category,
            image_url,
            author,
            read_time,
            is_published,
            created_at: self.now(),
        };
        lock(&self.blog_posts).insert(created.id, self.sequenced(created.clone()));
        Ok(created)
    }

    async fn find_blog_post(&self, id: &Uuid) -> Result<Option<BlogPost>, StoreError> {
        Ok(lock(&self.blog_posts)
            .get(id)
            .map(|entry| entry.record.clone()))
    }

    async fn update_blog_post(
        &self,
        id: &Uuid,
        patch: BlogPostPatch,
    ) -> Result<Option<BlogPost>, StoreError> {
        Ok(lock(&self.blog_posts).get_mut(id).map(|entry| {
            entry.record.apply(patch);
            entry.record.clone()
        }))
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<bool, StoreError> {
        Ok(lock(&self.blog_posts).remove(id).is_some())
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(newest_first(lock(&self.blog_posts).values(), |post| {
            post.created_at
        }))
    }
}
