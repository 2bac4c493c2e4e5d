//! Editorial content managed from the admin dashboard: client reviews and
//! blog posts.
//!
//! Partial updates are expressed as patch structs whose `None` fields leave
//! the stored value untouched. Optional columns use `Option<Option<_>>` so a
//! patch can clear them explicitly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author credited when a post does not name one.
pub const DEFAULT_BLOG_AUTHOR: &str = "Manisha Sharma";
/// Reading-time label used when a post does not specify one.
pub const DEFAULT_READ_TIME: &str = "5 min read";
/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Client testimonial shown on the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    /// Star rating in `1..=5`.
    pub rating: u8,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a new review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    pub image_url: Option<String>,
    pub is_active: bool,
}

/// Fields to merge into an existing review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub content: Option<String>,
    pub rating: Option<u8>,
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl Review {
    /// Merge the present fields of `patch` into this review.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use coaching_site::domain::{Review, ReviewPatch};
    /// use uuid::Uuid;
    ///
    /// let mut review = Review {
    ///     id: Uuid::new_v4(),
    ///     name: "Asha".into(),
    ///     role: "Analyst".into(),
    ///     company: "Acme".into(),
    ///     content: "Helped me switch careers.".into(),
    ///     rating: 4,
    ///     image_url: None,
    ///     is_active: true,
    ///     created_at: Utc::now(),
    /// };
    /// review.apply(ReviewPatch { rating: Some(5), ..ReviewPatch::default() });
    /// assert_eq!(review.rating, 5);
    /// assert_eq!(review.name, "Asha");
    /// ```
    pub fn apply(&mut self, patch: ReviewPatch) {
        let ReviewPatch {
            name,
            role,
            company,
            content,
            rating,
            image_url,
            is_active,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(company) = company {
            self.company = company;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}

/// Article published in the blog section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
    pub author: String,
    pub read_time: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a new blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
    pub author: String,
    pub read_time: String,
    pub is_published: bool,
}

/// Fields to merge into an existing blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<Option<String>>,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub is_published: Option<bool>,
}

impl BlogPost {
    /// Merge the present fields of `patch` into this post.
    pub fn apply(&mut self, patch: BlogPostPatch) {
        let BlogPostPatch {
            title,
            excerpt,
            content,
            category,
            image_url,
            author,
            read_time,
            is_published,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(excerpt) = excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(read_time) = read_time {
            self.read_time = read_time;
        }
        if let Some(is_published) = is_published {
            self.is_published = is_published;
        }
    }
}

/// Public blog listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    search: Option<String>,
    category: Option<String>,
}

impl BlogFilter {
    /// Build a filter from raw query values. Blank values and the
    /// [`ALL_CATEGORIES`] category disable the corresponding criterion.
    ///
    /// # Examples
    /// ```
    /// use coaching_site::domain::BlogFilter;
    ///
    /// let filter = BlogFilter::new(Some("  Resume "), Some("All"));
    /// assert_eq!(filter.search(), Some("resume"));
    /// assert_eq!(filter.category(), None);
    /// ```
    pub fn new(search: Option<&str>, category: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase);
        let category = category
            .map(str::trim)
            .filter(|value| !value.is_empty() && *value != ALL_CATEGORIES)
            .map(str::to_owned);
        Self { search, category }
    }

    /// Lowercased search needle, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Exact category to match, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether `post` should be listed publicly under this filter.
    pub fn matches(&self, post: &BlogPost) -> bool {
        if !post.is_published {
            return false;
        }
        if let Some(category) = self.category() {
            if post.category != category {
                return false;
            }
        }
        match self.search() {
            Some(needle) => {
                post.title.to_lowercase().contains(needle)
                    || post.excerpt.to_lowercase().contains(needle)
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn post() -> BlogPost {
        BlogPost {
            id: Uuid::nil(),
            title: "Negotiating Your Salary".into(),
            excerpt: "Five scripts that work in any interview.".into(),
            content: "x".repeat(60),
            category: "Career".into(),
            image_url: Some("/uploads/a.png".into()),
            author: DEFAULT_BLOG_AUTHOR.into(),
            read_time: DEFAULT_READ_TIME.into(),
            is_published: true,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some("salary"), None, true)]
    #[case(Some("SCRIPTS"), None, true)]
    #[case(Some("leadership"), None, false)]
    #[case(None, Some("Career"), true)]
    #[case(None, Some("All"), true)]
    #[case(None, Some("Resume"), false)]
    #[case(Some("salary"), Some("Resume"), false)]
    #[case(Some("   "), Some(""), true)]
    fn filter_matches_published_posts(
        post: BlogPost,
        #[case] search: Option<&str>,
        #[case] category: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(BlogFilter::new(search, category).matches(&post), expected);
    }

    #[rstest]
    fn filter_hides_drafts(mut post: BlogPost) {
        post.is_published = false;
        assert!(!BlogFilter::default().matches(&post));
    }

    #[rstest]
    fn patch_can_clear_image(mut post: BlogPost) {
        post.apply(BlogPostPatch {
            image_url: Some(None),
            is_published: Some(false),
            ..BlogPostPatch::default()
        });
        assert_eq!(post.image_url, None);
        assert!(!post.is_published);
        assert_eq!(post.title, "Negotiating Your Salary");
    }

    #[rstest]
    fn review_patch_leaves_absent_fields() {
        let mut review = Review {
            id: Uuid::nil(),
            name: "Ravi".into(),
            role: "Engineer".into(),
            company: "Globex".into(),
            content: "Clear, practical guidance.".into(),
            rating: 3,
            image_url: Some("/uploads/r.png".into()),
            is_active: true,
            created_at: Utc::now(),
        };
        review.apply(ReviewPatch {
            is_active: Some(false),
            ..ReviewPatch::default()
        });
        assert!(!review.is_active);
        assert_eq!(review.rating, 3);
        assert_eq!(review.image_url.as_deref(), Some("/uploads/r.png"));
    }
}
