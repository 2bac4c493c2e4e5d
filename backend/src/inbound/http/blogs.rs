//! Blog endpoints.
//!
//! ```text
//! GET    /api/blogs?search=resume&category=Career
//! GET    /api/admin/blogs
//! POST   /api/admin/blogs
//! GET    /api/admin/blogs/{id}
//! PATCH  /api/admin/blogs/{id}
//! DELETE /api/admin/blogs/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    BlogFilter, BlogPost, BlogPostPatch, DEFAULT_BLOG_AUTHOR, DEFAULT_READ_TIME, Error,
    NewBlogPost,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::admin::SuccessResponse;
use crate::inbound::http::error::store_error;
use crate::inbound::http::schemas::{BlogPostSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, nullable, parse_uuid, validate};

const BLOG_ID: FieldName = FieldName::new("id");

fn default_author() -> String {
    DEFAULT_BLOG_AUTHOR.to_owned()
}

fn default_read_time() -> String {
    DEFAULT_READ_TIME.to_owned()
}

/// Public listing filters. `category=All` or a blank value disables a filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogQuery {
    /// Case-insensitive text matched against title and excerpt.
    pub search: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
}

/// Body for `POST /api/admin/blogs`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRequest {
    #[validate(length(min = 5))]
    pub title: String,
    #[validate(length(min = 10))]
    pub excerpt: String,
    #[validate(length(min = 50))]
    pub content: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_read_time")]
    pub read_time: String,
    #[serde(default)]
    pub is_published: bool,
}

impl From<BlogPostRequest> for NewBlogPost {
    fn from(value: BlogPostRequest) -> Self {
        Self {
            title: value.title,
            excerpt: value.excerpt,
            content: value.content,
            category: value.category,
            image_url: value.image_url,
            author: value.author,
            read_time: value.read_time,
            is_published: value.is_published,
        }
    }
}

/// Body for `PATCH /api/admin/blogs/{id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostPatchRequest {
    #[validate(length(min = 5))]
    pub title: Option<String>,
    #[validate(length(min = 10))]
    pub excerpt: Option<String>,
    #[validate(length(min = 50))]
    pub content: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub author: Option<String>,
    pub read_time: Option<String>,
    pub is_published: Option<bool>,
}

impl From<BlogPostPatchRequest> for BlogPostPatch {
    fn from(value: BlogPostPatchRequest) -> Self {
        Self {
            title: value.title,
            excerpt: value.excerpt,
            content: value.content,
            category: value.category,
            image_url: value.image_url,
            author: value.author,
            read_time: value.read_time,
            is_published: value.is_published,
        }
    }
}

fn post_not_found(id: &Uuid) -> Error {
    Error::not_found(format!("blog post {id} not found"))
}

/// Published posts matching the filters, newest first.
#[utoipa::path(
    get,
    path = "/api/blogs",
    params(BlogQuery),
    responses(
        (status = 200, description = "Published posts", body = [BlogPostSchema]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listPublishedBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_published_posts(
    state: web::Data<HttpState>,
    query: web::Query<BlogQuery>,
) -> ApiResult<web::Json<Vec<BlogPost>>> {
    let filter = BlogFilter::new(query.search.as_deref(), query.category.as_deref());
    let mut posts = state
        .content
        .list_blog_posts()
        .await
        .map_err(store_error("list blog posts"))?;
    posts.retain(|post| filter.matches(post));
    Ok(web::Json(posts))
}

/// Every post, drafts included.
#[utoipa::path(
    get,
    path = "/api/admin/blogs",
    responses(
        (status = 200, description = "All posts", body = [BlogPostSchema]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminListBlogs"
)]
#[get("/blogs")]
pub async fn list_posts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<BlogPost>>> {
    session.require_admin()?;
    let posts = state
        .content
        .list_blog_posts()
        .await
        .map_err(store_error("list blog posts"))?;
    Ok(web::Json(posts))
}

#[utoipa::path(
    post,
    path = "/api/admin/blogs",
    request_body = BlogPostRequest,
    responses(
        (status = 201, description = "Post created", body = BlogPostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminCreateBlog"
)]
#[post("/blogs")]
pub async fn create_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<BlogPostRequest>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    validate(&*payload)?;
    let post = state
        .content
        .create_blog_post(payload.into_inner().into())
        .await
        .map_err(store_error("create blog post"))?;
    Ok(HttpResponse::Created().json(post))
}

#[utoipa::path(
    get,
    path = "/api/admin/blogs/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post", body = BlogPostSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminGetBlog"
)]
#[get("/blogs/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<BlogPost>> {
    session.require_admin()?;
    let id = parse_uuid(&path, BLOG_ID)?;
    state
        .content
        .find_blog_post(&id)
        .await
        .map_err(store_error("find blog post"))?
        .map(web::Json)
        .ok_or_else(|| post_not_found(&id))
}

#[utoipa::path(
    patch,
    path = "/api/admin/blogs/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    request_body = BlogPostPatchRequest,
    responses(
        (status = 200, description = "Updated post", body = BlogPostSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateBlog"
)]
#[patch("/blogs/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<BlogPostPatchRequest>,
) -> ApiResult<web::Json<BlogPost>> {
    session.require_admin()?;
    let id = parse_uuid(&path, BLOG_ID)?;
    validate(&*payload)?;
    state
        .content
        .update_blog_post(&id, payload.into_inner().into())
        .await
        .map_err(store_error("update blog post"))?
        .map(web::Json)
        .ok_or_else(|| post_not_found(&id))
}

#[utoipa::path(
    delete,
    path = "/api/admin/blogs/{id}",
    params(("id" = String, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted", body = SuccessResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteBlog"
)]
#[delete("/blogs/{id}")]
pub async fn delete_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<SuccessResponse>> {
    session.require_admin()?;
    let id = parse_uuid(&path, BLOG_ID)?;
    let deleted = state
        .content
        .delete_blog_post(&id)
        .await
        .map_err(store_error("delete blog post"))?;
    if !deleted {
        return Err(post_not_found(&id));
    }
    Ok(SuccessResponse::ok())
}
