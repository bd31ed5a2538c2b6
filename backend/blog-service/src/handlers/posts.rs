/// Post handlers - HTTP endpoints for post operations
use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::PostPage;
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub user_id: i32,
}

/// Raw `page`/`limit` query parameters
///
/// Kept as strings so that garbage never fails extraction; see [`PageQuery::resolve`].
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    /// Reads each key on its own; a repeated key keeps its first value.
    pub fn from_query_string(query: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(|q| q.into_inner())
            .unwrap_or_default();

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        PageQuery {
            page: first("page"),
            limit: first("limit"),
        }
    }

    /// Effective (page, limit). Missing, unparseable, or non-positive values fall
    /// back to the defaults silently.
    pub fn resolve(&self) -> (i64, i64) {
        (
            positive_or(self.page.as_deref(), DEFAULT_PAGE),
            positive_or(self.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

pub fn page_offset(page: i64, limit: i64) -> i64 {
    (page - 1).saturating_mul(limit)
}

/// Create a new post
pub async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    if req.title.is_empty() || req.content.is_empty() || req.user_id == 0 {
        return Err(AppError::bad_request("all fields required"));
    }

    let post = post_repo::create_post(&state.db, &req.title, &req.content, req.user_id)
        .await
        .map_err(|e| AppError::store("Failed to create post", e))?;

    tracing::info!(post_id = post.id, user_id = post.user_id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
pub async fn get_post(state: web::Data<AppState>, post_id: web::Path<i32>) -> Result<HttpResponse> {
    match post_repo::find_post_by_id(&state.db, *post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::not_found("Post not found")),
    }
}

/// List posts newest first with offset pagination
pub async fn list_posts(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let (page, limit) = PageQuery::from_query_string(req.query_string()).resolve();

    let posts = post_repo::list_posts(&state.db, limit, page_offset(page, limit)).await?;
    let total = post_repo::count_posts(&state.db).await?;

    Ok(HttpResponse::Ok().json(PostPage {
        posts,
        page,
        limit,
        total,
    }))
}
