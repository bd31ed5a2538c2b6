/// Comment handlers - HTTP endpoints for comment operations
use crate::db::comment_repo;
use crate::error::{AppError, Result};
use crate::models::MessageResponse;
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Request body for creating a comment
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCommentRequest {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
}

/// Create a new comment
pub async fn create_comment(
    state: web::Data<AppState>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    if req.content.is_empty() || req.post_id == 0 || req.user_id == 0 {
        return Err(AppError::bad_request("all fields required"));
    }

    let comment = comment_repo::create_comment(&state.db, req.post_id, req.user_id, &req.content)
        .await
        .map_err(|e| AppError::store("Failed to create comment", e))?;

    tracing::info!(
        comment_id = comment.id,
        post_id = comment.post_id,
        "Comment created"
    );

    Ok(HttpResponse::Created().json(comment))
}

/// Get a single comment
pub async fn get_comment(
    state: web::Data<AppState>,
    comment_id: web::Path<i32>,
) -> Result<HttpResponse> {
    match comment_repo::get_comment_by_id(&state.db, *comment_id).await? {
        Some(comment) => Ok(HttpResponse::Ok().json(comment)),
        None => Err(AppError::not_found("Comment not found")),
    }
}

/// Delete a comment
///
/// Not-found is decided by the affected row count of the delete itself.
pub async fn delete_comment(
    state: web::Data<AppState>,
    comment_id: web::Path<i32>,
) -> Result<HttpResponse> {
    let deleted = comment_repo::delete_comment(&state.db, *comment_id).await?;

    if deleted {
        tracing::info!(comment_id = *comment_id, "Comment deleted");
        Ok(HttpResponse::Ok().json(MessageResponse::new("Comment deleted successfully")))
    } else {
        Err(AppError::not_found("Comment not found"))
    }
}

/// Get comments for a post, newest first; an unknown post yields an empty list
pub async fn get_post_comments(
    state: web::Data<AppState>,
    post_id: web::Path<i32>,
) -> Result<HttpResponse> {
    let comments = comment_repo::get_comments_by_post(&state.db, *post_id).await?;

    Ok(HttpResponse::Ok().json(comments))
}
