/// Like handlers - like, unlike, and count for a post
use crate::db::like_repo;
use crate::error::{AppError, Result};
use crate::models::{LikeCount, MessageResponse};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LikeRequest {
    pub user_id: i32,
}

impl LikeRequest {
    fn user_id(&self) -> Result<i32> {
        if self.user_id == 0 {
            return Err(AppError::bad_request("user_id required"));
        }
        Ok(self.user_id)
    }
}

/// Like a post; a repeated like is a 409
pub async fn like_post(
    state: web::Data<AppState>,
    post_id: web::Path<i32>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let user_id = req.user_id()?;

    let like = like_repo::create_like(&state.db, *post_id, user_id)
        .await
        .map_err(|e| AppError::from_insert(e, "Already liked", "Database error"))?;

    tracing::info!(post_id = like.post_id, user_id = like.user_id, "Post liked");

    Ok(HttpResponse::Created().json(like))
}

/// Remove a like; 404 when the pair was never liked
pub async fn unlike_post(
    state: web::Data<AppState>,
    post_id: web::Path<i32>,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let user_id = req.user_id()?;

    let deleted = like_repo::delete_like(&state.db, *post_id, user_id).await?;

    if deleted {
        tracing::info!(post_id = *post_id, user_id, "Post unliked");
        Ok(HttpResponse::Ok().json(MessageResponse::new("Unlike successfully")))
    } else {
        Err(AppError::not_found("Like not found"))
    }
}

/// Count likes for a post; zero for posts nobody liked
pub async fn count_likes(
    state: web::Data<AppState>,
    post_id: web::Path<i32>,
) -> Result<HttpResponse> {
    let likes = like_repo::count_likes_by_post(&state.db, *post_id).await?;

    Ok(HttpResponse::Ok().json(LikeCount { likes }))
}
