/// HTTP handlers for blog endpoints
///
/// Each handler validates its input eagerly, issues at most one write, and
/// returns `AppError` on the first failure.
pub mod comments;
pub mod health;
pub mod likes;
pub mod posts;
pub mod users;

use crate::error::AppError;

pub use comments::{create_comment, delete_comment, get_comment, get_post_comments};
pub use health::{health_summary, liveness_check, readiness_summary};
pub use likes::{count_likes, like_post, unlike_post};
pub use posts::{create_post, get_post, list_posts};
pub use users::register_user;

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

/// Fallback for paths outside the route table
pub async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found("404 page not found"))
}
