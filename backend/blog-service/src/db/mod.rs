/// Database access layer
///
/// One repository module per resource. Each function issues exactly one statement
/// against the shared pool and returns the raw `sqlx::Error` so handlers decide how
/// a failure is classified.
pub mod comment_repo;
pub mod like_repo;
pub mod post_repo;
pub mod user_repo;
