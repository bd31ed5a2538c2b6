use crate::models::Comment;
use sqlx::PgPool;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (user_id, post_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, post_id, content, created_at
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get a single comment by ID
pub async fn get_comment_by_id(
    pool: &PgPool,
    comment_id: i32,
) -> Result<Option<Comment>, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, post_id, content, created_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    Ok(comment)
}

/// Hard delete a comment; returns whether a row was removed
pub async fn delete_comment(pool: &PgPool, comment_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get all comments for a post, newest first
pub async fn get_comments_by_post(
    pool: &PgPool,
    post_id: i32,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, user_id, post_id, content, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
