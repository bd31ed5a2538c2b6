use crate::models::Like;
use sqlx::PgPool;

/// Create a new like on a post
///
/// A second like for the same (post, user) fails with a unique violation; the
/// caller is expected to classify it.
pub async fn create_like(pool: &PgPool, post_id: i32, user_id: i32) -> Result<Like, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        INSERT INTO likes (post_id, user_id)
        VALUES ($1, $2)
        RETURNING id, post_id, user_id, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(like)
}

/// Delete a like; returns whether a row was removed
pub async fn delete_like(pool: &PgPool, post_id: i32, user_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM likes
        WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Count total likes for a post
pub async fn count_likes_by_post(pool: &PgPool, post_id: i32) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
