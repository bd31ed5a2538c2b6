use crate::models::User;
use sqlx::PgPool;

/// Insert a new user and return it without the password
///
/// The password is stored exactly as given.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, username, email
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
