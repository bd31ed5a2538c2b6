/// User handlers - registration
use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

/// Request body for registration; absent fields deserialize as empty
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Register a new user
///
/// Any insert failure, including a duplicate username or email, is reported as a
/// generic 500.
pub async fn register_user(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    if !req.is_complete() {
        return Err(AppError::bad_request("all fields required"));
    }

    let user = user_repo::create_user(&state.db, &req.username, &req.email, &req.password)
        .await
        .map_err(|e| AppError::store("Failed to create user", e))?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(HttpResponse::Created().json(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_incomplete() {
        let req: RegisterRequest = serde_json::from_str(r#"{"username":"ada"}"#).unwrap();
        assert!(!req.is_complete());

        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"ada","email":"ada@example.com","password":"pw"}"#,
        )
        .unwrap();
        assert!(req.is_complete());
    }
}
