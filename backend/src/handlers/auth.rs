//! Authentication handlers

use axum::{extract::State, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{LoginRequest, User, UserResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::services::AuthService;
use crate::AppState;

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.login(&body.username, &body.password).await?;

    Ok(Json(LoginResponse {
        access_token: tokens.access_token,
        token_type: tokens.token_type,
        expires_in: tokens.expires_in,
    }))
}

#[derive(sqlx::FromRow)]
struct UserRecord {
    id: Uuid,
    username: String,
    email: String,
    full_name: String,
    password_hash: String,
    disabled: bool,
    created_at: DateTime<Utc>,
}

/// Current-user endpoint handler
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let record = sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, username, email, full_name, password_hash, disabled, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(auth.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("User".to_string()))?;

    let user = User {
        id: record.id,
        username: record.username,
        email: record.email,
        full_name: record.full_name,
        password_hash: record.password_hash,
        disabled: record.disabled,
        created_at: record.created_at,
    };

    Ok(Json(UserResponse::from(user)))
}
