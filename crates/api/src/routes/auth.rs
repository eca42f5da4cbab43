//! Authentication endpoints: registration and login.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::{
    AuditAction, CreateAuditEventInput, LoginRequest, LoginResponse, RegisterRequest, User,
};
use persistence::repositories::user::CreateUserRecord;
use persistence::repositories::{AuditLogRepository, DepartmentRepository, UserRepository};
use shared::password::{hash_password, verify_password};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Register a new account. New accounts always get the employee role.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    request.validate()?;

    let departments = DepartmentRepository::new(state.pool.clone());
    if !departments.exists(request.department_id).await? {
        return Err(ApiError::Validation("Unknown department".into()));
    }

    let users = UserRepository::new(state.pool.clone());
    let password_hash = hash_password(&request.password)?;

    let user = users
        .create(CreateUserRecord {
            email: request.email,
            full_name: request.full_name,
            password_hash,
            role_id: state.roles.employee_id,
            department_id: request.department_id,
        })
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505") => {
                ApiError::Conflict("Email already registered".into())
            }
            other => other.into(),
        })?;

    AuditLogRepository::new(state.pool.clone()).insert_async(CreateAuditEventInput::new(
        AuditAction::UserRegistered,
        "user",
        user.id,
    ));

    let response = login_response(&state, &users, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Log in with email and password.
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let users = UserRepository::new(state.pool.clone());

    let user = users
        .find_by_email(&request.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let hash = user.password_hash.as_deref().ok_or_else(invalid_credentials)?;
    if !verify_password(&request.password, hash)? {
        return Err(invalid_credentials());
    }

    let response = login_response(&state, &users, &user).await?;
    Ok(Json(response))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".into())
}

async fn login_response(
    state: &AppState,
    users: &UserRepository,
    user: &User,
) -> Result<LoginResponse, ApiError> {
    let (token, _jti) =
        state
            .jwt
            .generate_token(user.id, &user.email, user.role_id, user.department_id)?;

    let profile = users
        .find_profile(user.id)
        .await?
        .ok_or_else(|| ApiError::Internal(format!("Profile missing for user {}", user.id)))?;

    Ok(LoginResponse {
        token,
        user: profile,
    })
}
