//! Reference-data listings used by the client's targeting pickers.

use axum::{extract::State, Json};
use domain::models::{Department, Role};
use persistence::repositories::{DepartmentRepository, RoleRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// List all roles.
pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<Role>>, ApiError> {
    let roles = RoleRepository::new(state.pool.clone()).list().await?;
    Ok(Json(roles))
}

/// List all departments.
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let departments = DepartmentRepository::new(state.pool.clone()).list().await?;
    Ok(Json(departments))
}
