use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use domain::models::{WellKnownRoles, ADMIN_ROLE_NAME, EMPLOYEE_ROLE_NAME};
use persistence::repositories::RoleRepository;
use shared::jwt::JwtConfig;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::routes::{announcements, auth, health, meta};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub jwt: Arc<JwtConfig>,
    pub roles: WellKnownRoles,
}

/// Looks up the ids of the seeded roles once at startup. Per-request
/// authorization compares against these ids instead of re-querying by name.
pub async fn resolve_well_known_roles(pool: &PgPool) -> anyhow::Result<WellKnownRoles> {
    let repo = RoleRepository::new(pool.clone());

    let admin = repo
        .find_by_name(ADMIN_ROLE_NAME)
        .await?
        .context("admin role missing; seed migration has not run")?;
    let employee = repo
        .find_by_name(EMPLOYEE_ROLE_NAME)
        .await?
        .context("employee role missing; seed migration has not run")?;

    Ok(WellKnownRoles {
        admin_id: admin.id,
        employee_id: employee.id,
    })
}

pub fn create_app(config: Config, pool: PgPool, roles: WellKnownRoles) -> Router {
    let config = Arc::new(config);

    let jwt = Arc::new(JwtConfig::new(
        &config.jwt.secret,
        config.jwt.token_expiry_secs,
    ));

    let state = AppState {
        pool,
        config: config.clone(),
        jwt,
        roles,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/meta/roles", get(meta::list_roles))
        .route("/meta/departments", get(meta::list_departments));

    // Announcement routes; the CurrentUser extractor enforces the token
    let announcement_routes = Router::new()
        .route(
            "/announcements",
            get(announcements::list).post(announcements::create),
        )
        .route("/announcements/:id", get(announcements::detail))
        .route("/announcements/:id/read", post(announcements::mark_read))
        .route("/announcements/:id/stats", get(announcements::stats));

    Router::new()
        .merge(public_routes)
        .merge(announcement_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
