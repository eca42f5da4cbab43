//! Announcement endpoints: feed, creation, detail, mark-read, statistics.
//!
//! Absence and invisibility both surface as 404 so callers cannot discover
//! announcements outside their audience.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use domain::models::{
    AnnouncementDetailResponse, AnnouncementHeader, AnnouncementStatsResponse,
    AnnouncementSummary, CreateAnnouncementRequest, CreateAuditEventInput,
    ListAnnouncementsResponse,
};
use domain::services::stats::{can_view_stats, compute_read_stats};
use domain::services::targeting::{is_member, resolve_audience};
use persistence::repositories::{
    AnnouncementRepository, AuditLogRepository, ReadReceiptRepository, UserRepository,
};
use shared::pagination::{PageInfo, PageParams};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

const NOT_AVAILABLE: &str = "Announcement not available";

/// Paged feed of announcements visible to the caller, newest first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<PageParams>,
) -> Result<Json<ListAnnouncementsResponse>, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());

    let items = repo
        .list_visible_to(user, params.limit(), params.offset())
        .await?;
    let total = repo.count_visible_to(user).await?;

    let pagination = PageInfo::new(&params, total, items.len());
    Ok(Json(ListAnnouncementsResponse { items, pagination }))
}

/// Create an announcement with optional target rules.
///
/// No rules means a broadcast; referenced role, department and user ids are
/// not checked for existence beyond foreign keys.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<AnnouncementSummary>), ApiError> {
    request.validate()?;

    let rules = request.targets.into_rules();

    let repo = AnnouncementRepository::new(state.pool.clone());
    let announcement = repo
        .create(user.id, &request.title, &request.body, &rules)
        .await?;

    AuditLogRepository::new(state.pool.clone()).insert_async(
        CreateAuditEventInput::announcement_created(announcement.id, user.id),
    );

    let summary = repo
        .find_with_author(announcement.id)
        .await?
        .ok_or_else(|| ApiError::Internal("Created announcement vanished".into()))?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// Announcement detail plus the caller's read state.
pub async fn detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<AnnouncementDetailResponse>, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());

    if !repo.is_visible_to(id, user).await? {
        return Err(ApiError::NotFound(NOT_AVAILABLE.into()));
    }

    let announcement = repo
        .find_with_author(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOT_AVAILABLE.into()))?;

    let is_read = ReadReceiptRepository::new(state.pool.clone())
        .has_read(user.id, id)
        .await?;

    Ok(Json(AnnouncementDetailResponse {
        announcement,
        is_read,
    }))
}

/// Record that the caller has read the announcement. Idempotent; the audit
/// event is appended only on the first effective write.
pub async fn mark_read(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    let users = UserRepository::new(state.pool.clone());

    if repo.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound(NOT_AVAILABLE.into()));
    }

    let rules = repo.load_targets(id).await?;
    if !is_member(&users, &rules, user.id).await? {
        return Err(ApiError::NotFound(NOT_AVAILABLE.into()));
    }

    let receipt = ReadReceiptRepository::new(state.pool.clone())
        .mark_read(user.id, id)
        .await?;

    if receipt.is_some() {
        AuditLogRepository::new(state.pool.clone())
            .insert_async(CreateAuditEventInput::announcement_read(id, user.id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Read statistics for an announcement: counters plus the readers list.
///
/// Restricted to admins and the author. The requester's role is re-read
/// from the database so a revoked admin loses access immediately.
pub async fn stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<AnnouncementStatsResponse>, ApiError> {
    let repo = AnnouncementRepository::new(state.pool.clone());
    let users = UserRepository::new(state.pool.clone());

    let announcement = repo
        .find_with_author(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOT_AVAILABLE.into()))?;

    let requester = users
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Unknown user".into()))?;

    if !can_view_stats(user.id, requester.role_id, announcement.author.id, &state.roles) {
        return Err(ApiError::Forbidden(
            "Only admins and the author may view statistics".into(),
        ));
    }

    let rules = repo.load_targets(id).await?;
    let audience = resolve_audience(&users, &rules).await?;

    let receipts = ReadReceiptRepository::new(state.pool.clone());
    let read_count = receipts.count_readers(id).await?;
    let readers = receipts.list_readers(id).await?;

    let stats = compute_read_stats(audience.len() as i64, read_count, !rules.is_empty());

    Ok(Json(AnnouncementStatsResponse {
        announcement: AnnouncementHeader {
            id: announcement.id,
            title: announcement.title,
            author: announcement.author,
            created_at: announcement.created_at,
        },
        stats,
        readers,
    }))
}
