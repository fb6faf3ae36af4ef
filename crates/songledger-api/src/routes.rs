//! HTTP routes.
//!
//! Wire shapes: success envelopes are `{"success": true, ...}`, errors are
//! `{"error": "..."}` with the status derived from the error kind. Query
//! and body field names are camelCase.

use crate::response::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use songledger_core::diff::compare_playlists;
use songledger_core::{LedgerError, LedgerErrorKind};
use songledger_store::backup;
use songledger_types::{CreateBackupRequest, ListFilter, Song};

/// Build the API router over shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/backup", post(create_backup))
        .route("/api/backup/list", get(list_backups))
        .route("/api/backup/stats/summary", get(backup_stats))
        .route("/api/backup/compare", post(compare_backup))
        .route("/api/backup/:id", get(get_backup).delete(delete_backup))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    playlist_id: Option<String>,
    user_id: Option<String>,
    /// Raw text; non-numeric values silently coerce to the default limit
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsQuery {
    user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompareRequest {
    /// Live playlist, fetched by the caller from the music service
    current: Option<Vec<Song>>,
    backup_id: Option<i64>,
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn create_backup(
    State(state): State<AppState>,
    Json(request): Json<CreateBackupRequest>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn.lock().await;
    let backup_id = backup::create_backup(&conn, &request)?;
    Ok(Json(json!({
        "success": true,
        "backupId": backup_id,
        "message": "backup created",
    })))
}

async fn list_backups(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>, ApiError> {
    let filter = ListFilter {
        playlist_id: query.playlist_id,
        user_id: query.user_id,
        limit: query.limit.and_then(|raw| raw.parse::<i64>().ok()),
    };

    let conn = state.conn.lock().await;
    let rows = backup::list_backups(&conn, &filter)?;
    Ok(Json(json!({
        "success": true,
        "count": rows.len(),
        "data": rows,
    })))
}

async fn get_backup(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_backup_id(&id, "get_backup")?;
    let conn = state.conn.lock().await;
    let record = backup::get_backup(&conn, id)?;
    Ok(Json(json!({ "success": true, "data": record })))
}

async fn delete_backup(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_backup_id(&id, "delete_backup")?;
    let conn = state.conn.lock().await;
    backup::delete_backup(&conn, id)?;
    Ok(Json(json!({ "success": true, "message": "backup deleted" })))
}

async fn backup_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.conn.lock().await;
    let stats = backup::backup_stats(&conn, query.user_id.as_deref())?;
    Ok(Json(json!({ "success": true, "data": stats })))
}

async fn compare_backup(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<Value>, ApiError> {
    let current = request.current.ok_or_else(|| {
        LedgerError::new(LedgerErrorKind::InvalidInput)
            .with_op("compare_backup")
            .with_message("missing required field `current`")
    })?;
    let backup_id = request.backup_id.ok_or_else(|| {
        LedgerError::new(LedgerErrorKind::InvalidInput)
            .with_op("compare_backup")
            .with_message("missing required field `backupId`")
    })?;

    let conn = state.conn.lock().await;
    let record = backup::get_backup(&conn, backup_id)?;
    let diff = compare_playlists(&current, &record.songs);
    Ok(Json(json!({ "success": true, "data": diff })))
}

/// Parse a path id: anything that is not a positive integer is a 400.
fn parse_backup_id(raw: &str, op: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError(
            LedgerError::new(LedgerErrorKind::InvalidInput)
                .with_op(op)
                .with_message(format!("invalid backup id `{}`", raw)),
        )),
    }
}
