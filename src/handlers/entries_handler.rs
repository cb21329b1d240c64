use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::{
    models::{CreateEntryInput, JournalEntry, UpdateEntryInput},
    AppError, AppResult, AppState,
};

/// GET /entries - List all journal entries
#[utoipa::path(
    get,
    path = "/entries",
    responses(
        (status = 200, description = "List of all journal entries", body = Vec<JournalEntry>)
    ),
    tag = "entries"
)]
pub async fn get_entries(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, date, mood, entry, title, activity, private
        FROM journal_entries
        ORDER BY id
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

/// GET /entries/{id} - Fetch a single entry
#[utoipa::path(
    get,
    path = "/entries/{id}",
    params(
        ("id" = i64, Path, description = "Journal entry ID")
    ),
    responses(
        (status = 200, description = "Journal entry", body = JournalEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<JournalEntry>> {
    let entry = fetch_entry_by_id(&state.db, entry_id)
        .await?
        .ok_or_else(entry_not_found)?;

    Ok(Json(entry))
}

/// POST /entries - Create a new journal entry
#[utoipa::path(
    post,
    path = "/entries",
    request_body = CreateEntryInput,
    responses(
        (status = 201, description = "Journal entry created", body = JournalEntry),
        (status = 422, description = "Missing required field or malformed body")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): WithRejection<Json<CreateEntryInput>, AppError>,
) -> AppResult<(StatusCode, Json<JournalEntry>)> {
    // `date` is server-assigned; clients cannot set it
    let now = Utc::now().naive_utc();

    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (date, mood, entry, title, activity, private)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, date, mood, entry, title, activity, private
        "#,
    )
    .bind(now)
    .bind(&input.mood)
    .bind(&input.entry)
    .bind(&input.title)
    .bind(&input.activity)
    .bind(input.private.unwrap_or(true))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /entries/{id} - Partially update an entry
#[utoipa::path(
    put,
    path = "/entries/{id}",
    params(
        ("id" = i64, Path, description = "Journal entry ID")
    ),
    request_body = UpdateEntryInput,
    responses(
        (status = 200, description = "Journal entry updated", body = JournalEntry),
        (status = 404, description = "Entry not found"),
        (status = 422, description = "Malformed body")
    ),
    tag = "entries"
)]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
    WithRejection(Json(input), _): WithRejection<Json<UpdateEntryInput>, AppError>,
) -> AppResult<Json<JournalEntry>> {
    // Read-modify-write: fetch the row, overlay supplied fields, persist.
    // `id` and `date` are never rebound.
    let mut entry = fetch_entry_by_id(&state.db, entry_id)
        .await?
        .ok_or_else(entry_not_found)?;

    if let Some(title) = input.title {
        entry.title = title;
    }
    if let Some(text) = input.entry {
        entry.entry = text;
    }
    if let Some(mood) = input.mood {
        entry.mood = mood;
    }
    if let Some(activity) = input.activity {
        entry.activity = activity;
    }
    if let Some(private) = input.private {
        entry.private = private;
    }

    sqlx::query(
        r#"
        UPDATE journal_entries
        SET mood = ?1, entry = ?2, title = ?3, activity = ?4, private = ?5
        WHERE id = ?6
        "#,
    )
    .bind(&entry.mood)
    .bind(&entry.entry)
    .bind(&entry.title)
    .bind(&entry.activity)
    .bind(entry.private)
    .bind(entry.id)
    .execute(&state.db)
    .await?;

    Ok(Json(entry))
}

/// DELETE /entries/{id} - Delete an entry
#[utoipa::path(
    delete,
    path = "/entries/{id}",
    params(
        ("id" = i64, Path, description = "Journal entry ID")
    ),
    responses(
        (status = 200, description = "Journal entry deleted"),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<i64>,
) -> AppResult<Json<Value>> {
    let result = sqlx::query(r#"DELETE FROM journal_entries WHERE id = ?1"#)
        .bind(entry_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(entry_not_found());
    }

    Ok(Json(json!({
        "message": "entry was deleted!"
    })))
}

fn entry_not_found() -> AppError {
    AppError::NotFound("Entry not found!".to_string())
}

async fn fetch_entry_by_id(db: &SqlitePool, entry_id: i64) -> AppResult<Option<JournalEntry>> {
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT id, date, mood, entry, title, activity, private
        FROM journal_entries
        WHERE id = ?1
        "#,
    )
    .bind(entry_id)
    .fetch_optional(db)
    .await?;

    Ok(entry)
}
