//! The five CRUD operations, written once
//!
//! Each public function here is one operation (list, create, get_one, update,
//! delete) generic over [`Resource`]. The per-entity handler modules only
//! bind axum extractors to these. Internally every operation is a
//! `Result<_, ApiError>` pipeline; `render_error` owns the mapping from the
//! closed error set to the wire envelope.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::resource::{JsonMap, Resource};
use crate::response::{to_data, ApiResponse};
use crate::state::AppState;

/// Raw request body: either a decoded JSON value or the decode failure
pub type Body = Result<Json<Value>, JsonRejection>;

/// Operation label for failure messages
#[derive(Debug, Clone, Copy)]
enum Op {
    Get,
    Create,
    Update,
    Delete,
}

/// List all records, optionally scoped to an ancestor
pub async fn list<R: Resource>(state: &AppState, parent: Option<i64>) -> ApiResponse {
    let table = R::table(state.store());
    let rows = match parent {
        Some(parent_id) => table.filter(|row| row.parent_id() == Some(parent_id)).await,
        None => table.all().await,
    };

    ApiResponse::success(
        format!("Get all {} successfully!", R::LABEL_PLURAL),
        to_data(&rows),
        StatusCode::OK,
    )
}

/// Create a record from the request body
pub async fn create<R: Resource>(state: &AppState, body: Body) -> ApiResponse {
    match try_create::<R>(state, body).await {
        Ok(row) => {
            tracing::info!(entity = R::LABEL, id = row.id(), "created");
            ApiResponse::success(
                format!("Create {} successfully!", R::LABEL),
                to_data(&row),
                StatusCode::CREATED,
            )
        }
        Err(err) => render_error::<R>(Op::Create, err),
    }
}

/// Fetch one record by id (and ancestor, on scoped routes)
pub async fn get_one<R: Resource>(state: &AppState, parent: Option<i64>, id: i64) -> ApiResponse {
    match find::<R>(state, parent, id).await {
        Ok(row) => ApiResponse::success(
            format!("Get {} successfully!", R::LABEL),
            to_data(&row),
            StatusCode::OK,
        ),
        Err(err) => render_error::<R>(Op::Get, err),
    }
}

/// Merge the request body onto an existing record and re-save it
pub async fn update<R: Resource>(
    state: &AppState,
    parent: Option<i64>,
    id: i64,
    body: Body,
) -> ApiResponse {
    match try_update::<R>(state, parent, id, body).await {
        Ok(row) => ApiResponse::success(
            format!("Update {} successfully!", R::LABEL),
            to_data(&row),
            StatusCode::OK,
        ),
        Err(err) => render_error::<R>(Op::Update, err),
    }
}

/// Delete one record, honoring its referential integrity policy
pub async fn delete<R: Resource>(state: &AppState, parent: Option<i64>, id: i64) -> ApiResponse {
    match try_delete::<R>(state, parent, id).await {
        Ok(id) => {
            tracing::info!(entity = R::LABEL, id, "deleted");
            let mut ack = Map::new();
            ack.insert(R::ACK_FIELD.to_string(), Value::from(id));
            ApiResponse::success(
                format!("Delete {} successfully!", R::LABEL),
                Value::Object(ack),
                StatusCode::NO_CONTENT,
            )
        }
        Err(err) => render_error::<R>(Op::Delete, err),
    }
}

async fn try_create<R: Resource>(state: &AppState, body: Body) -> Result<R, ApiError> {
    let payload = decode(body)?;
    let draft = R::draft(state.store(), &payload)
        .await
        .map_err(ApiError::Validation)?;
    let row = R::table(state.store()).insert(|id| draft.build(id)).await;
    Ok(row)
}

async fn try_update<R: Resource>(
    state: &AppState,
    parent: Option<i64>,
    id: i64,
    body: Body,
) -> Result<R, ApiError> {
    let payload = decode(body)?;
    let mut row = find::<R>(state, parent, id).await?;
    row.merge(state.store(), &payload)
        .await
        .map_err(ApiError::Validation)?;
    let saved = R::table(state.store()).replace(id, row).await?;
    Ok(saved)
}

async fn try_delete<R: Resource>(
    state: &AppState,
    parent: Option<i64>,
    id: i64,
) -> Result<i64, ApiError> {
    let row = find::<R>(state, parent, id).await?;
    row.check_delete(state.store())
        .await
        .map_err(ApiError::DeleteRestricted)?;
    R::table(state.store()).remove(id).await?;
    row.cascade_delete(state.store()).await;
    Ok(id)
}

/// Resolve by id, then require the owning ancestor to match on scoped routes
///
/// A record living under a different ancestor is indistinguishable from a
/// missing one.
async fn find<R: Resource>(state: &AppState, parent: Option<i64>, id: i64) -> Result<R, ApiError> {
    let row = R::table(state.store())
        .get(id)
        .await
        .ok_or(ApiError::NotFound)?;
    match parent {
        Some(parent_id) if row.parent_id() != Some(parent_id) => Err(ApiError::NotFound),
        _ => Ok(row),
    }
}

/// Accept only a JSON object as the request body
fn decode(body: Body) -> Result<JsonMap, ApiError> {
    match body {
        Ok(Json(Value::Object(payload))) => Ok(payload),
        Ok(Json(_)) => Err(ApiError::Decode),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "request body rejected");
            Err(ApiError::Decode)
        }
    }
}

fn failure_message<R: Resource>(op: Op) -> String {
    match op {
        Op::Get => format!("Get {} failed!", R::LABEL),
        Op::Create => format!("Create {} failed", R::LABEL),
        Op::Update => format!("Update {} failed", R::LABEL),
        Op::Delete => format!("Delete {} failed!", R::LABEL),
    }
}

fn render_error<R: Resource>(op: Op, err: ApiError) -> ApiResponse {
    match err {
        ApiError::Decode => ApiResponse::error("JSON decode error!", Value::Null),
        ApiError::NotFound => ApiResponse::error(
            failure_message::<R>(op),
            Value::String(format!("{} not found!", R::TITLE)),
        ),
        ApiError::Validation(errors) => {
            ApiResponse::error(failure_message::<R>(op), to_data(&errors))
        }
        ApiError::Store(err) => {
            tracing::error!(
                entity = R::LABEL,
                operation = %err.operation,
                "store failure: {}",
                err.message
            );
            let mut data = Map::new();
            data.insert("error".to_string(), Value::String(err.to_string()));
            ApiResponse::error(failure_message::<R>(op), Value::Object(data))
        }
        ApiError::DeleteRestricted(reason) => {
            ApiResponse::error(failure_message::<R>(op), Value::String(reason))
        }
    }
}
