// handlers/collection/list.rs - GET /<collection> handler

use axum::extract::State;

use crate::database::models::{Document, Resource};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /<collection> - every record, newest first
pub async fn list<T: Resource>(State(state): State<AppState>) -> ApiResult<Vec<Document<T>>> {
    let documents = state
        .repository::<T>()
        .find_all()
        .await
        .map_err(|e| ApiError::from_store(e, T::LIST_FAILURE, T::LIST_FAILURE))?;

    tracing::debug!("Listed {} {}", documents.len(), T::COLLECTION.name);
    Ok(ApiResponse::success(documents))
}
