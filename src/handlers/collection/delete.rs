// handlers/collection/delete.rs - DELETE /<collection>/:id handler

use axum::extract::{Path, State};

use crate::api::DocumentId;
use crate::database::models::Patchable;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// DELETE /<collection>/:id - hard delete. A second delete of the same id is a 404.
pub async fn delete<T: Patchable>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let DocumentId(id) = DocumentId::parse(&id, T::NAME)?;

    let removed = state
        .repository::<T>()
        .delete(id)
        .await
        .map_err(|e| {
            let fallback = format!("Failed to delete {}", T::NAME.to_lowercase());
            ApiError::from_store(e, &fallback, &fallback)
        })?;

    match removed {
        Some(_) => {
            tracing::info!("Deleted {} {}", T::NAME.to_lowercase(), id);
            Ok(ApiResponse::message_only(format!("{} deleted successfully", T::NAME)))
        }
        None => Err(ApiError::not_found(format!("{} not found", T::NAME))),
    }
}
