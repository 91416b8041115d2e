// handlers/collection/update.rs - PUT /<collection>/:id handler

use axum::extract::{Path, State};

use crate::api::{DocumentId, JsonBody};
use crate::database::models::{Document, Patchable};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// PUT /<collection>/:id - partial update.
///
/// Only truthy fields from the body are written; see [`Patchable`].
pub async fn update<T: Patchable>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<T::Patch>,
) -> ApiResult<Document<T>> {
    let DocumentId(id) = DocumentId::parse(&id, T::NAME)?;
    let fields = T::patch_fields(patch)?;

    let updated = state
        .repository::<T>()
        .update(id, fields)
        .await
        .map_err(|e| {
            ApiError::from_store(
                e,
                &format!("Failed to update {}", T::NAME.to_lowercase()),
                T::DUPLICATE_MESSAGE,
            )
        })?;

    match updated {
        Some(document) => {
            tracing::info!("Updated {} {}", T::NAME.to_lowercase(), id);
            Ok(ApiResponse::success(document))
        }
        None => Err(ApiError::not_found(format!("{} not found", T::NAME))),
    }
}
