// handlers/collection/create.rs - POST /<collection> handler

use axum::extract::State;

use crate::api::JsonBody;
use crate::database::models::{Document, Resource};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/**
 * POST /<collection> - validate the draft and store it
 *
 * Expected Output (Success, 201):
 * ```json
 * { "success": true, "data": { "_id": "...", ...fields, "createdAt": "..." } }
 * ```
 *
 * Missing or blank required fields answer 400 naming the field. A unique
 * field collision answers 400 with the collection's duplicate message.
 */
pub async fn create<T: Resource>(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<T::Draft>,
) -> ApiResult<Document<T>> {
    let record = T::from_draft(draft)?;

    let document = state
        .repository::<T>()
        .create(record)
        .await
        .map_err(|e| ApiError::from_store(e, T::CREATE_FAILURE, T::DUPLICATE_MESSAGE))?;

    tracing::info!("Created {} {}", T::NAME.to_lowercase(), document.id);

    let response = ApiResponse::created(document);
    Ok(match T::CREATED_MESSAGE {
        Some(message) => response.with_message(message),
        None => response,
    })
}
