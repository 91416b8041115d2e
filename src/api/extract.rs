use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;

/// `Json<T>` whose rejections use the API's `{ "error": ... }` body instead of
/// axum's plain-text default.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::invalid_json(rejection.body_text())),
        }
    }
}

/// A path segment checked against the store's identifier format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentId(pub Uuid);

impl DocumentId {
    /// `Invalid <name> ID format` when `raw` is not a UUID.
    pub fn parse(raw: &str, name: &str) -> Result<Self, ApiError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ApiError::bad_request(format!("Invalid {} ID format", name.to_lowercase())))
    }
}
