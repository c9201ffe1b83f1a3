use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::deserializers::PageQuery;
use crate::api::errors::ApiError;

/// JSON body extractor whose rejections become the unprocessable envelope
///
/// Usage:
/// ```rust,ignore
/// async fn handler(JsonBody(body): JsonBody<QuizRequest>) -> Result<Json<Value>, ApiError> {
///     ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::unprocessable()
        })?;

        Ok(JsonBody(value))
    }
}

/// Path parameter extractor whose rejections become the unprocessable envelope
pub struct PathParam<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejected path parameter");
                ApiError::unprocessable()
            })?;

        Ok(PathParam(value))
    }
}

/// `?page=N` extractor that never rejects
///
/// A query string that cannot be decoded at all is treated as the first page.
#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Query::<PageQuery>::try_from_uri(&parts.uri)
            .map(|Query(query)| query)
            .unwrap_or_else(|rejection| {
                tracing::debug!(%rejection, "unreadable query string, using first page");
                PageQuery::default()
            }))
    }
}
