//! Request helpers shared by controllers.

use std::{num::IntErrorKind, str::FromStr};

use axum::{
    extract::{rejection::JsonRejection, FromRequestParts, Path},
    http::request::Parts,
    Json,
};

use crate::{
    model::favorite::FavoriteRequestDto,
    server::error::{not_found::NotFoundError, validation::ValidationError, Error},
};

/// Optional JSON body as extracted by Axum, `Ok(None)` when no body was sent
pub type FavoriteRequestBody = Result<Option<Json<FavoriteRequestDto>>, JsonRejection>;

/// Unwraps a JSON body, reporting a rejected body as a validation error
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    let Json(body) = payload?;

    Ok(body)
}

/// Extracts the owning user's ID from a favorite request
///
/// # Returns
/// - `Ok(i32)` - User ID present in the body
/// - `Err(ValidationError::MissingUserId)` - No body, or the body has no `user_id`
/// - `Err(ValidationError::InvalidBody)` - Body is not valid JSON for the request
pub fn favorite_user_id(payload: FavoriteRequestBody) -> Result<i32, Error> {
    let user_id = payload?.and_then(|Json(body)| body.user_id);

    user_id.ok_or_else(|| ValidationError::MissingUserId.into())
}

/// Record ID taken from the single path parameter of a route.
///
/// Any integer is accepted, including ones no record can have, so that such a request
/// is answered as a missing record. Integers too large for `i64` saturate. A segment that
/// is not an integer is rejected as an invalid path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl PathId {
    /// Narrows the ID to the stored ID range
    ///
    /// # Returns
    /// - `Ok(i32)` - ID a stored record can have
    /// - `Err(Error::NotFoundError)` - ID out of range, reported with `not_found`
    pub fn resolve(self, not_found: fn(i64) -> NotFoundError) -> Result<i32, Error> {
        i32::try_from(self.0).map_err(|_| Error::from(not_found(self.0)))
    }
}

impl FromStr for PathId {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<i64>() {
            Ok(id) => Ok(Self(id)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(Self(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(Self(i64::MIN)),
                _ => Err(ValidationError::InvalidPath(raw.to_string())),
            },
        }
    }
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = Error;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

            Ok(raw.parse::<PathId>()?)
        }
    }
}
