//! Custom extractors

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::request::Validate;

/// JSON body that is deserialized and then validated.
///
/// Malformed JSON and failed field rules both reject with 400.
pub struct ValidatedJson<T: Validate>(pub T::Output);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        let value = payload.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Reject blank user ids with 400
pub fn require_user_id(user_id: &str) -> Result<(), ApiError> {
    if user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("userId must not be blank".to_string()));
    }
    Ok(())
}
