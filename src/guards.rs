//! Request guards
//!
//! Every handler runs these at the top of its body and propagates the
//! result with `?`. The order is: parse the body, resolve the caller with
//! [`token_required`], check [`required_fields`], then deserialize the typed
//! payload with [`payload`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::db::DbPool;
use crate::errors::ApiError;
use crate::models::User;
use crate::repo;

/// A parsed JSON object request body
pub type JsonBody = Map<String, Value>;

/// Parses a raw request body into a JSON object
///
/// An empty (or all-whitespace) body is treated as `{}`, so a bare GET
/// reports the missing `user_id` rather than a parse error.
pub fn parse_body(bytes: &[u8]) -> Result<JsonBody, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonBody::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::InvalidBody("expected a JSON object".to_string())),
        Err(e) => Err(ApiError::InvalidBody(e.to_string())),
    }
}

/// Fails with the first field in `fields` that is absent or `null`
pub fn required_fields(body: &JsonBody, fields: &[&str]) -> Result<(), ApiError> {
    for field in fields {
        if body.get(*field).is_none_or(Value::is_null) {
            debug!("Missing required field {}", field);
            return Err(ApiError::MissingField(field.to_string()));
        }
    }
    Ok(())
}

/// Resolves the `user_id` in the body to an existing user
///
/// This only proves that the id exists. It is not a credential check.
pub fn token_required(pool: &DbPool, body: &JsonBody) -> Result<User, ApiError> {
    required_fields(body, &["user_id"])?;

    let Some(user_id) = body.get("user_id").and_then(Value::as_str) else {
        return Err(ApiError::InvalidUserId);
    };

    repo::get_user(pool, user_id)
        .map_err(ApiError::Database)?
        .ok_or(ApiError::InvalidUserId)
}

/// Deserializes a validated body into a typed payload
pub fn payload<T: DeserializeOwned>(body: JsonBody) -> Result<T, ApiError> {
    serde_json::from_value(Value::Object(body)).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

#[cfg(test)]
mod tests;
