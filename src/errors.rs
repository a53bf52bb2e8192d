use axum::http::StatusCode;
use serde_json::Value;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<crate::api::ApiError> for AppError {
    fn from(err: crate::api::ApiError) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Picks the message shown for a rejected form from a validation body like
/// `{"email": ["Enter a valid email address."]}`. Fields listed in
/// `priority` win in order; after that any field with a message is used.
pub fn first_field_error(body: &Value, priority: &[&str]) -> Option<String> {
    let object = body.as_object()?;

    priority
        .iter()
        .filter_map(|field| object.get(*field))
        .chain(object.values())
        .find_map(first_message)
}

fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        _ => None,
    }
}
