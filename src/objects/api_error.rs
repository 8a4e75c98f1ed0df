use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the remote channel API and by clipboard access.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Maps a non-2xx response to an error kind.
    ///
    /// The backend reports rejections as `{"error": "<message>"}`.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty());

        match (status, message) {
            (404, Some(message)) => ApiError::NotFound(message),
            (404, None) => ApiError::NotFound(format!("{} {}", status, status_text)),
            (_, Some(message)) => ApiError::Validation(message),
            (_, None) => ApiError::Network(format!("{} {}", status, status_text)),
        }
    }

    /// Text for the view's error slot: server validation messages verbatim, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(val: wasm_bindgen::JsValue) -> Self {
        ApiError::Network(match val.as_string() {
            Some(description) => description,
            None => format!("{:?}", val),
        })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Network(format!("invalid response: {}", err))
    }
}

impl From<&str> for ApiError {
    fn from(str: &str) -> Self {
        ApiError::Network(String::from(str))
    }
}
