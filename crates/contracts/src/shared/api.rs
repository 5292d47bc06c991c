use serde::{Deserialize, Serialize};

/// Fallback text shown when the server answers without a `message`.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Body shape shared by every admin endpoint: `{ "message": "..." }`.
///
/// `message` is optional on decode because failing responses may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Message text, or the generic fallback when absent or blank
    pub fn text_or_fallback(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string()
    }
}

/// Ответ `POST /api/admin/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
