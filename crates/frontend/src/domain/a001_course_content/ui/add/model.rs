//! Add Content - Model (API functions)

use super::state::{ApiReply, SubmitRequest};
use crate::shared::api_utils::api_url;
use contracts::shared::api::ApiMessage;
use gloo_net::http::Request;
use serde::Serialize;

const CREATE_CONTENT_PATH: &str = "/api/admin/content";
const CHANGE_LINK_PATH: &str = "/api/admin/content/gdlink";

/// Отправить форму на сервер
///
/// `Err` only for transport failures; HTTP errors come back as `ApiReply`.
pub async fn submit(request: &SubmitRequest) -> Result<ApiReply, String> {
    match request {
        SubmitRequest::ChangeDriveLink(body) => post_json(CHANGE_LINK_PATH, body).await,
        SubmitRequest::CreateContent(body) => post_json(CREATE_CONTENT_PATH, body).await,
    }
}

async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<ApiReply, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    // A body that is missing or not JSON decodes to an empty message
    let body = match response.text().await {
        Ok(text) => serde_json::from_str::<ApiMessage>(&text).unwrap_or_default(),
        Err(e) => {
            log::warn!("Failed to read response body of {}: {}", path, e);
            ApiMessage::default()
        }
    };

    Ok(ApiReply { status, body })
}
