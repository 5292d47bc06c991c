use serde::{Deserialize, Serialize};

use super::aggregate::{ContentKind, ContentRoute};

/// Тело `POST /api/admin/content`
///
/// Field names follow the admin API: `type`, `thumbnail`, `courseId`, ...
/// The typed `route` travels as `rest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub title: String,
    pub course_id: String,
    #[serde(default)]
    pub parent_content_id: Option<String>,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub pdf_url: String,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(rename = "rest", default)]
    pub route: ContentRoute,
}

/// Ответ на успешное создание контента
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContentResponse {
    pub message: String,
    pub id: String,
    pub path: String,
}

/// Тело `POST /api/admin/content/gdlink`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDriveLinkRequest {
    pub course_id: String,
    #[serde(default)]
    pub gdlink: String,
}

/// Query of `GET /api/admin/content`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentListQuery {
    pub course_id: String,
    #[serde(default)]
    pub parent_content_id: Option<String>,
}
