//! Course content page - Model (API functions)

use crate::shared::api_utils::{api_url, api_url_with_query};
use contracts::domain::a001_course_content::aggregate::{Course, CourseContent};
use contracts::shared::api::ApiMessage;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Получить курс по ID
pub async fn fetch_course(id: &str) -> Result<Course, String> {
    let url = api_url(&format!("/api/admin/course/{}", urlencoding::encode(id)));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

/// Получить список контента курса или папки
pub async fn fetch_contents(
    course_id: &str,
    parent_content_id: Option<&str>,
) -> Result<Vec<CourseContent>, String> {
    let url = api_url_with_query(
        "/api/admin/content",
        &[
            ("courseId", Some(course_id)),
            ("parentContentId", parent_content_id),
        ],
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let message = response.json::<ApiMessage>().await.unwrap_or_default();
        return Err(message.text_or_fallback());
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}
