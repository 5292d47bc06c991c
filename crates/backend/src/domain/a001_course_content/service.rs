use chrono::Utc;
use contracts::domain::a001_course_content::aggregate::{
    ContentId, ContentKind, Course, CourseContent,
};
use contracts::domain::a001_course_content::requests::{
    ChangeDriveLinkRequest, ContentListQuery, CreateContentRequest, CreateContentResponse,
};
use contracts::domain::common::AggregateId;
use contracts::shared::api::ApiMessage;

use super::repository;
use crate::shared::data::ContentStore;
use crate::shared::error::ApiError;

/// Создание нового элемента контента
pub async fn create(
    store: &ContentStore,
    dto: CreateContentRequest,
) -> Result<CreateContentResponse, ApiError> {
    let course_id = required_course_id(&dto.course_id)?;
    let course = find_course(store, course_id).await?;

    let title = dto.title.trim();
    if title.is_empty() {
        return Err(ApiError::bad_request("Title required"));
    }

    let video_url = dto.video_url.trim();
    let pdf_url = dto.pdf_url.trim();
    match dto.kind {
        ContentKind::Video if video_url.is_empty() => {
            return Err(ApiError::bad_request("Video URL required"));
        }
        ContentKind::Pdf if pdf_url.is_empty() => {
            return Err(ApiError::bad_request("PDF URL required"));
        }
        _ => {}
    }

    let parent_content_id = parse_parent(dto.parent_content_id.as_deref())?;
    if let Some(parent_id) = parent_content_id {
        let parent = repository::get_content(store, parent_id)
            .await
            .filter(|p| p.course_id == course.id)
            .ok_or_else(|| ApiError::not_found("Parent content not found"))?;
        if !parent.kind.is_container() {
            return Err(ApiError::bad_request("Parent content must be a folder"));
        }
    }

    // The form keeps URLs of other kinds after a type switch; store only the relevant one
    let content = CourseContent {
        id: ContentId::new_v4(),
        course_id: course.id.clone(),
        parent_content_id,
        kind: dto.kind,
        title: title.to_string(),
        thumbnail: dto.thumbnail.trim().to_string(),
        video_url: if dto.kind == ContentKind::Video {
            video_url.to_string()
        } else {
            String::new()
        },
        pdf_url: if dto.kind == ContentKind::Pdf {
            pdf_url.to_string()
        } else {
            String::new()
        },
        created_at: Utc::now(),
    };

    let id = repository::insert(store, content).await;
    let path = dto.route.content_path(&course.id, &id);

    tracing::info!(
        course_id = %course.id,
        course_title = dto.course_title.as_deref().unwrap_or(&course.title),
        kind = %dto.kind,
        %path,
        "Content added"
    );

    Ok(CreateContentResponse {
        message: "Content added".to_string(),
        id: id.as_string(),
        path,
    })
}

/// Замена ссылки на Google Drive у курса
pub async fn change_drive_link(
    store: &ContentStore,
    dto: ChangeDriveLinkRequest,
) -> Result<ApiMessage, ApiError> {
    let course_id = required_course_id(&dto.course_id)?;

    let link = dto.gdlink.trim();
    if link.is_empty() {
        return Err(ApiError::bad_request("Drive link required"));
    }

    if !repository::set_drive_link(store, course_id, link.to_string()).await {
        return Err(ApiError::not_found("Course not found"));
    }

    tracing::info!(course_id, "Drive link updated");
    Ok(ApiMessage::new("Drive link updated"))
}

/// Список дочерних элементов курса или папки
pub async fn list(
    store: &ContentStore,
    query: ContentListQuery,
) -> Result<Vec<CourseContent>, ApiError> {
    let course_id = required_course_id(&query.course_id)?;
    find_course(store, course_id).await?;
    let parent = parse_parent(query.parent_content_id.as_deref())?;
    Ok(repository::list_children(store, course_id, parent).await)
}

/// Получение курса по ID
pub async fn get_course(store: &ContentStore, id: &str) -> Result<Course, ApiError> {
    find_course(store, id.trim()).await
}

fn required_course_id(raw: &str) -> Result<&str, ApiError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request("Course id required"));
    }
    Ok(id)
}

async fn find_course(store: &ContentStore, id: &str) -> Result<Course, ApiError> {
    repository::get_course(store, id)
        .await
        .ok_or_else(|| ApiError::not_found("Course not found"))
}

/// Blank parent ids mean "course root"
fn parse_parent(raw: Option<&str>) -> Result<Option<ContentId>, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => ContentId::from_string(s)
            .map(Some)
            .map_err(|_| ApiError::bad_request("Invalid parent content id")),
        None => Ok(None),
    }
}
