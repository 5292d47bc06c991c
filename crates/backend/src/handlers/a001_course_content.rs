use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_course_content::aggregate::{Course, CourseContent};
use contracts::domain::a001_course_content::requests::{
    ChangeDriveLinkRequest, ContentListQuery, CreateContentRequest, CreateContentResponse,
};
use contracts::shared::api::ApiMessage;

use crate::domain::a001_course_content;
use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// POST /api/admin/content
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<CreateContentResponse>), ApiError> {
    let created = a001_course_content::service::create(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/admin/content/gdlink
pub async fn change_drive_link(
    State(state): State<AppState>,
    Json(dto): Json<ChangeDriveLinkRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    let message = a001_course_content::service::change_drive_link(&state.store, dto).await?;
    Ok(Json(message))
}

/// GET /api/admin/content?courseId=..&parentContentId=..
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ContentListQuery>,
) -> Result<Json<Vec<CourseContent>>, ApiError> {
    let items = a001_course_content::service::list(&state.store, query).await?;
    Ok(Json(items))
}

/// GET /api/admin/course/:id
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    let course = a001_course_content::service::get_course(&state.store, &id).await?;
    Ok(Json(course))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{Config, CourseSeed, ServerConfig, UploadsConfig};
    use contracts::domain::a001_course_content::aggregate::ContentKind;

    fn state() -> AppState {
        AppState::from_config(&Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 0,
            },
            uploads: UploadsConfig {
                dir: "target/test-uploads".into(),
                public_path: "/uploads".into(),
                max_size_mb: 1,
            },
            courses: vec![CourseSeed {
                id: "7".into(),
                title: "Rust".into(),
                drive_link: Some("https://drive.example/old".into()),
            }],
        })
    }

    #[tokio::test]
    async fn create_answers_201() {
        let (status, Json(body)) = create(
            State(state()),
            Json(CreateContentRequest {
                kind: ContentKind::Folder,
                title: "Week 1".into(),
                course_id: "7".into(),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "Content added");
    }

    #[tokio::test]
    async fn create_without_title_answers_400() {
        let err = create(
            State(state()),
            Json(CreateContentRequest {
                kind: ContentKind::Folder,
                course_id: "7".into(),
                ..Default::default()
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Title required");
    }

    #[tokio::test]
    async fn drive_link_change_is_visible_on_course() {
        let state = state();
        let Json(msg) = change_drive_link(
            State(state.clone()),
            Json(ChangeDriveLinkRequest {
                course_id: "7".into(),
                gdlink: "https://drive.example/new".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(msg.message.as_deref(), Some("Drive link updated"));

        let Json(course) = get_course(State(state), Path("7".into())).await.unwrap();
        assert_eq!(course.drive_link.as_deref(), Some("https://drive.example/new"));
    }

    #[tokio::test]
    async fn list_for_unknown_course_answers_404() {
        let err = list(
            State(state()),
            Query(ContentListQuery {
                course_id: "9".into(),
                parent_content_id: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
