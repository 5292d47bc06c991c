use contracts::domain::a001_course_content::aggregate::{ContentId, Course, CourseContent};

use crate::shared::data::ContentStore;

pub async fn get_course(store: &ContentStore, id: &str) -> Option<Course> {
    store.courses.read().await.get(id).cloned()
}

/// Returns `false` when the course does not exist
pub async fn set_drive_link(store: &ContentStore, course_id: &str, link: String) -> bool {
    let mut courses = store.courses.write().await;
    match courses.get_mut(course_id) {
        Some(course) => {
            course.drive_link = Some(link);
            true
        }
        None => false,
    }
}

pub async fn get_content(store: &ContentStore, id: ContentId) -> Option<CourseContent> {
    store
        .contents
        .read()
        .await
        .iter()
        .find(|c| c.id == id)
        .cloned()
}

pub async fn insert(store: &ContentStore, content: CourseContent) -> ContentId {
    let id = content.id;
    store.contents.write().await.push(content);
    id
}

/// Direct children of `parent` (course root when `None`), oldest first
pub async fn list_children(
    store: &ContentStore,
    course_id: &str,
    parent: Option<ContentId>,
) -> Vec<CourseContent> {
    store
        .contents
        .read()
        .await
        .iter()
        .filter(|c| c.course_id == course_id && c.parent_content_id == parent)
        .cloned()
        .collect()
}
