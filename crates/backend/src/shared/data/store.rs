use contracts::domain::a001_course_content::aggregate::{Course, CourseContent};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::config::{Config, CourseSeed};

/// In-memory хранилище курсов и их контента
#[derive(Debug, Default)]
pub struct ContentStore {
    pub(crate) courses: RwLock<HashMap<String, Course>>,
    /// Insertion order is creation order
    pub(crate) contents: RwLock<Vec<CourseContent>>,
}

impl ContentStore {
    pub fn with_courses(seeds: &[CourseSeed]) -> Self {
        let courses = seeds
            .iter()
            .map(|seed| {
                let course = Course {
                    id: seed.id.clone(),
                    title: seed.title.clone(),
                    drive_link: seed.drive_link.clone().filter(|l| !l.trim().is_empty()),
                };
                (course.id.clone(), course)
            })
            .collect();

        Self {
            courses: RwLock::new(courses),
            contents: RwLock::new(Vec::new()),
        }
    }
}

/// Where uploaded files go and how they are addressed
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub public_path: String,
    pub max_bytes: usize,
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub uploads: Arc<UploadSettings>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Arc::new(ContentStore::with_courses(&config.courses)),
            uploads: Arc::new(UploadSettings {
                dir: crate::shared::config::get_upload_dir(config),
                public_path: config.uploads.public_path.clone(),
                max_bytes: config.uploads.max_size_mb * 1024 * 1024,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_courses_and_drops_blank_links() {
        let store = ContentStore::with_courses(&[
            CourseSeed {
                id: "1".into(),
                title: "Rust".into(),
                drive_link: Some("https://drive.example/1".into()),
            },
            CourseSeed {
                id: "2".into(),
                title: "Go".into(),
                drive_link: Some("  ".into()),
            },
        ]);

        let courses = store.courses.read().await;
        assert_eq!(courses.len(), 2);
        assert_eq!(
            courses["1"].drive_link.as_deref(),
            Some("https://drive.example/1")
        );
        assert_eq!(courses["2"].drive_link, None);
        assert!(store.contents.read().await.is_empty());
    }
}
