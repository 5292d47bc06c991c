use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор элемента контента курса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub Uuid);

impl ContentId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ContentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s.trim())
            .map(ContentId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Content kind
// ============================================================================

/// Вид контента: видео, папка или PDF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    #[default]
    Folder,
    Pdf,
}

impl ContentKind {
    /// All kinds in selector order
    pub fn all() -> [ContentKind; 3] {
        [ContentKind::Video, ContentKind::Folder, ContentKind::Pdf]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Folder => "folder",
            ContentKind::Pdf => "pdf",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Video => "Video",
            ContentKind::Folder => "Folder",
            ContentKind::Pdf => "PDF",
        }
    }

    /// Folders are the only kind that can hold children
    pub fn is_container(&self) -> bool {
        matches!(self, ContentKind::Folder)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(ContentKind::Video),
            "folder" => Ok(ContentKind::Folder),
            "pdf" => Ok(ContentKind::Pdf),
            other => Err(format!("Unknown content type: {}", other)),
        }
    }
}

// ============================================================================
// Route through the course tree
// ============================================================================

/// Путь от корня курса до родительского элемента.
///
/// `segments` are the ancestor content ids in order from the course root. The
/// form does not interpret them; the server uses them to build the public link
/// of the created content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRoute {
    #[serde(default)]
    pub segments: Vec<String>,
}

impl ContentRoute {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a slash separated path such as `"12/57"`; empty parts are dropped
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split('/')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Public path of a content item placed under this route
    pub fn content_path(&self, course_id: &str, content_id: &ContentId) -> String {
        let mut path = format!("/courses/{}", course_id);
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path.push('/');
        path.push_str(&content_id.as_string());
        path
    }
}

// ============================================================================
// Aggregates
// ============================================================================

/// Элемент контента курса (видео, папка или PDF)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContent {
    pub id: ContentId,
    pub course_id: String,
    pub parent_content_id: Option<ContentId>,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    pub thumbnail: String,
    pub video_url: String,
    pub pdf_url: String,
    pub created_at: DateTime<Utc>,
}

/// Курс с привязанной ссылкой на внешнее хранилище
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub drive_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&ContentKind::Pdf).unwrap(), "\"pdf\"");
        let kind: ContentKind = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(kind, ContentKind::Video);
        assert_eq!(ContentKind::default(), ContentKind::Folder);
    }

    #[test]
    fn kind_from_str_is_case_insensitive() {
        assert_eq!("PDF".parse::<ContentKind>(), Ok(ContentKind::Pdf));
        assert!("audio".parse::<ContentKind>().is_err());
    }

    #[test]
    fn route_parse_drops_empty_segments() {
        let route = ContentRoute::parse("/12//57/");
        assert_eq!(route.segments, vec!["12".to_string(), "57".to_string()]);
        assert!(ContentRoute::parse("").is_empty());
    }

    #[test]
    fn content_path_includes_route_segments() {
        let id = ContentId(Uuid::nil());
        let route = ContentRoute::new(vec!["a".into(), "b".into()]);
        assert_eq!(
            route.content_path("7", &id),
            format!("/courses/7/a/b/{}", Uuid::nil())
        );
        assert_eq!(
            ContentRoute::default().content_path("7", &id),
            format!("/courses/7/{}", Uuid::nil())
        );
    }

    #[test]
    fn content_id_round_trips_through_string() {
        let id = ContentId::new_v4();
        assert_eq!(ContentId::from_string(&id.as_string()), Ok(id));
        assert!(ContentId::from_string("not-a-uuid").is_err());
    }
}
