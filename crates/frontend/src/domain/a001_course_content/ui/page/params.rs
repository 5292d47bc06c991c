use contracts::domain::a001_course_content::aggregate::ContentRoute;
use serde::Deserialize;

/// Raw query string of the admin page:
/// `?courseId=7&parentContentId=..&courseTitle=..&rest=a/b`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageQuery {
    #[serde(default)]
    course_id: Option<String>,
    #[serde(default)]
    parent_content_id: Option<String>,
    #[serde(default)]
    course_title: Option<String>,
    #[serde(default)]
    rest: Option<String>,
}

/// Where in the course tree the admin page is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoursePage {
    pub course_id: String,
    pub parent_content_id: Option<String>,
    pub course_title: Option<String>,
    pub route: ContentRoute,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_page_params(search: &str) -> Result<CoursePage, String> {
    let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?'))
        .map_err(|e| format!("Invalid page parameters: {}", e))?;

    let course_id =
        non_blank(query.course_id).ok_or_else(|| "courseId is missing in the page URL".to_string())?;

    Ok(CoursePage {
        course_id,
        parent_content_id: non_blank(query.parent_content_id),
        course_title: non_blank(query.course_title),
        route: query
            .rest
            .as_deref()
            .map(ContentRoute::parse)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_query() {
        let page = parse_page_params(
            "?courseId=7&parentContentId=p1&courseTitle=Rust%20101&rest=p0%2Fp1",
        )
        .unwrap();
        assert_eq!(page.course_id, "7");
        assert_eq!(page.parent_content_id.as_deref(), Some("p1"));
        assert_eq!(page.course_title.as_deref(), Some("Rust 101"));
        assert_eq!(page.route.segments, vec!["p0".to_string(), "p1".to_string()]);
    }

    #[test]
    fn course_root_has_no_parent_or_route() {
        let page = parse_page_params("courseId=7&parentContentId=").unwrap();
        assert_eq!(page.parent_content_id, None);
        assert!(page.route.is_empty());
    }

    #[test]
    fn missing_course_id_is_an_error() {
        assert!(parse_page_params("").is_err());
        assert!(parse_page_params("?courseId=%20").is_err());
    }
}
