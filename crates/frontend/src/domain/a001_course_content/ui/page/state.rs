/// Load errors of the page, one slot per request.
///
/// A successful reload clears only its own slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadErrors {
    course: Option<String>,
    contents: Option<String>,
}

impl LoadErrors {
    pub fn record_course<T>(&mut self, result: &Result<T, String>) {
        self.course = result
            .as_ref()
            .err()
            .map(|e| format!("Failed to load course: {}", e));
    }

    pub fn record_contents<T>(&mut self, result: &Result<T, String>) {
        self.contents = result
            .as_ref()
            .err()
            .map(|e| format!("Failed to load content: {}", e));
    }

    pub fn messages(&self) -> Vec<String> {
        self.course.iter().chain(self.contents.iter()).cloned().collect()
    }
}
