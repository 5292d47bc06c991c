pub mod a001_course_content;
pub mod common;
