pub mod a001_course_content;
