use crate::domain::a001_course_content::ui::page::CourseContentPage;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shared by every form on the page
    provide_context(ToastService::new());

    view! {
        <CourseContentPage />
        <ToastHost />
    }
}
