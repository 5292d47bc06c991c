//! Course content admin page: add form, drive link form and the content list.

mod model;
pub mod params;
mod state;

use super::add::AddContent;
use super::list::ContentList;
use contracts::domain::a001_course_content::aggregate::{Course, CourseContent};
use leptos::prelude::*;
use params::CoursePage;
use state::LoadErrors;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn CourseContentPage() -> impl IntoView {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    match params::parse_page_params(&search) {
        Ok(page) => view! { <CourseContentScreen page=page /> }.into_any(),
        Err(e) => view! { <div class="error">{e}</div> }.into_any(),
    }
}

#[component]
fn CourseContentScreen(page: CoursePage) -> impl IntoView {
    let course = RwSignal::new(None::<Course>);
    let items = RwSignal::new(Vec::<CourseContent>::new());
    let errors = RwSignal::new(LoadErrors::default());

    let fetch_course = {
        let course_id = page.course_id.clone();
        Callback::new(move |_: ()| {
            let id = course_id.clone();
            spawn_local(async move {
                let result = model::fetch_course(&id).await;
                errors.update(|e| e.record_course(&result));
                if let Ok(c) = result {
                    course.set(Some(c));
                }
            });
        })
    };

    // Re-fetched after every successful add
    let fetch_items = {
        let course_id = page.course_id.clone();
        let parent = page.parent_content_id.clone();
        Callback::new(move |_: ()| {
            let id = course_id.clone();
            let parent = parent.clone();
            spawn_local(async move {
                let result = model::fetch_contents(&id, parent.as_deref()).await;
                errors.update(|e| e.record_contents(&result));
                if let Ok(v) = result {
                    items.set(v);
                }
            });
        })
    };

    fetch_course.run(());
    fetch_items.run(());

    let drive_link = Memo::new(move |_| {
        course.with(|c| c.as_ref().and_then(|c| c.drive_link.clone()))
    });

    let page_title = page.course_title.clone();
    let title = move || {
        page_title
            .clone()
            .or_else(|| course.with(|c| c.as_ref().map(|c| c.title.clone())))
            .unwrap_or_default()
    };

    let link_course_id = page.course_id.clone();

    view! {
        <div class="page course-content-page">
            <h1 class="page__title">{title}</h1>
            {move || {
                errors
                    .with(|e| e.messages())
                    .into_iter()
                    .map(|msg| view! { <div class="error">{msg}</div> })
                    .collect_view()
            }}

            <AddContent
                course_id=page.course_id
                parent_content_id=page.parent_content_id
                course_title=page.course_title
                route=page.route
                existing_link=None
                on_created=fetch_items
            />

            {move || drive_link.get().map(|link| view! {
                <div class="course-content-page__link">
                    <div class="course-content-page__current-link">
                        "Current link: "
                        <a href=link.clone() target="_blank" rel="noopener">{link.clone()}</a>
                    </div>
                    <AddContent
                        course_id=link_course_id.clone()
                        parent_content_id=None
                        course_title=None
                        existing_link=Some(link)
                        on_link_changed=fetch_course
                    />
                </div>
            })}

            <ContentList items=items />
        </div>
    }
}
