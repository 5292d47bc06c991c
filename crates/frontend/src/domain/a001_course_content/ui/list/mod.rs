use crate::shared::icons::icon;
use contracts::domain::a001_course_content::aggregate::{ContentKind, CourseContent};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ContentRow {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    pub link: Option<String>,
    pub created_at: String,
}

impl From<CourseContent> for ContentRow {
    fn from(c: CourseContent) -> Self {
        let link = match c.kind {
            ContentKind::Video => Some(c.video_url),
            ContentKind::Pdf => Some(c.pdf_url),
            ContentKind::Folder => None,
        }
        .filter(|l| !l.is_empty());

        Self {
            id: c.id.as_string(),
            kind: c.kind,
            title: c.title,
            link,
            created_at: format_timestamp(c.created_at),
        }
    }
}

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Список контента текущего уровня курса
#[component]
#[allow(non_snake_case)]
pub fn ContentList(#[prop(into)] items: Signal<Vec<CourseContent>>) -> impl IntoView {
    let rows = Memo::new(move |_| {
        items
            .get()
            .into_iter()
            .map(ContentRow::from)
            .collect::<Vec<_>>()
    });

    view! {
        <div class="content-list">
            <Show
                when=move || !rows.with(|r| r.is_empty())
                fallback=|| view! { <div class="content-list__empty">"No content yet"</div> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>"Title"</th>
                            <th>"Link"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id.clone()
                            children=move |row: ContentRow| {
                                view! {
                                    <tr>
                                        <td class="content-list__icon" title=row.kind.label()>
                                            {icon(row.kind.as_str())}
                                        </td>
                                        <td>{row.title}</td>
                                        <td>
                                            {match row.link {
                                                Some(link) => view! {
                                                    <a href=link.clone() target="_blank" rel="noopener">{link.clone()}</a>
                                                }.into_any(),
                                                None => view! { <span>"-"</span> }.into_any(),
                                            }}
                                        </td>
                                        <td>{row.created_at}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
