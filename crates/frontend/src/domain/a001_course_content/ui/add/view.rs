use super::state::{FormContext, UploadTarget};
use super::view_model::AddContentViewModel;
use crate::domain::a001_course_content::ui::upload::UploadPopup;
use crate::shared::components::ui::{Button, Input, RadioGroup};
use crate::shared::icons::icon;
use crate::shared::toast::ToastService;
use contracts::domain::a001_course_content::aggregate::{ContentKind, ContentRoute};
use leptos::prelude::*;

/// Форма добавления контента в курс.
///
/// With a non-blank `existing_link` the form only edits the course drive link.
/// `on_created` fires once per content item the server accepted; the caller
/// re-fetches whatever it lists.
#[component]
pub fn AddContent(
    #[prop(into)] course_id: String,
    parent_content_id: Option<String>,
    course_title: Option<String>,
    #[prop(optional)] route: ContentRoute,
    existing_link: Option<String>,
    #[prop(optional)] on_created: Option<Callback<()>>,
    #[prop(optional)] on_link_changed: Option<Callback<()>>,
) -> impl IntoView {
    let vm = AddContentViewModel::new(FormContext {
        course_id,
        parent_content_id,
        course_title,
        route,
        existing_link,
    });
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");

    let link_mode = vm.is_link_mode();
    let loading = vm.is_loading();
    let kind = vm.kind();
    let upload_open = Memo::new(move |_| vm.form.with(|f| f.is_upload_open()));

    let kind_options: Vec<(String, String)> = ContentKind::all()
        .iter()
        .map(|k| (k.as_str().to_string(), k.label().to_string()))
        .collect();

    let upload_button = move |target: UploadTarget| {
        view! {
            <Button
                variant="secondary"
                on_click=Callback::new(move |_| vm.open_upload(target))
            >
                {icon("upload")}
                "Upload"
            </Button>
        }
        .into_any()
    };

    let content_fields = move || {
        view! {
            <Input
                placeholder="Title"
                class="add-content__title"
                value=Signal::derive(move || vm.form.with(|f| f.draft.title.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.set_title(v)))
            />
            <Input
                placeholder="Image URL"
                value=Signal::derive(move || vm.form.with(|f| f.draft.thumbnail.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.set_thumbnail(v)))
                trailing=upload_button(UploadTarget::Thumbnail)
            />
            {move || match kind.get() {
                ContentKind::Video => view! {
                    <Input
                        placeholder="Video URL"
                        value=Signal::derive(move || vm.form.with(|f| f.draft.video_url.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.set_video_url(v)))
                        trailing=upload_button(UploadTarget::Video)
                    />
                }
                .into_any(),
                ContentKind::Pdf => view! {
                    <Input
                        placeholder="PDF URL"
                        value=Signal::derive(move || vm.form.with(|f| f.draft.pdf_url.clone()))
                        on_input=Callback::new(move |v: String| vm.form.update(|f| f.set_pdf_url(v)))
                    />
                }
                .into_any(),
                ContentKind::Folder => view! { <></> }.into_any(),
            }}
        }
        .into_any()
    };

    let link_fields = move || {
        view! {
            <Input
                placeholder="Google Drive Link"
                value=Signal::derive(move || vm.form.with(|f| f.link.gdlink.clone()))
                on_input=Callback::new(move |v: String| vm.form.update(|f| f.set_gdlink(v)))
            />
        }
        .into_any()
    };

    view! {
        <div class="add-content">
            <aside class="add-content__aside">
                <div class="add-content__heading">
                    {if link_mode { "Change Google drive Link" } else { "Select the Content Mode" }}
                </div>
                {(!link_mode).then(|| view! {
                    <RadioGroup
                        name="content-kind"
                        value=Signal::derive(move || kind.get().as_str().to_string())
                        options=kind_options
                        on_change=Callback::new(move |v: String| vm.select_kind(&v))
                    />
                })}
            </aside>

            <div class="add-content__fields">
                {if link_mode { link_fields() } else { content_fields() }}

                <Button
                    class="add-content__submit"
                    busy=Signal::derive(move || loading.get())
                    on_click=Callback::new(move |_| {
                        vm.submit_command(toasts, on_created, on_link_changed)
                    })
                >
                    {move || if loading.get() { "Submitting" } else { "Submit" }}
                </Button>
            </div>

            <Show when=move || upload_open.get()>
                <UploadPopup
                    on_success=Callback::new(move |url: String| {
                        vm.form.update(|f| f.upload_succeeded(url))
                    })
                    on_close=Callback::new(move |_| vm.form.update(|f| f.close_upload()))
                />
            </Show>
        </div>
    }
}
