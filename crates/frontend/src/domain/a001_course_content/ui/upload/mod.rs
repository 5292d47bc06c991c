//! Upload popup used by the Add Content form.
//!
//! The form only learns the resulting URL (`on_success`) or that the popup was
//! dismissed (`on_close`); progress and errors stay inside the popup.

mod model;

use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[component]
pub fn UploadPopup(on_success: Callback<String>, on_close: Callback<()>) -> impl IntoView {
    let file = RwSignal::new_local(None::<web_sys::File>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        file.set(input.files().and_then(|list| list.get(0)));
        error.set(None);
    };

    let start_upload = move |_: leptos::ev::MouseEvent| {
        let Some(selected) = file.get_untracked() else {
            error.set(Some("Choose a file first".to_string()));
            return;
        };
        busy.set(true);
        error.set(None);
        log::info!("Uploading {} ({} bytes)", selected.name(), selected.size());

        wasm_bindgen_futures::spawn_local(async move {
            match model::upload_file(selected).await {
                Ok(url) => on_success.run(url),
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    error.set(Some(e));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Upload file" on_close=on_close>
            <div class="upload-popup">
                <input
                    type="file"
                    class="upload-popup__input"
                    on:change=on_file_change
                    disabled=move || busy.get()
                />
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                <div class="upload-popup__actions">
                    <Button
                        busy=Signal::derive(move || busy.get())
                        disabled=Signal::derive(move || file.with(|f| f.is_none()))
                        on_click=Callback::new(start_upload)
                    >
                        {move || if busy.get() { "Uploading" } else { "Upload" }}
                    </Button>
                    <Button variant="ghost" on_click=Callback::new(move |_| on_close.run(()))>
                        "Cancel"
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
