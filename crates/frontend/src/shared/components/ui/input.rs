use leptos::prelude::*;

/// Controlled text input with an optional trailing slot (e.g. an "Upload" button)
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Rendered to the right of the input
    #[prop(optional)]
    trailing: Option<AnyView>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group form__input-row">
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                aria-label=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {trailing}
        </div>
    }
}
