use leptos::prelude::*;

/// Radio button rendered as a selectable card; the selected one gets
/// `form__radio-wrapper--selected`.
#[component]
fn Radio(
    /// Label text
    label: String,
    /// Radio value
    value: String,
    /// Current selected value
    checked_value: Signal<String>,
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    name: String,
) -> impl IntoView {
    let radio_id = format!("{}-{}", name, value);
    let value_for_check = value.clone();
    let value_for_change = value.clone();

    let is_checked = move || checked_value.get() == value_for_check;
    let is_checked_class = is_checked.clone();
    let wrapper_class = move || {
        if is_checked_class() {
            "form__radio-wrapper form__radio-wrapper--selected"
        } else {
            "form__radio-wrapper"
        }
    };

    view! {
        <label class=wrapper_class for=radio_id.clone()>
            <input
                id=radio_id.clone()
                type="radio"
                class="form__radio"
                name=name
                value=value
                prop:checked=is_checked
                on:change=move |_| {
                    if let Some(handler) = on_change {
                        handler.run(value_for_change.clone());
                    }
                }
            />
            <span class="form__radio-label">{label}</span>
        </label>
    }
}

/// Radio group component
#[component]
pub fn RadioGroup(
    /// Current selected value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Options: (value, label) pairs, fixed for the lifetime of the group
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__radio-group" role="radiogroup">
            {options
                .into_iter()
                .map(|(val, lbl)| {
                    view! {
                        <Radio
                            label=lbl
                            value=val
                            checked_value=value
                            on_change=on_change
                            name=name.clone()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
