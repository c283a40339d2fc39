use leptos::prelude::*;

/// Text input with label and an invalid marker used to point at offending fields
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Marks the field as failing validation
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let is_invalid = move || invalid.get().unwrap_or(false);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <input
                class=move || if is_invalid() { "form__input form__input--invalid" } else { "form__input" }
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                aria-invalid=move || is_invalid().to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
