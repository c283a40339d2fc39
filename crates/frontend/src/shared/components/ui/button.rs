use leptos::prelude::*;
use thaw::Spinner;

/// Button with variants (primary, secondary, danger) and a busy state
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Request in flight: shows a spinner and blocks clicks
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <button
            type="button"
            class=move || format!("button {}", variant_class())
            disabled=move || disabled.get().unwrap_or(false) || is_busy()
            aria-busy=move || is_busy().to_string()
            on:click=move |ev| {
                if is_busy() {
                    return;
                }
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            <Show when=is_busy>
                <Spinner />
            </Show>
            {children()}
        </button>
    }
}
