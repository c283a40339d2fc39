pub mod flash_area;
pub mod global_context;

use leptos::prelude::*;

use flash_area::FlashArea;

/// Каркас страницы консоли: заголовок, flash-сообщения, содержимое.
#[component]
pub fn Shell(
    /// Заголовок страницы
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="console-layout">
            <header class="console-layout__header">
                <h1>{title}</h1>
            </header>
            <FlashArea />
            <main class="console-layout__main">{children()}</main>
        </div>
    }
}
