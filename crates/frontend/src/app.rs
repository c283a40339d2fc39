use crate::config::load_config;
use crate::layout::global_context::ConsoleContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::init_api_base;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    init_api_base(&config.api.base);

    // Provide the ConsoleContext (config + flash messages) to the whole app.
    provide_context(ConsoleContext::new(config));

    view! {
        <AppRoutes />
    }
}
