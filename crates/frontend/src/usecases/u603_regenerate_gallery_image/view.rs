use contracts::shared::filename::validate_image_filename;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_console;
use crate::shared::components::ui::Button;
use crate::shared::flash::FlashLevel;
use crate::shared::format::format_file_size;
use crate::shared::icons::icon;

/// Кнопка пересоздания изображения на карточке галереи
#[component]
pub fn RegenerateImageButton(#[prop(into)] filename: String) -> impl IntoView {
    let console = use_console();
    let filename = StoredValue::new(filename);
    let (in_flight, set_in_flight) = signal(false);
    let (status, set_status) = signal(None::<Result<u64, String>>);

    let regenerate = move |_| {
        if in_flight.get_untracked() {
            return;
        }
        let name = filename.get_value();
        if let Err(e) = validate_image_filename(&name) {
            set_status.set(Some(Err(e.to_string())));
            return;
        }

        set_in_flight.set(true);
        set_status.set(None);
        spawn_local(async move {
            let result = match super::api::regenerate_image(&name).await {
                Ok(response) => response.into_result(),
                Err(e) => {
                    log::error!("Regenerate {} failed: {}", name, e);
                    Err("Could not reach the server".to_string())
                }
            };
            match &result {
                Ok(size) => console.flash(
                    FlashLevel::Success,
                    format!("{} regenerated ({})", name, format_file_size(*size)),
                ),
                Err(message) => console.flash(FlashLevel::Error, format!("{}: {}", name, message)),
            }
            set_status.set(Some(result));
            set_in_flight.set(false);
        });
    };

    view! {
        <div class="regenerate-image">
            <Button variant="secondary" busy=in_flight on_click=Callback::new(regenerate)>
                {icon("refresh")}
                " Regenerate"
            </Button>
            {move || status.get().map(|s| match s {
                Ok(size) => view! {
                    <span class="regenerate-image__ok">{format_file_size(size)}</span>
                }.into_any(),
                Err(message) => view! {
                    <span class="regenerate-image__error">{message}</span>
                }.into_any(),
            })}
        </div>
    }
}
