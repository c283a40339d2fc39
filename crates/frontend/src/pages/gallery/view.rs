use contracts::shared::gallery::{GalleryImage, GalleryPageData};
use leptos::prelude::*;

use super::controller::{navigate_to, GalleryController, GalleryEvent};
use crate::layout::global_context::use_console;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Input;
use crate::shared::debounce::TimeoutScheduler;
use crate::shared::page_data;
use crate::shared::view_state::{self, SortKey};
use crate::usecases::u603_regenerate_gallery_image::view::RegenerateImageButton;

/// Id элемента страницы с данными галереи
pub const GALLERY_PAGE_ELEMENT_ID: &str = "gallery-page";

fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[component]
pub fn GalleryView() -> impl IntoView {
    let console = use_console();
    let config = console.config();
    let data: GalleryPageData = page_data::read_json(GALLERY_PAGE_ELEMENT_ID);
    let initial = view_state::decode(&current_query());
    log::debug!("Gallery opened with {:?}", initial);

    let current_page = initial.page.unwrap_or(1);
    let (search, set_search) = signal(initial.search.clone());
    let selected_sort = initial.sort;
    let selected_gallery = initial.gallery.clone();

    // Таймеры и RefCell не Send
    let controller = StoredValue::new_local(GalleryController::new(
        config.routes.gallery.clone(),
        initial,
        TimeoutScheduler,
        config.gallery.search_debounce_ms,
        navigate_to,
    ));
    let send = move |event: GalleryEvent| controller.with_value(|c| c.dispatch(event));

    let page_href = Callback::new(move |page: u32| controller.with_value(|c| c.page_href(page)));

    let on_sort_change = move |ev: web_sys::Event| {
        let token = event_target_value(&ev);
        match SortKey::from_token(&token) {
            Some(key) => send(GalleryEvent::SortSelected(key)),
            None => log::warn!("Unknown sort option: {}", token),
        }
    };
    let on_gallery_change =
        move |ev: web_sys::Event| send(GalleryEvent::GallerySelected(event_target_value(&ev)));

    let images = data.images;
    let galleries = data.galleries;

    view! {
        <div id="gallery--page" class="gallery">
            <div class="gallery__controls">
                <Input
                    label="Search"
                    placeholder="Title or filename"
                    value=search
                    on_input=Callback::new(move |text: String| {
                        set_search.set(text.clone());
                        send(GalleryEvent::SearchTyped(text));
                    })
                />

                <div class="form__group">
                    <label class="form__label">"Sort"</label>
                    <select class="form__select" on:change=on_sort_change>
                        {SortKey::ALL
                            .into_iter()
                            .map(|key| view! {
                                <option value=key.token() selected={key == selected_sort}>
                                    {key.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label">"Gallery"</label>
                    <select class="form__select" on:change=on_gallery_change>
                        <option value="" selected={selected_gallery.is_empty()}>"All galleries"</option>
                        {galleries
                            .into_iter()
                            .map(|g| {
                                let selected = g.token == selected_gallery;
                                view! { <option value=g.token selected=selected>{g.label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            {if images.is_empty() {
                view! { <p class="gallery__empty">"No images match the current filters."</p> }.into_any()
            } else {
                view! {
                    <div class="gallery__grid">
                        {images.into_iter().map(|image| view! { <ImageCard image=image /> }).collect_view()}
                    </div>
                }.into_any()
            }}

            <PaginationControls
                current_page=current_page
                total_pages=data.total_pages
                total_count=data.total_count
                page_href=page_href
            />
        </div>
    }
}

#[component]
fn ImageCard(image: GalleryImage) -> impl IntoView {
    let title = image.title.clone().unwrap_or_else(|| image.filename.clone());

    view! {
        <div class="gallery-card">
            {image.thumbnail_url.clone().map(|src| view! {
                <img class="gallery-card__thumb" src=src alt=title.clone() loading="lazy" />
            })}
            <div class="gallery-card__body">
                <div class="gallery-card__title">{title.clone()}</div>
                <div class="gallery-card__meta">
                    {image.filename.clone()}
                    {image.gallery.clone().map(|g| format!(" · {}", g))}
                </div>
                <RegenerateImageButton filename=image.filename />
            </div>
        </div>
    }
}
