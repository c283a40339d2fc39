//! Управление сортировкой и фильтрами галереи.
//!
//! Ввод поиска проходит через debounce, выбор в селектах применяется сразу.

use std::cell::RefCell;

use crate::shared::debounce::{DebounceGate, Scheduler};
use crate::shared::view_state::{self, SortKey, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    SearchTyped(String),
    SortSelected(SortKey),
    GallerySelected(String),
}

pub struct GalleryController<S: Scheduler> {
    path: String,
    controls: RefCell<ViewState>,
    gate: DebounceGate<S, String>,
}

impl<S: Scheduler> GalleryController<S> {
    /// `initial` берётся из URL при загрузке; `navigate` получает новый URL
    pub fn new(
        path: impl Into<String>,
        initial: ViewState,
        scheduler: S,
        debounce_ms: u32,
        navigate: impl Fn(String) + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            controls: RefCell::new(initial),
            gate: DebounceGate::new(scheduler, debounce_ms, navigate),
        }
    }

    pub fn controls(&self) -> ViewState {
        self.controls.borrow().clone()
    }

    /// Ссылка на страницу `page` при текущих фильтрах из URL
    pub fn page_href(&self, page: u32) -> String {
        view_state::encode_page(&self.controls.borrow(), &self.path, page)
    }

    pub fn dispatch(&self, event: GalleryEvent) {
        let debounced = matches!(event, GalleryEvent::SearchTyped(_));
        {
            let mut controls = self.controls.borrow_mut();
            match event {
                GalleryEvent::SearchTyped(text) => controls.search = text.trim().to_string(),
                GalleryEvent::SortSelected(key) => controls.sort = key,
                GalleryEvent::GallerySelected(token) => controls.gallery = token,
            }
        }

        let url = view_state::encode(&self.controls.borrow(), &self.path);
        if debounced {
            self.gate.trigger(url);
        } else {
            log::info!("Gallery view changed, navigating to {}", url);
            self.gate.run_now(url);
        }
    }
}

/// Навигация браузера на новый URL (список рендерит сервер)
pub fn navigate_to(url: String) {
    let Some(window) = web_sys::window() else {
        log::error!("No window object, cannot navigate to {}", url);
        return;
    };
    if let Err(e) = window.location().set_href(&url) {
        log::error!("Navigation to {} failed: {:?}", url, e);
    }
}
