use crate::shared::icons::icon;
use leptos::prelude::*;

/// Соседние страницы для текущей (страницы считаются с 1)
pub fn neighbour_pages(current: u32, total: u32) -> (Option<u32>, Option<u32>) {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let prev = (current > 1).then(|| current - 1);
    let next = (current < total).then(|| current + 1);
    (prev, next)
}

/// PaginationControls - ссылки на предыдущую/следующую страницу галереи.
///
/// Переход выполняется обычной навигацией: список страниц рендерит сервер.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Всего изображений
    #[prop(into)]
    total_count: Signal<u64>,

    /// URL для страницы
    page_href: Callback<u32, String>,
) -> impl IntoView {
    let pages = move || neighbour_pages(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            {move || match pages().0 {
                Some(prev) => view! {
                    <a class="pagination-btn" href=page_href.run(prev) title="Previous page">
                        {icon("chevron-left")}
                    </a>
                }.into_any(),
                None => view! {
                    <span class="pagination-btn pagination-btn--disabled">{icon("chevron-left")}</span>
                }.into_any(),
            }}
            <span class="pagination-info">
                {move || {
                    let total = total_pages.get().max(1);
                    let page = current_page.get().clamp(1, total);
                    format!("{} / {} ({})", page, total, total_count.get())
                }}
            </span>
            {move || match pages().1 {
                Some(next) => view! {
                    <a class="pagination-btn" href=page_href.run(next) title="Next page">
                        {icon("chevron-right")}
                    </a>
                }.into_any(),
                None => view! {
                    <span class="pagination-btn pagination-btn--disabled">{icon("chevron-right")}</span>
                }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbour_pages() {
        assert_eq!(neighbour_pages(1, 1), (None, None));
        assert_eq!(neighbour_pages(1, 3), (None, Some(2)));
        assert_eq!(neighbour_pages(2, 3), (Some(1), Some(3)));
        assert_eq!(neighbour_pages(3, 3), (Some(2), None));
        assert_eq!(neighbour_pages(9, 3), (Some(2), None));
        assert_eq!(neighbour_pages(0, 0), (None, None));
    }
}
