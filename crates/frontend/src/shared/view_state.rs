//! Состояние списка галереи (сортировка, фильтр, поиск, страница) и его
//! каноническое представление в query string.
//!
//! URL является источником истины при загрузке страницы, элементы управления
//! при взаимодействии.

use serde::Serialize;
use std::collections::HashMap;

/// Ключ сортировки; токены совпадают со значениями `<option>` в селекте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Az,
    Za,
    DateAsc,
    DateDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Az, SortKey::Za, SortKey::DateAsc, SortKey::DateDesc];

    pub fn token(self) -> &'static str {
        match self {
            SortKey::Az => "az",
            SortKey::Za => "za",
            SortKey::DateAsc => "date-asc",
            SortKey::DateDesc => "date-desc",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.token() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Az => "Name A–Z",
            SortKey::Za => "Name Z–A",
            SortKey::DateAsc => "Oldest first",
            SortKey::DateDesc => "Newest first",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub sort: SortKey,
    /// Пустая строка = все галереи
    pub gallery: String,
    pub search: String,
    /// Отсутствие `page` обрабатывает вызывающий код
    pub page: Option<u32>,
}

#[derive(Serialize)]
struct QueryOut<'a> {
    sort: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gallery: Option<&'a str>,
    page: u32,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Пары `key=value` по одной; первое значение ключа побеждает.
///
/// Битая пара или повтор ключа не роняет остальные параметры.
fn query_params(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        match serde_qs::from_str::<HashMap<String, String>>(pair) {
            Ok(parsed) => {
                for (key, value) in parsed {
                    if params.contains_key(&key) {
                        log::warn!("Repeated query parameter '{}', keeping the first value", key);
                    } else {
                        params.insert(key, value);
                    }
                }
            }
            Err(e) => log::warn!("Skipping unparseable query pair '{}': {}", pair, e),
        }
    }
    params
}

/// Разбирает query string (с `?` или без)
pub fn decode(query: &str) -> ViewState {
    let params = query_params(query);

    let sort = match params.get("sort") {
        Some(token) => SortKey::from_token(token).unwrap_or_else(|| {
            log::warn!("Unknown sort token '{}', using default", token);
            SortKey::default()
        }),
        None => SortKey::default(),
    };

    ViewState {
        sort,
        gallery: params.get("gallery").cloned().unwrap_or_default(),
        search: params.get("search").cloned().unwrap_or_default(),
        page: params.get("page").and_then(|p| p.parse().ok()),
    }
}

fn encode_with_page(state: &ViewState, path: &str, page: u32) -> String {
    let query = QueryOut {
        sort: state.sort.token(),
        search: non_empty(&state.search),
        gallery: non_empty(&state.gallery),
        page,
    };
    let query_string = serde_qs::to_string(&query).unwrap_or_default();
    format!("{}?{}", path, query_string)
}

/// URL после изменения сортировки, фильтра или поиска.
///
/// Страница всегда сбрасывается на 1; пустые `search`/`gallery` не пишутся.
pub fn encode(state: &ViewState, path: &str) -> String {
    encode_with_page(state, path, 1)
}

/// URL для перехода на другую страницу при тех же фильтрах
pub fn encode_page(state: &ViewState, path: &str, page: u32) -> String {
    encode_with_page(state, path, page.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(sort: SortKey, gallery: &str, search: &str, page: Option<u32>) -> ViewState {
        ViewState {
            sort,
            gallery: gallery.to_string(),
            search: search.to_string(),
            page,
        }
    }

    #[test]
    fn test_decode_defaults() {
        assert_eq!(decode(""), state(SortKey::Az, "", "", None));
        assert_eq!(decode("?page=3"), state(SortKey::Az, "", "", Some(3)));
    }

    #[test]
    fn test_decode_all_fields() {
        assert_eq!(
            decode("?sort=za&gallery=landscapes&search=fog&page=2"),
            state(SortKey::Za, "landscapes", "fog", Some(2))
        );
    }

    #[test]
    fn test_decode_unknown_sort_and_bad_page() {
        assert_eq!(decode("sort=random&page=abc"), state(SortKey::Az, "", "", None));
    }

    #[test]
    fn test_decode_repeated_key_keeps_other_params() {
        assert_eq!(
            decode("?sort=za&sort=az&search=x"),
            state(SortKey::Za, "", "x", None)
        );
        assert_eq!(
            decode("gallery=city&page=2&page=5&search=fog"),
            state(SortKey::Az, "city", "fog", Some(2))
        );
    }

    #[test]
    fn test_encode_omits_empty_fields() {
        assert_eq!(
            encode(&state(SortKey::Az, "", "", Some(4)), "/admin/gallery"),
            "/admin/gallery?sort=az&page=1"
        );
        assert_eq!(
            encode(&state(SortKey::Za, "wildlife", "owl", None), "/g"),
            "/g?sort=za&search=owl&gallery=wildlife&page=1"
        );
    }

    #[test]
    fn test_encode_resets_page() {
        let url = encode(&state(SortKey::DateDesc, "", "", Some(7)), "/admin/gallery");
        assert_eq!(url, "/admin/gallery?sort=date-desc&page=1");
        let query = url.split_once('?').unwrap().1;
        assert_eq!(decode(query).page, Some(1));
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            state(SortKey::Az, "", "", Some(1)),
            state(SortKey::Za, "black-white", "", Some(9)),
            state(SortKey::DateAsc, "", "sunset beach", None),
            state(SortKey::DateDesc, "city", "rain & neon", Some(2)),
        ];
        for original in cases {
            let url = encode(&original, "/admin/gallery");
            let query = url.split_once('?').unwrap().1;
            let decoded = decode(query);
            assert_eq!(
                decoded,
                ViewState {
                    page: Some(1),
                    ..original.clone()
                },
                "round trip failed for {}",
                url
            );
        }
    }

    #[test]
    fn test_encode_page_keeps_filters() {
        let current = state(SortKey::Za, "city", "", Some(1));
        assert_eq!(
            encode_page(&current, "/admin/gallery", 3),
            "/admin/gallery?sort=za&gallery=city&page=3"
        );
        assert_eq!(
            encode_page(&current, "/admin/gallery", 0),
            "/admin/gallery?sort=za&gallery=city&page=1"
        );
    }

    #[test]
    fn test_sort_tokens() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_token(key.token()), Some(key));
        }
        assert_eq!(SortKey::from_token("date-desc"), Some(SortKey::DateDesc));
    }
}
