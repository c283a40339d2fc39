use serde::{Deserialize, Serialize};

/// Карточка изображения, переданная страницей галереи при первичном рендере
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub gallery: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Категория галереи для фильтра
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryOption {
    /// Значение параметра `gallery` в URL
    pub token: String,
    pub label: String,
}

/// Данные текущей страницы галереи
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GalleryPageData {
    #[serde(default)]
    pub galleries: Vec<GalleryOption>,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_count: u64,
}

fn default_total_pages() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_data_defaults() {
        let data: GalleryPageData =
            serde_json::from_str(r#"{"images": [{"filename": "a.jpg"}]}"#).unwrap();
        assert_eq!(data.total_pages, 1);
        assert!(data.galleries.is_empty());
        assert_eq!(data.images[0].filename, "a.jpg");
        assert_eq!(data.images[0].thumbnail_url, None);
    }
}
