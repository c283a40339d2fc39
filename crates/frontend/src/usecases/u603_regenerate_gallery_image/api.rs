use contracts::usecases::u603_regenerate_gallery_image::RegenerateImageResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, path_segment};

/// Путь запроса; имя файла кодируется как один сегмент
pub fn regenerate_path(filename: &str) -> String {
    format!("/api/regenerate-gallery-image/{}", path_segment(filename))
}

/// Пересоздать web-версию изображения галереи
pub async fn regenerate_image(filename: &str) -> Result<RegenerateImageResponse, String> {
    let response = Request::post(&api_url(&regenerate_path(filename)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    response
        .json::<RegenerateImageResponse>()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", response.status(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regenerate_path_encodes_filename() {
        assert_eq!(
            regenerate_path("Misty Lake (v2).jpg"),
            "/api/regenerate-gallery-image/Misty%20Lake%20%28v2%29.jpg"
        );
    }
}
