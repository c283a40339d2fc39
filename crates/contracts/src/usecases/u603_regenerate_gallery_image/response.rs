use serde::{Deserialize, Serialize};

/// Ответ `POST /api/regenerate-gallery-image/{filename}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegenerateImageResponse {
    pub success: bool,
    /// Размер нового файла в байтах
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RegenerateImageResponse {
    pub fn into_result(self) -> Result<u64, String> {
        if self.success {
            Ok(self.file_size.unwrap_or(0))
        } else {
            Err(self.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        let ok: RegenerateImageResponse =
            serde_json::from_str(r#"{"success": true, "file_size": 204800}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(204800));

        let failed: RegenerateImageResponse =
            serde_json::from_str(r#"{"success": false, "error": "Source image not found"}"#).unwrap();
        assert_eq!(failed.into_result(), Err("Source image not found".to_string()));
    }
}
