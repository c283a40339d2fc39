use serde::{Deserialize, Serialize};

/// Ответ `POST /api/excel-cleanup/process`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExcelCleanupResponse {
    pub success: bool,
    #[serde(default)]
    pub total_rows_before: Option<u64>,
    #[serde(default)]
    pub deleted_count: Option<u64>,
    #[serde(default)]
    pub total_rows_after: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Итоговые счётчики очистки для отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    pub total_rows_before: u64,
    pub deleted_count: u64,
    pub total_rows_after: u64,
}

impl ExcelCleanupResponse {
    /// `Ok` со счётчиками или текст ошибки backend без изменений
    pub fn into_result(self) -> Result<CleanupStats, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| "Unknown error".to_string()));
        }
        Ok(CleanupStats {
            total_rows_before: self.total_rows_before.unwrap_or(0),
            deleted_count: self.deleted_count.unwrap_or(0),
            total_rows_after: self.total_rows_after.unwrap_or(0),
        })
    }
}
