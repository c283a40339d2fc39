pub mod response;

pub use response::{CleanupStats, ExcelCleanupResponse};

use crate::usecases::common::UseCaseMetadata;

/// Поле multipart-формы с файлом выгрузки
pub const UPLOAD_FIELD: &str = "file";

pub struct ExcelCleanup;

impl UseCaseMetadata for ExcelCleanup {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "excel_cleanup"
    }

    fn display_name() -> &'static str {
        "Spreadsheet cleanup"
    }

    fn description() -> &'static str {
        "Remove catalog rows whose images are missing from the local library"
    }
}
