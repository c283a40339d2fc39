use contracts::usecases::u602_excel_cleanup::{ExcelCleanupResponse, UPLOAD_FIELD};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_url;

const PROCESS_PATH: &str = "/api/excel-cleanup/process";
const DOWNLOAD_PATH: &str = "/api/excel-cleanup/download";

/// Загрузить выгрузку на очистку (multipart, поле `file`)
pub async fn process_spreadsheet(file: web_sys::File) -> Result<ExcelCleanupResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(|e| format!("{e:?}"))?;

    let response = Request::post(&api_url(PROCESS_PATH))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    response
        .json::<ExcelCleanupResponse>()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", response.status(), e))
}

/// Ссылка на очищенный файл; скачивание выполняет браузер
pub fn download_url() -> String {
    api_url(DOWNLOAD_PATH)
}
