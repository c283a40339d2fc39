use contracts::usecases::u601_apply_mapping::{
    ApplyMappingOutcome, ApplyMappingRequest, ApplyMappingResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

const APPLY_MAPPING_PATH: &str = "/api/lumaprints/apply-mapping";

/// Отправить пакет назначений одним запросом
pub async fn apply_mapping(request: &ApplyMappingRequest) -> ApplyMappingOutcome {
    match post_mapping(request).await {
        Ok(response) => response.into(),
        Err(message) => ApplyMappingOutcome::TransportFailed { message },
    }
}

async fn post_mapping(request: &ApplyMappingRequest) -> Result<ApplyMappingResponse, String> {
    let response = Request::post(&api_url(APPLY_MAPPING_PATH))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    // Backend отвечает JSON и при ошибке, поэтому статус не проверяем отдельно
    response
        .json::<ApplyMappingResponse>()
        .await
        .map_err(|e| format!("Failed to parse response (HTTP {}): {}", response.status(), e))
}
