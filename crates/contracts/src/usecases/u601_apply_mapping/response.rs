use serde::{Deserialize, Serialize};

/// Ответ backend на `apply-mapping`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApplyMappingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Итог отправки пакета назначений
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyMappingOutcome {
    /// Backend принял пакет; количество берётся из ответа как есть
    Mapped { mapped_count: u64 },
    /// Backend вернул `success: false`
    Rejected { message: String },
    /// Сеть недоступна или ответ не разобран
    TransportFailed { message: String },
}

impl ApplyMappingOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Mapped { .. })
    }
}

impl From<ApplyMappingResponse> for ApplyMappingOutcome {
    fn from(response: ApplyMappingResponse) -> Self {
        if response.success {
            Self::Mapped {
                mapped_count: response.mapped_count.unwrap_or(0),
            }
        } else {
            Self::Rejected {
                message: response
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_keeps_backend_count() {
        let response: ApplyMappingResponse =
            serde_json::from_str(r#"{"success": true, "mapped_count": 8}"#).unwrap();
        assert_eq!(
            ApplyMappingOutcome::from(response),
            ApplyMappingOutcome::Mapped { mapped_count: 8 }
        );
    }

    #[test]
    fn test_failure_message_is_verbatim() {
        let response: ApplyMappingResponse =
            serde_json::from_str(r#"{"success": false, "error": "duplicate"}"#).unwrap();
        assert_eq!(
            ApplyMappingOutcome::from(response),
            ApplyMappingOutcome::Rejected {
                message: "duplicate".to_string()
            }
        );
    }

    #[test]
    fn test_failure_without_message() {
        let response: ApplyMappingResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let outcome = ApplyMappingOutcome::from(response);
        assert!(!outcome.is_success());
        assert_eq!(
            outcome,
            ApplyMappingOutcome::Rejected {
                message: "Unknown error".to_string()
            }
        );
    }
}
