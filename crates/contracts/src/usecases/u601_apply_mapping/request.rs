use serde::{Deserialize, Serialize};

/// Директива обработки товара на стороне backend.
///
/// Сейчас консоль отправляет только `Update`: каждая строка из набора
/// несопоставленных получает одинаковую директиву.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProductHandling {
    #[default]
    Update,
}

/// Данные одного назначения
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentData {
    pub product_handling: ProductHandling,
    pub image_filename: String,
}

/// Назначение файла изображения строке каталога
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingAssignment {
    /// Номер строки в исходной выгрузке
    pub row: u32,
    pub data: AssignmentData,
}

impl MappingAssignment {
    pub fn update(row: u32, image_filename: impl Into<String>) -> Self {
        Self {
            row,
            data: AssignmentData {
                product_handling: ProductHandling::Update,
                image_filename: image_filename.into(),
            },
        }
    }
}

/// Тело запроса `POST /api/lumaprints/apply-mapping`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApplyMappingRequest {
    pub mappings: Vec<MappingAssignment>,
}

impl ApplyMappingRequest {
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_wire_shape() {
        let request = ApplyMappingRequest {
            mappings: vec![MappingAssignment::update(10, "a.png")],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "mappings": [
                    { "row": 10, "data": { "product_handling": "Update", "image_filename": "a.png" } }
                ]
            })
        );
    }
}
