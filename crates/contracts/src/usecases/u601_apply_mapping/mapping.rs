use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::request::MappingAssignment;

/// Строка каталога без назначенного файла изображения
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UnmappedProduct {
    /// Номер строки в исходной выгрузке
    pub row: u32,
}

/// Имя файла, введённое оператором в одной строке сопоставления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMapping {
    filename: String,
}

impl UserMapping {
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

/// Ошибка сбора строк сопоставления
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectError {
    #[error("no mappings provided")]
    NoMappings,
    /// `row` считается с 1, как его видит оператор
    #[error("mapping row {row}: missing filename")]
    MissingFilename { row: usize },
}

impl CollectError {
    /// Позиция строки (с 1), на которую нужно указать оператору
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::NoMappings => None,
            Self::MissingFilename { row } => Some(*row),
        }
    }
}

/// Собирает введённые имена файлов.
///
/// Останавливается на первой пустой строке; строки после неё не проверяются.
/// Дубликаты не отбрасываются.
pub fn collect_mappings<S: AsRef<str>>(rows: &[S]) -> Result<Vec<UserMapping>, CollectError> {
    if rows.is_empty() {
        return Err(CollectError::NoMappings);
    }

    let mut mappings = Vec::with_capacity(rows.len());
    for (index, raw) in rows.iter().enumerate() {
        let filename = raw.as_ref().trim();
        if filename.is_empty() {
            return Err(CollectError::MissingFilename { row: index + 1 });
        }
        mappings.push(UserMapping {
            filename: filename.to_string(),
        });
    }

    Ok(mappings)
}

/// Разворачивает N имён файлов на M несопоставленных строк.
///
/// Внешний цикл по `mappings`, внутренний по `products`; порядок сохраняется,
/// чтобы ошибки backend по строкам можно было соотнести с намерением оператора.
pub fn expand_assignments(
    mappings: &[UserMapping],
    products: &[UnmappedProduct],
) -> Vec<MappingAssignment> {
    mappings
        .iter()
        .flat_map(|mapping| {
            products
                .iter()
                .map(move |product| MappingAssignment::update(product.row, mapping.filename()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u601_apply_mapping::request::ProductHandling;
    use std::collections::HashSet;

    fn products(rows: &[u32]) -> Vec<UnmappedProduct> {
        rows.iter().map(|&row| UnmappedProduct { row }).collect()
    }

    #[test]
    fn test_collect_trims_and_keeps_order() {
        let mappings = collect_mappings(&["  a.png ", "b.png"]).unwrap();
        let names: Vec<&str> = mappings.iter().map(|m| m.filename()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_collect_empty_input() {
        let rows: Vec<String> = Vec::new();
        assert_eq!(collect_mappings(rows.as_slice()), Err(CollectError::NoMappings));
    }

    #[test]
    fn test_collect_fails_on_first_blank_row() {
        let err = collect_mappings(&["a.png", "   ", "", "d.png"]).unwrap_err();
        assert_eq!(err, CollectError::MissingFilename { row: 2 });
        assert_eq!(err.row(), Some(2));
        assert_eq!(err.to_string(), "mapping row 2: missing filename");
    }

    #[test]
    fn test_collect_keeps_duplicates() {
        let mappings = collect_mappings(&["a.png", "a.png"]).unwrap();
        assert_eq!(mappings.len(), 2);
    }

    #[test]
    fn test_expand_two_by_three() {
        let mappings = collect_mappings(&["a.png", "b.png"]).unwrap();
        let batch = expand_assignments(&mappings, &products(&[10, 11, 12]));

        let pairs: Vec<(u32, &str)> = batch
            .iter()
            .map(|a| (a.row, a.data.image_filename.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (10, "a.png"),
                (11, "a.png"),
                (12, "a.png"),
                (10, "b.png"),
                (11, "b.png"),
                (12, "b.png"),
            ]
        );
        assert!(batch
            .iter()
            .all(|a| a.data.product_handling == ProductHandling::Update));
    }

    #[test]
    fn test_expand_covers_full_cross_product() {
        let mappings = collect_mappings(&["x.jpg", "y.jpg", "z.jpg", "w.jpg"]).unwrap();
        let rows = products(&[3, 5, 8, 13, 21]);
        let batch = expand_assignments(&mappings, &rows);

        assert_eq!(batch.len(), mappings.len() * rows.len());
        let unique: HashSet<(u32, String)> = batch
            .iter()
            .map(|a| (a.row, a.data.image_filename.clone()))
            .collect();
        assert_eq!(unique.len(), batch.len());
        for mapping in &mappings {
            for product in &rows {
                assert!(unique.contains(&(product.row, mapping.filename().to_string())));
            }
        }
    }

    #[test]
    fn test_expand_without_products_is_empty() {
        let mappings = collect_mappings(&["a.png"]).unwrap();
        assert!(expand_assignments(&mappings, &[]).is_empty());
    }
}
