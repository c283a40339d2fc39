/// Метаданные UseCase для идентификации и заголовков страниц консоли
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u601")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "apply_mapping")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI
    fn display_name() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u601_apply_mapping"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl UseCaseMetadata for Probe {
        fn usecase_index() -> &'static str {
            "u999"
        }

        fn usecase_name() -> &'static str {
            "probe"
        }

        fn display_name() -> &'static str {
            "Probe"
        }
    }

    #[test]
    fn test_full_name_joins_index_and_name() {
        assert_eq!(Probe::full_name(), "u999_probe");
        assert_eq!(Probe::description(), "");
    }
}
