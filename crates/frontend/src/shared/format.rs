//! Утилиты форматирования для карточек и счётчиков

/// Размер файла в читаемом виде: "512 B", "200.0 KB", "1.5 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(204800), "200.0 KB");
        assert_eq!(format_file_size(1572864), "1.5 MB");
    }
}
