//! Filename checks performed before anything is sent to the backend.

use thiserror::Error;

/// Extension the spreadsheet cleanup endpoint accepts.
pub const SPREADSHEET_EXTENSION: &str = "xlsx";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilenameError {
    #[error("filename is empty")]
    Empty,
    #[error("filename must not contain a path: {0}")]
    ContainsPath(String),
    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(stem, ext)| (stem, ext.to_ascii_lowercase()))
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
        .map(|(_, ext)| ext)
}

/// Spreadsheet uploads must be `.xlsx` (case-insensitive).
pub fn validate_spreadsheet_name(name: &str) -> Result<(), FilenameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FilenameError::Empty);
    }
    match extension_of(name) {
        Some(ext) if ext == SPREADSHEET_EXTENSION => Ok(()),
        _ => Err(FilenameError::UnsupportedExtension(name.to_string())),
    }
}

/// A bare image filename without directories.
///
/// Which formats can be regenerated is decided by the backend.
pub fn validate_image_filename(name: &str) -> Result<(), FilenameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FilenameError::Empty);
    }
    if name.contains('/') || name.contains('\\') {
        return Err(FilenameError::ContainsPath(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_name() {
        assert_eq!(validate_spreadsheet_name("export.xlsx"), Ok(()));
        assert_eq!(validate_spreadsheet_name("EXPORT.XLSX"), Ok(()));
        assert_eq!(validate_spreadsheet_name("  "), Err(FilenameError::Empty));
        assert_eq!(
            validate_spreadsheet_name("export.xls"),
            Err(FilenameError::UnsupportedExtension("export.xls".to_string()))
        );
        assert!(validate_spreadsheet_name(".xlsx").is_err());
    }

    #[test]
    fn test_image_filename() {
        assert_eq!(validate_image_filename("sunset.JPG"), Ok(()));
        assert_eq!(validate_image_filename("print_01.webp"), Ok(()));
        assert_eq!(
            validate_image_filename("../etc/passwd.png"),
            Err(FilenameError::ContainsPath("../etc/passwd.png".to_string()))
        );
        assert_eq!(
            validate_image_filename("C:\\photos\\a.jpg"),
            Err(FilenameError::ContainsPath("C:\\photos\\a.jpg".to_string()))
        );
        assert_eq!(validate_image_filename("   "), Err(FilenameError::Empty));
    }

    #[test]
    fn test_image_extension_left_to_backend() {
        assert_eq!(validate_image_filename("harbour.heic"), Ok(()));
        assert_eq!(validate_image_filename("scan.avif"), Ok(()));
        assert_eq!(validate_image_filename("noextension"), Ok(()));
    }
}
