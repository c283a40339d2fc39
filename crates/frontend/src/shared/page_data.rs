//! Data the server embeds into the page at initial render.
//!
//! Pages put JSON into `<script type="application/json" id="...">` elements;
//! the console reads them once on mount.

use serde::de::DeserializeOwned;

/// Text content of the element with the given id, if present
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.text_content())
}

/// Parse embedded JSON. An empty payload yields `T::default()`.
pub fn parse_json<T: DeserializeOwned + Default>(text: &str) -> Result<T, String> {
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(text).map_err(|e| format!("Failed to parse page data: {}", e))
}

/// Read and parse the JSON element `id`; missing or broken data is logged and defaulted.
pub fn read_json<T: DeserializeOwned + Default>(id: &str) -> T {
    let Some(text) = element_text(id) else {
        log::warn!("Page data element #{} not found", id);
        return T::default();
    };

    parse_json(&text).unwrap_or_else(|e| {
        log::error!("#{}: {}", id, e);
        T::default()
    })
}

/// Parse a payload the page must provide. A missing, empty or broken element
/// is an error, never an empty default.
pub fn parse_required<T: DeserializeOwned>(id: &str, text: Option<&str>) -> Result<T, String> {
    let text = text.ok_or_else(|| format!("Page data element #{} not found", id))?;
    if text.trim().is_empty() {
        return Err(format!("Page data element #{} is empty", id));
    }
    serde_json::from_str(text).map_err(|e| format!("Failed to parse #{}: {}", id, e))
}

/// Read the required JSON element `id`
pub fn read_required<T: DeserializeOwned>(id: &str) -> Result<T, String> {
    parse_required(id, element_text(id).as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_apply_mapping::UnmappedProduct;

    #[test]
    fn test_parse_products() {
        let products: Vec<UnmappedProduct> =
            parse_json(r#"[{"row": 10}, {"row": 11, "sku": "ignored"}]"#).unwrap();
        assert_eq!(products, vec![UnmappedProduct { row: 10 }, UnmappedProduct { row: 11 }]);
    }

    #[test]
    fn test_parse_empty_and_broken() {
        let empty: Vec<UnmappedProduct> = parse_json("  ").unwrap();
        assert!(empty.is_empty());
        assert!(parse_json::<Vec<UnmappedProduct>>("[{").is_err());
    }

    #[test]
    fn test_required_payload_is_never_defaulted() {
        let id = "unmapped-products";
        let broken = parse_required::<Vec<UnmappedProduct>>(id, Some(r#"[{"row": 10"#));
        assert!(broken.unwrap_err().contains("#unmapped-products"));
        assert!(parse_required::<Vec<UnmappedProduct>>(id, Some("  ")).is_err());
        assert!(parse_required::<Vec<UnmappedProduct>>(id, None).is_err());
    }

    #[test]
    fn test_required_empty_list_is_real_data() {
        let products: Vec<UnmappedProduct> =
            parse_required("unmapped-products", Some("[]")).unwrap();
        assert!(products.is_empty());
    }
}
