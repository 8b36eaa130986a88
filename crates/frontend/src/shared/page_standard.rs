//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_gas_meter_reading--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity part searchable: the id copied from the
//! DOM inspector leads straight to `domain/a001_gas_meter_reading/`.

/// List of records: table with chart, sorting and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only card of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_gas_meter_reading--list"));
        assert!(!is_valid_page_id("a001_gas_meter_reading"));
        assert!(!is_valid_page_id("--list"));
    }
}
