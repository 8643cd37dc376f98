//! Product name extraction.

use crate::page::ProductPage;

/// Title locations in reliability order. Pages carry different markup
/// variants, so the first non-empty match wins and later selectors are
/// never consulted.
const NAME_SELECTORS: &[&str] = &["#productTitle", "#title", "span#productTitle"];

/// Extract the product name, or `None` if no known title markup is present.
pub fn extract_name(page: &ProductPage) -> Option<String> {
    NAME_SELECTORS
        .iter()
        .find_map(|selector| page.select_text(selector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_title_id() {
        let page = ProductPage::parse(
            r#"<span id="productTitle">  Wireless Mouse 2.4G  </span>"#,
        );
        assert_eq!(extract_name(&page), Some("Wireless Mouse 2.4G".to_string()));
    }

    #[test]
    fn test_selector_order_is_preserved() {
        // Both variants present: the more specific #productTitle wins.
        let page = ProductPage::parse(
            r#"
            <div id="title">Generic Title</div>
            <span id="productTitle">Specific Title</span>
            "#,
        );
        assert_eq!(extract_name(&page), Some("Specific Title".to_string()));
    }

    #[test]
    fn test_falls_back_to_title_id() {
        let page = ProductPage::parse(r#"<div id="title">Fallback Title</div>"#);
        assert_eq!(extract_name(&page), Some("Fallback Title".to_string()));
    }

    #[test]
    fn test_empty_title_is_not_found() {
        let page = ProductPage::parse(r#"<span id="productTitle">   </span>"#);
        assert_eq!(extract_name(&page), None);
    }

    #[test]
    fn test_missing_title() {
        let page = ProductPage::parse("<p>no product markup at all</p>");
        assert_eq!(extract_name(&page), None);
    }
}
