//! Parsed page wrapper the extractors query.

use scraper::{Html, Selector};

/// A product page parsed once per extraction call.
///
/// Parsing never fails: `scraper` recovers from malformed markup the way
/// browsers do, so a garbage page simply yields no selector matches.
pub struct ProductPage {
    document: Html,
}

impl ProductPage {
    /// Parse raw markup into a queryable page.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Trimmed text of the first element matching `selector`, if any
    /// matches and its text is non-empty.
    pub(crate) fn select_text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Full visible text of the page, used by the pattern-scan fallback.
    pub(crate) fn full_text(&self) -> String {
        self.document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_text_trims_and_skips_empty() {
        let page = ProductPage::parse(
            r#"<div id="a">   </div><div id="b">  hello  </div>"#,
        );
        assert_eq!(page.select_text("#a"), None);
        assert_eq!(page.select_text("#b"), Some("hello".to_string()));
    }

    #[test]
    fn test_select_text_no_match() {
        let page = ProductPage::parse("<p>nothing here</p>");
        assert_eq!(page.select_text("#missing"), None);
    }

    #[test]
    fn test_full_text_joins_nodes() {
        let page = ProductPage::parse("<p>one</p><p>two</p>");
        let text = page.full_text();
        assert!(text.contains("one"));
        assert!(text.contains("two"));
    }
}
