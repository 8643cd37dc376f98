//! End-to-end extraction over realistic product page markup.

use extraction::{extract, ExtractError};
use rust_decimal::Decimal;

const PRODUCT_URL: &str = "https://www.amazon.com/dp/B0EXAMPLE";

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// A page in the most common shape: offscreen combined price text plus the
/// visual whole/fraction split, which must be ignored once the combined
/// text parses.
const FULL_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Wireless Mouse 2.4G : Electronics</title></head>
<body>
  <div id="titleSection">
    <span id="productTitle">
      Wireless Mouse 2.4G, Ergonomic, 6 Buttons
    </span>
  </div>
  <div id="corePrice">
    <span class="a-price">
      <span class="a-offscreen">$249.00</span>
      <span aria-hidden="true">
        <span class="a-price-symbol">$</span><span class="a-price-whole">249<span class="a-price-decimal">.</span></span><span class="a-price-fraction">00</span>
      </span>
    </span>
  </div>
  <div id="availability">In Stock. Ships from and sold by the retailer.</div>
</body>
</html>
"#;

#[test]
fn extracts_name_price_and_currency() {
    let info = extract(FULL_PAGE, PRODUCT_URL).unwrap();

    assert_eq!(info.name, "Wireless Mouse 2.4G, Ergonomic, 6 Buttons");
    assert_eq!(info.price, dec("249.00"));
    assert_eq!(info.currency, "USD");
    assert_eq!(info.url, PRODUCT_URL);
    assert_eq!(info.retailer, "Amazon");
}

#[test]
fn extraction_is_idempotent() {
    let first = extract(FULL_PAGE, PRODUCT_URL).unwrap();
    let second = extract(FULL_PAGE, PRODUCT_URL).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolves_rupee_prefix_against_rand() {
    // "Rs." shares its first letter with the rand symbol; the longer
    // symbol must win.
    let page = r#"
    <span id="productTitle">Ceylon Tea 400g</span>
    <span class="a-price"><span class="a-offscreen">Rs. 2,164.45</span></span>
    "#;

    let info = extract(page, PRODUCT_URL).unwrap();
    assert_eq!(info.price, dec("2164.45"));
    assert_eq!(info.currency, "LKR");
}

#[test]
fn split_markup_without_offscreen_text() {
    let page = r#"
    <span id="productTitle">USB-C Hub</span>
    <span class="a-price-symbol">$</span>
    <span class="a-price-whole">1,299</span>
    <span class="a-price-fraction">99</span>
    "#;

    let info = extract(page, PRODUCT_URL).unwrap();
    assert_eq!(info.price, dec("1299.99"));
    assert_eq!(info.currency, "USD");
}

#[test]
fn plain_text_price_is_found_by_scan() {
    let page = r#"
    <div id="title">Vintage Keyboard</div>
    <p>Limited offer. Price: £89.50 today only.</p>
    "#;

    let info = extract(page, PRODUCT_URL).unwrap();
    assert_eq!(info.price, dec("89.50"));
    assert_eq!(info.currency, "GBP");
}

#[test]
fn missing_title_reports_name_not_found() {
    let page = r#"<p>$19.99</p>"#;
    assert_eq!(extract(page, PRODUCT_URL), Err(ExtractError::NameNotFound));
}

#[test]
fn missing_price_reports_price_not_found() {
    let page = r#"<span id="productTitle">Mystery Box</span><p>Currently unavailable.</p>"#;
    assert_eq!(extract(page, PRODUCT_URL), Err(ExtractError::PriceNotFound));
}
