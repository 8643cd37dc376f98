//! Product Page Extraction Engine
//!
//! Turns already-fetched product page markup into a structured
//! name/price/currency record. The engine performs no I/O and keeps no
//! state between calls; the only shared data (the currency symbol table
//! and the compiled price patterns) is read-only after first use, so it is
//! safe to call from any number of tasks concurrently without locking.
//!
//! Price extraction runs ordered strategies and short-circuits on the
//! first one that yields an amount. "Not found" is an explicit result the
//! caller can act on, never a panic.
//!
//! # Modules
//!
//! - [`currency`] - Symbol-to-code resolution with longest-match-wins
//! - [`name`] - Product title extraction
//! - [`price`] - Three-tier price and currency extraction
//! - [`page`] - Parsed page wrapper the extractors query

pub mod currency;
pub mod error;
pub mod name;
pub mod page;
pub mod price;
pub mod types;

pub use error::{ExtractError, Result};
pub use page::ProductPage;
pub use types::{ProductInfo, RETAILER};

/// Extract a product record from raw page markup.
///
/// The markup is parsed once; name and price extraction then query the
/// same document. A missing name is reported before a missing price.
pub fn extract(html: &str, url: &str) -> Result<ProductInfo> {
    let page = ProductPage::parse(html);

    let name = name::extract_name(&page).ok_or(ExtractError::NameNotFound)?;
    let (price, currency) = price::extract_price(&page);
    let price = price.ok_or(ExtractError::PriceNotFound)?;

    Ok(ProductInfo {
        name,
        price,
        currency: currency.to_string(),
        url: url.to_string(),
        retailer: RETAILER.to_string(),
    })
}
