//! Output record of a successful extraction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The retailer whose page markup this engine understands.
pub const RETAILER: &str = "Amazon";

/// Everything the tracker needs from one product page.
///
/// Produced once per extraction call and never mutated; the caller uses it
/// to create or update a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub price: Decimal,
    /// ISO 4217 code, e.g. "USD", "LKR"
    pub currency: String,
    pub url: String,
    pub retailer: String,
}
