//! Price and currency extraction.
//!
//! Three strategies run in strict priority order and the first one that
//! yields an amount wins; price and currency always come from the same
//! strategy:
//!
//! 1. a combined text node holding symbol and amount together
//! 2. split whole/fraction markup with an optional symbol fragment
//! 3. a pattern scan for currency-prefixed amounts over the page's
//!    full visible text
//!
//! A parse failure inside one strategy falls through to the next; only
//! total exhaustion reports "not found".

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::currency::{self, DEFAULT_CURRENCY};
use crate::page::ProductPage;

/// Combined symbol+amount text, e.g. "Rs. 2,164.45".
const COMBINED_PRICE_SELECTOR: &str = ".a-price .a-offscreen";

/// Split price markup fragments.
const SYMBOL_SELECTOR: &str = ".a-price-symbol";
const WHOLE_SELECTOR: &str = ".a-price-whole";
const FRACTION_SELECTOR: &str = ".a-price-fraction";

/// Symbols that occasionally leak into the whole-amount text itself.
const EMBEDDED_SYMBOLS: &[&str] = &["$", "Rs", "රු", "€", "£", "¥", "₹"];

lazy_static! {
    /// An amount with optional thousands separators and up to two decimals.
    static ref AMOUNT: Regex = Regex::new(r"([\d,]+\.?\d{0,2})").unwrap();

    /// Pattern-scan tier: currency-prefixed amounts in page text, in fixed
    /// priority order. The first pattern with a match wins.
    static ref TEXT_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"Rs\.?\s*([\d,]+\.?\d{0,2})").unwrap(), "LKR"),
        (Regex::new(r"රු\.?\s*([\d,]+\.?\d{0,2})").unwrap(), "LKR"),
        (Regex::new(r"\$\s*([\d,]+\.?\d{0,2})").unwrap(), "USD"),
        (Regex::new(r"€\s*([\d,]+\.?\d{0,2})").unwrap(), "EUR"),
        (Regex::new(r"£\s*([\d,]+\.?\d{0,2})").unwrap(), "GBP"),
        (Regex::new(r"₹\s*([\d,]+\.?\d{0,2})").unwrap(), "INR"),
    ];
}

/// Extract `(price, currency)` from a product page.
///
/// The price is `None` when every strategy comes up empty; a currency code
/// is still reported (defaulting to USD) so callers always have one.
pub fn extract_price(page: &ProductPage) -> (Option<Decimal>, &'static str) {
    if let Some((price, code)) = combined_text_price(page) {
        return (Some(price), code);
    }
    if let Some((price, code)) = split_markup_price(page) {
        return (Some(price), code);
    }
    if let Some((price, code)) = text_pattern_price(page) {
        return (Some(price), code);
    }
    (None, DEFAULT_CURRENCY)
}

/// Parse combined price text like "Rs. 2,164.45" or "$249.00": identify
/// and remove the currency symbol, then parse the remaining amount.
pub fn parse_price_text(text: &str) -> Option<(Decimal, &'static str)> {
    let (code, remainder) = currency::strip_symbol(text);
    let price = parse_amount(&remainder)?;
    Some((price, code.unwrap_or(DEFAULT_CURRENCY)))
}

/// Strategy 1: a single node carrying both symbol and amount.
fn combined_text_price(page: &ProductPage) -> Option<(Decimal, &'static str)> {
    let text = page.select_text(COMBINED_PRICE_SELECTOR)?;
    parse_price_text(&text)
}

/// Strategy 2: whole and fraction rendered as separate fragments.
fn split_markup_price(page: &ProductPage) -> Option<(Decimal, &'static str)> {
    let whole = page.select_text(WHOLE_SELECTOR)?;

    let code = match page.select_text(SYMBOL_SELECTOR) {
        Some(symbol) => currency::code_for_symbol_or_default(&symbol),
        None => DEFAULT_CURRENCY,
    };

    // Whole text shows up as "2,164", "249." or even "$249" in the wild.
    let mut whole = whole.replace(',', "");
    for symbol in EMBEDDED_SYMBOLS {
        whole = whole.replace(symbol, "");
    }
    let whole = whole.trim();
    let whole = whole.strip_suffix('.').unwrap_or(whole);

    let price_str = match page.select_text(FRACTION_SELECTOR) {
        Some(fraction) => format!("{}.{}", whole, fraction),
        None => whole.to_string(),
    };

    match price_str.parse::<Decimal>() {
        Ok(price) => Some((price, code)),
        Err(_) => {
            warn!(text = %price_str, "could not parse split price text");
            None
        }
    }
}

/// Strategy 3: scan the page's visible text for currency-prefixed amounts.
fn text_pattern_price(page: &ProductPage) -> Option<(Decimal, &'static str)> {
    let text = page.full_text();

    for (pattern, code) in TEXT_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(&text) {
            if let Some(amount) = captures.get(1) {
                if let Some(price) = parse_numeric(amount.as_str()) {
                    return Some((price, *code));
                }
            }
        }
    }

    None
}

/// Find the first amount-shaped token in `text` and parse it.
fn parse_amount(text: &str) -> Option<Decimal> {
    AMOUNT
        .find(text)
        .and_then(|m| parse_numeric(m.as_str()))
}

/// Strip thousands separators, keep the decimal point, parse.
fn parse_numeric(text: &str) -> Option<Decimal> {
    text.replace(',', "").parse::<Decimal>().ok()
}
