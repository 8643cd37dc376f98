//! Currency symbol resolution.
//!
//! Product pages spell the same currency many ways ("Rs.", "Rs", "රු"),
//! and several currencies overlap as textual prefixes: "R" (ZAR) is a
//! prefix of "Rs" (LKR) and "R$" (BRL). Resolution must always prefer the
//! longest matching symbol, so lookups go through an index sorted by
//! symbol length descending rather than relying on table order alone.
//!
//! This module is the single implementation of the ambiguity rule; every
//! extraction strategy resolves symbols through it.

use lazy_static::lazy_static;
use tracing::warn;

/// Symbol → ISO 4217 code.
///
/// Currency-specific multi-character symbols are registered before the
/// shorter symbols they contain: "Rs.", "Rs" and "R$" before "R".
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    // Sri Lankan rupee (before "R", which would match ZAR)
    ("Rs.", "LKR"),
    ("Rs", "LKR"),
    ("රු.", "LKR"),
    ("රු", "LKR"),
    ("LKR", "LKR"),
    // Brazilian real (before "R")
    ("R$", "BRL"),
    ("BRL", "BRL"),
    // South African rand (after "Rs" and "R$")
    ("R", "ZAR"),
    ("ZAR", "ZAR"),
    ("$", "USD"),
    ("USD", "USD"),
    ("€", "EUR"),
    ("EUR", "EUR"),
    ("£", "GBP"),
    ("GBP", "GBP"),
    ("¥", "JPY"),
    ("JPY", "JPY"),
    ("₹", "INR"),
    ("INR", "INR"),
    ("A$", "AUD"),
    ("AUD", "AUD"),
    ("C$", "CAD"),
    ("CAD", "CAD"),
    ("S$", "SGD"),
    ("SGD", "SGD"),
    ("RM", "MYR"),
    ("MYR", "MYR"),
    ("₱", "PHP"),
    ("PHP", "PHP"),
    ("฿", "THB"),
    ("THB", "THB"),
    ("kr", "SEK"),
    ("SEK", "SEK"),
    ("zł", "PLN"),
    ("PLN", "PLN"),
    ("د.إ", "AED"),
    ("AED", "AED"),
    ("SR", "SAR"),
    ("SAR", "SAR"),
];

/// Fallback when no symbol can be identified.
pub const DEFAULT_CURRENCY: &str = "USD";

lazy_static! {
    /// Table entries sorted by symbol byte length, longest first. Stable
    /// sort keeps the table's declared order among equal-length symbols.
    static ref SYMBOLS_BY_LENGTH: Vec<(&'static str, &'static str)> = {
        let mut entries = CURRENCY_SYMBOLS.to_vec();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        entries
    };
}

/// Resolve a bare symbol token ("Rs.", "$", "A$") to its currency code.
///
/// Exact table match first, then the first length-descending symbol the
/// token starts with. `None` if nothing matches.
pub fn code_for_symbol(token: &str) -> Option<&'static str> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    for &(symbol, code) in CURRENCY_SYMBOLS {
        if symbol == token {
            return Some(code);
        }
    }

    for &(symbol, code) in SYMBOLS_BY_LENGTH.iter() {
        if token.starts_with(symbol) {
            return Some(code);
        }
    }

    None
}

/// Like [`code_for_symbol`], but unrecognized tokens fall back to
/// [`DEFAULT_CURRENCY`] with a warning instead of failing the extraction.
pub fn code_for_symbol_or_default(token: &str) -> &'static str {
    match code_for_symbol(token) {
        Some(code) => code,
        None => {
            warn!(token = %token.trim(), "unknown currency symbol, defaulting to USD");
            DEFAULT_CURRENCY
        }
    }
}

/// Find and remove the first currency symbol embedded in `text`.
///
/// Longer symbols are searched first, so "Rs. 2,164.45" loses "Rs." as a
/// unit rather than a bare "R". Returns the resolved code (if a symbol was
/// present) and the trimmed remainder.
pub fn strip_symbol(text: &str) -> (Option<&'static str>, String) {
    for &(symbol, code) in SYMBOLS_BY_LENGTH.iter() {
        if let Some(pos) = text.find(symbol) {
            let mut remainder = String::with_capacity(text.len() - symbol.len());
            remainder.push_str(&text[..pos]);
            remainder.push_str(&text[pos + symbol.len()..]);
            return (Some(code), remainder.trim().to_string());
        }
    }
    (None, text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        assert_eq!(code_for_symbol("Rs."), Some("LKR"));
        assert_eq!(code_for_symbol("Rs"), Some("LKR"));
        assert_eq!(code_for_symbol("R$"), Some("BRL"));
        assert_eq!(code_for_symbol("R"), Some("ZAR"));
        assert_eq!(code_for_symbol("$"), Some("USD"));
        assert_eq!(code_for_symbol("A$"), Some("AUD"));
        assert_eq!(code_for_symbol("EUR"), Some("EUR"));
    }

    #[test]
    fn test_trims_before_matching() {
        assert_eq!(code_for_symbol("  Rs.  "), Some("LKR"));
        assert_eq!(code_for_symbol(" £ "), Some("GBP"));
    }

    #[test]
    fn test_prefix_matching_prefers_longest() {
        // A token that is not an exact key still resolves via its longest
        // known prefix, never a shorter one.
        assert_eq!(code_for_symbol("Rs.*"), Some("LKR"));
        assert_eq!(code_for_symbol("R$5"), Some("BRL"));
        assert_eq!(code_for_symbol("$US"), Some("USD"));
    }

    #[test]
    fn test_no_table_prefix_pair_shadows_the_longer_symbol() {
        // For every pair of symbols where one is a strict prefix of the
        // other, a token starting with the longer symbol must resolve to
        // the longer symbol's code.
        for (long, long_code) in CURRENCY_SYMBOLS {
            for (short, short_code) in CURRENCY_SYMBOLS {
                if short.len() < long.len() && long.starts_with(short) && short_code != long_code {
                    let token = format!("{}100", long);
                    assert_eq!(
                        code_for_symbol(&token),
                        Some(*long_code),
                        "token {:?} resolved past {:?}",
                        token,
                        long,
                    );
                }
            }
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(code_for_symbol("XYZ"), None);
        assert_eq!(code_for_symbol(""), None);
        assert_eq!(code_for_symbol_or_default("XYZ"), "USD");
    }

    #[test]
    fn test_strip_symbol_combined_text() {
        assert_eq!(strip_symbol("Rs. 2,164.45"), (Some("LKR"), "2,164.45".to_string()));
        assert_eq!(strip_symbol("$249.00"), (Some("USD"), "249.00".to_string()));
        assert_eq!(strip_symbol("R$ 99,90"), (Some("BRL"), "99,90".to_string()));
        assert_eq!(strip_symbol("€1.234,56"), (Some("EUR"), "1.234,56".to_string()));
    }

    #[test]
    fn test_strip_symbol_without_symbol() {
        assert_eq!(strip_symbol("  1,299.99 "), (None, "1,299.99".to_string()));
    }

    #[test]
    fn test_strip_symbol_removes_single_occurrence() {
        let (code, rest) = strip_symbol("Rs 100 Rs");
        assert_eq!(code, Some("LKR"));
        assert_eq!(rest, "100 Rs");
    }
}
