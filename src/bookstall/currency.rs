//! Currency normalization.
//!
//! Prices arrive as free-form strings ("4,000 KHR", "$1.5", "\"8000\"") and
//! are reduced to canonical numeric strings. An unparseable amount degrades
//! to the empty string, which downstream code must treat as "unknown", never
//! as zero.

/// Fixed KHR-per-USD rate. There is no rate fetching; every derivation
/// divides by this constant.
pub const EXCHANGE_RATE: f64 = 4000.0;

/// Strips quote characters, thousands-separator commas and the literal "KHR"
/// (any case) from a raw price string, then trims. A missing value maps to
/// the empty string.
pub fn clean_currency(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let unmarked: String = raw.chars().filter(|c| *c != '"' && *c != ',').collect();
    strip_khr(&unmarked).trim().to_string()
}

/// Parses an amount, keeping only digits, `.` and `-`. `None` means the
/// amount is unknown, which is distinct from zero.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Canonical two-decimal USD string, or empty when `raw` does not parse.
pub fn format_usd(raw: &str) -> String {
    match parse_amount(raw) {
        Some(value) => format!("{:.2}", value),
        None => String::new(),
    }
}

/// Derives the USD price from a cleaned KHR amount at the fixed rate.
pub fn khr_to_usd(khr: &str) -> String {
    match parse_amount(khr) {
        Some(value) => format!("{:.2}", value / EXCHANGE_RATE),
        None => String::new(),
    }
}

fn strip_khr(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 3 <= chars.len()
            && chars[i].eq_ignore_ascii_case(&'k')
            && chars[i + 1].eq_ignore_ascii_case(&'h')
            && chars[i + 2].eq_ignore_ascii_case(&'r')
        {
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}
