// 💵 Money helpers - exact decimal amounts at the boundary
//
// Balances are `bigdecimal::BigDecimal`: unbounded digits and scale, no binary
// floating point, so 1000.232 - 100 is exactly 900.232.

use crate::error::{BankError, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Parse an amount such as "1000.232" or "-50".
///
/// Surrounding whitespace is ignored. Anything `BigDecimal` cannot read
/// (thousands separators, commas as decimal point, empty text) is rejected.
pub fn parse_amount(text: &str) -> Result<BigDecimal> {
    let trimmed = text.trim();
    BigDecimal::from_str(trimmed).map_err(|_| BankError::InvalidAmount(text.to_string()))
}

/// Plain string form (never exponent notation), keeping the scale the
/// arithmetic produced
///
/// Example: 2500 + 500 → "3000", 1000.232 - 500 → "500.232"
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.to_plain_string()
}
