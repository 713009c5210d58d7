//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront shows every amount in the shopper's selected currency by
//! swapping the symbol; amounts are not converted between currencies.
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use vedic_hearth_core::{CurrencyCode, Price};
//!
//! let price = Price::new(Decimal::from(2097), CurrencyCode::INR);
//! assert_eq!(price.display(), "₹2,097");
//!
//! let price = Price::new(Decimal::new(123_456_789, 2), CurrencyCode::USD);
//! assert_eq!(price.display(), "$1,234,567.89");
//! ```

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Symbol used when a currency code is not recognized.
pub const FALLBACK_SYMBOL: &str = "$";

/// Maximum number of fractional digits shown in a formatted amount.
const MAX_FRACTION_DIGITS: u32 = 3;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "₹1,299").
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{}",
            self.currency_code.symbol(),
            format_grouped(self.amount)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Every supported currency, in selector order.
    pub const ALL: [Self; 3] = [Self::INR, Self::USD, Self::EUR];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// Three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }

    /// Human-readable currency name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::INR => "Indian Rupee",
            Self::USD => "US Dollar",
            Self::EUR => "Euro",
        }
    }

    /// Symbol for a raw currency code, falling back to `$` when unknown.
    #[must_use]
    pub fn symbol_for(code: &str) -> &'static str {
        code.parse::<Self>()
            .map_or(FALLBACK_SYMBOL, |currency| currency.symbol())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| format!("unsupported currency: {code}"))
    }
}

/// Format an amount with `,` thousands separators.
///
/// At most three fractional digits are kept (rounded half away from zero)
/// and trailing fractional zeros are dropped, so `2097` renders as
/// `2,097` and `1299.50` as `1,299.5`.
#[must_use]
pub fn format_grouped(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text
        .split_once('.')
        .map_or((text.as_str(), None), |(int, frac)| (int, Some(frac)));

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }

    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_integers() {
        assert_eq!(format_grouped(Decimal::from(0)), "0");
        assert_eq!(format_grouped(Decimal::from(299)), "299");
        assert_eq!(format_grouped(Decimal::from(2097)), "2,097");
        assert_eq!(format_grouped(Decimal::from(1_234_567)), "1,234,567");
    }

    #[test]
    fn test_format_grouped_fractions() {
        assert_eq!(format_grouped(Decimal::new(129_950, 2)), "1,299.5");
        assert_eq!(format_grouped(Decimal::new(10_000, 2)), "100");
        assert_eq!(format_grouped(Decimal::new(12_345, 4)), "1.235");
    }

    #[test]
    fn test_format_grouped_negative() {
        assert_eq!(format_grouped(Decimal::from(-4500)), "-4,500");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::INR.symbol(), "₹");
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
    }

    #[test]
    fn test_symbol_for_unknown_falls_back() {
        assert_eq!(CurrencyCode::symbol_for("EUR"), "€");
        assert_eq!(CurrencyCode::symbol_for("GBP"), "$");
        assert_eq!(CurrencyCode::symbol_for(""), "$");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" Eur ".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert!("JPY".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_default_currency_is_inr() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::INR);
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(Decimal::from(899), CurrencyCode::EUR);
        assert_eq!(price.display(), "€899");
        assert_eq!(price.to_string(), "€899");
    }
}
