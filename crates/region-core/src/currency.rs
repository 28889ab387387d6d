//! Currencies a market can trade in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegionError;

/// ISO 4217 currencies supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Currency {
    EUR,
    USD,
    GBP,
    CHF,
    SEK,
    DKK,
    NOK,
    PLN,
    CZK,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
            Currency::SEK => "SEK",
            Currency::DKK => "DKK",
            Currency::NOK => "NOK",
            Currency::PLN => "PLN",
            Currency::CZK => "CZK",
            Currency::JPY => "JPY",
        }
    }

    /// Get the display symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
            Currency::CHF => "CHF",
            Currency::SEK | Currency::DKK | Currency::NOK => "kr",
            Currency::PLN => "z\u{0142}",
            Currency::CZK => "K\u{010d}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of minor-unit decimal places.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            "CHF" => Some(Currency::CHF),
            "SEK" => Some(Currency::SEK),
            "DKK" => Some(Currency::DKK),
            "NOK" => Some(Currency::NOK),
            "PLN" => Some(Currency::PLN),
            "CZK" => Some(Currency::CZK),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| RegionError::UnknownCurrency(s.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = RegionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for &'static str {
    fn from(currency: Currency) -> Self {
        currency.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("pln"), Some(Currency::PLN));
        assert_eq!(Currency::from_code("XXX"), None);
    }

    #[test]
    fn test_currency_parse_error() {
        let err = "BTC".parse::<Currency>().unwrap_err();
        assert!(matches!(err, RegionError::UnknownCurrency(code) if code == "BTC"));
    }

    #[test]
    fn test_currency_serde() {
        let json = serde_json::to_string(&Currency::SEK).unwrap();
        assert_eq!(json, r#""SEK""#);

        let parsed: Currency = serde_json::from_str(r#""chf""#).unwrap();
        assert_eq!(parsed, Currency::CHF);

        assert!(serde_json::from_str::<Currency>(r#""XYZ""#).is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::EUR.to_string(), "EUR");
        assert_eq!(Currency::EUR.symbol(), "\u{20ac}");
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }
}
