//! Currency definitions and lookup.
//!
//! A [`Currency`] is an immutable record describing one currency: its ISO
//! code, display strings, and most importantly its `subunit_to_unit` ratio,
//! the number of minor units that make one major unit. The bundled registry
//! covers the common decimal ratios (1, 100, 1000) as well as the non-decimal
//! oddballs (ratio 5 for the ariary and the ouguiya, ratio 10 for the old
//! đồng subdivision). Lookup is case-insensitive and never mutates a record.
//!
//! Callers with their own definitions can build records through
//! [`Currency::builder`]; the engine accepts any record whose ratio it knows
//! how to scale.

use std::collections::HashMap;
use getset::{CopyGetters, Getters};
use once_cell::sync::Lazy;
use crate::error::{Error, Result};

/// An immutable currency record. Equality is structural: two records with the
/// same fields are the same currency.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Currency {
    /// Display/sort hint.
    #[getset(get_copy = "pub")]
    priority: u32,
    /// Canonical key, uppercase.
    #[getset(get = "pub")]
    iso_code: String,
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    symbol: String,
    /// Name of the minor unit ("Cent", "Fils", ...); empty for currencies
    /// with no subunit.
    #[getset(get = "pub")]
    subunit_name: String,
    /// Minor units per major unit.
    #[getset(get_copy = "pub")]
    subunit_to_unit: u32,
    /// Fractional digits used when formatting as a decimal.
    #[getset(get_copy = "pub")]
    decimal_places: u32,
    /// Whether the symbol precedes the amount when displayed.
    #[getset(get_copy = "pub")]
    symbol_first: bool,
    #[getset(get = "pub")]
    html_entity: String,
    #[getset(get = "pub")]
    decimal_mark: String,
    #[getset(get = "pub")]
    thousands_separator: String,
}

/// A currency argument: either an ISO code still to be looked up, or an
/// already-resolved record (returned unchanged).
#[derive(Clone, Debug, PartialEq)]
pub enum CurrencyId {
    Code(String),
    Record(Currency),
}

impl CurrencyId {
    /// Resolve to a concrete record. Codes are matched case-insensitively
    /// against the registry; records pass through untouched.
    pub fn resolve(self) -> Result<Currency> {
        match self {
            CurrencyId::Code(code) => CURRENCIES
                .get(code.to_uppercase().as_str())
                .cloned()
                .ok_or(Error::UnknownCurrency(code)),
            CurrencyId::Record(currency) => Ok(currency),
        }
    }
}

impl From<&str> for CurrencyId {
    fn from(code: &str) -> Self {
        CurrencyId::Code(code.to_string())
    }
}

impl From<String> for CurrencyId {
    fn from(code: String) -> Self {
        CurrencyId::Code(code)
    }
}

impl From<Currency> for CurrencyId {
    fn from(currency: Currency) -> Self {
        CurrencyId::Record(currency)
    }
}

impl From<&Currency> for CurrencyId {
    fn from(currency: &Currency) -> Self {
        CurrencyId::Record(currency.clone())
    }
}

impl Currency {
    pub fn builder() -> CurrencyBuilder {
        CurrencyBuilder::default()
    }

    /// Look up a currency by code or pass a resolved record through.
    ///
    /// ```rust
    /// use simple_money::Currency;
    ///
    /// let usd = Currency::get("usd").unwrap();
    /// assert_eq!(usd.iso_code(), "USD");
    /// assert_eq!(Currency::get(&usd).unwrap(), usd);
    /// assert!(Currency::get("not_a_real_currency").is_err());
    /// ```
    pub fn get<T: Into<CurrencyId>>(id: T) -> Result<Currency> {
        id.into().resolve()
    }

    /// One registry row. `decimal_places` is derived from the ratio rather
    /// than stored in the table, which keeps the non-power-of-ten ratios
    /// honest (5 subunits still need one digit).
    fn def(
        priority: u32,
        iso_code: &str,
        name: &str,
        symbol: &str,
        subunit_name: &str,
        subunit_to_unit: u32,
        symbol_first: bool,
        html_entity: &str,
        decimal_mark: &str,
        thousands_separator: &str,
    ) -> Currency {
        Currency {
            priority,
            iso_code: iso_code.into(),
            name: name.into(),
            symbol: symbol.into(),
            subunit_name: subunit_name.into(),
            subunit_to_unit,
            decimal_places: decimal_places_for(subunit_to_unit),
            symbol_first,
            html_entity: html_entity.into(),
            decimal_mark: decimal_mark.into(),
            thousands_separator: thousands_separator.into(),
        }
    }
}

/// The smallest digit count that can index every subunit of the ratio:
/// 1 -> 0, 5 -> 1, 10 -> 1, 100 -> 2, 1000 -> 3.
fn decimal_places_for(subunit_to_unit: u32) -> u32 {
    let mut places = 0;
    let mut span = 1;
    while span < subunit_to_unit {
        span *= 10;
        places += 1;
    }
    places
}

static CURRENCIES: Lazy<HashMap<String, Currency>> = Lazy::new(|| {
    let table = vec![
        Currency::def(1, "USD", "United States Dollar", "$", "Cent", 100, true, "$", ".", ","),
        Currency::def(2, "EUR", "Euro", "€", "Cent", 100, true, "&#x20AC;", ",", "."),
        Currency::def(3, "GBP", "British Pound", "£", "Penny", 100, true, "&#x00A3;", ".", ","),
        Currency::def(4, "AUD", "Australian Dollar", "$", "Cent", 100, true, "$", ".", ","),
        Currency::def(5, "CAD", "Canadian Dollar", "$", "Cent", 100, true, "$", ".", ","),
        Currency::def(6, "JPY", "Japanese Yen", "¥", "", 1, true, "&#x00A5;", ".", ","),
        Currency::def(7, "CHF", "Swiss Franc", "Fr", "Rappen", 100, true, "", ".", ","),
        Currency::def(8, "CNY", "Chinese Renminbi Yuan", "¥", "Fen", 100, true, "&#x5713;", ".", ","),
        Currency::def(9, "INR", "Indian Rupee", "₹", "Paisa", 100, true, "&#x20b9;", ".", ","),
        Currency::def(10, "NZD", "New Zealand Dollar", "$", "Cent", 100, true, "$", ".", ","),
        Currency::def(11, "SEK", "Swedish Krona", "kr", "Öre", 100, false, "", ",", "."),
        Currency::def(12, "NOK", "Norwegian Krone", "kr", "Øre", 100, false, "kr", ",", "."),
        Currency::def(13, "ZAR", "South African Rand", "R", "Cent", 100, true, "&#x0052;", ".", ","),
        Currency::def(14, "BRL", "Brazilian Real", "R$", "Centavo", 100, true, "R$", ",", "."),
        Currency::def(15, "BHD", "Bahraini Dinar", "ب.د", "Fils", 1000, true, "", ".", ","),
        Currency::def(16, "KWD", "Kuwaiti Dinar", "د.ك", "Fils", 1000, true, "", ".", ","),
        Currency::def(17, "TND", "Tunisian Dinar", "د.ت", "Millime", 1000, true, "", ",", "."),
        Currency::def(18, "MGA", "Malagasy Ariary", "Ar", "Iraimbilanja", 5, true, "", ".", ","),
        Currency::def(19, "MRO", "Mauritanian Ouguiya", "UM", "Khoums", 5, false, "", ".", ","),
        Currency::def(20, "VND", "Vietnamese Đồng", "₫", "Hào", 10, false, "&#x20AB;", ",", "."),
    ];
    table
        .into_iter()
        .map(|currency| (currency.iso_code.clone(), currency))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        Currency::builder()
            .priority(1u32)
            .iso_code("USD")
            .name("United States Dollar")
            .symbol("$")
            .subunit_name("Cent")
            .subunit_to_unit(100u32)
            .decimal_places(2u32)
            .symbol_first(true)
            .html_entity("$")
            .decimal_mark(".")
            .thousands_separator(",")
            .build()
            .unwrap()
    }

    #[test]
    fn looks_up_by_code() {
        assert_eq!(Currency::get("USD").unwrap(), usd());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let expected = usd();
        assert_eq!(Currency::get("usd").unwrap(), expected);
        assert_eq!(Currency::get("Usd").unwrap(), expected);
        assert_eq!(Currency::get(String::from("uSD")).unwrap(), expected);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let res = Currency::get("not_a_real_currency");
        assert_eq!(res, Err(Error::UnknownCurrency("not_a_real_currency".into())));
    }

    #[test]
    fn resolved_records_pass_through() {
        let record = usd();
        assert_eq!(Currency::get(&record).unwrap(), record);
        assert_eq!(Currency::get(record.clone()).unwrap(), record);
    }

    #[test]
    fn decimal_places_derive_from_the_ratio() {
        assert_eq!(decimal_places_for(1), 0);
        assert_eq!(decimal_places_for(5), 1);
        assert_eq!(decimal_places_for(10), 1);
        assert_eq!(decimal_places_for(100), 2);
        assert_eq!(decimal_places_for(1000), 3);

        assert_eq!(Currency::get("jpy").unwrap().decimal_places(), 0);
        assert_eq!(Currency::get("mga").unwrap().decimal_places(), 1);
        assert_eq!(Currency::get("vnd").unwrap().decimal_places(), 1);
        assert_eq!(Currency::get("eur").unwrap().decimal_places(), 2);
        assert_eq!(Currency::get("kwd").unwrap().decimal_places(), 3);
    }

    #[test]
    fn custom_records_build() {
        let chip = Currency::builder()
            .priority(99u32)
            .iso_code("CHP")
            .name("Casino Chip")
            .symbol("c")
            .subunit_name("Sliver")
            .subunit_to_unit(1000u32)
            .decimal_places(3u32)
            .symbol_first(false)
            .html_entity("")
            .decimal_mark(".")
            .thousands_separator(",")
            .build()
            .unwrap();
        assert_eq!(chip.iso_code(), "CHP");
        assert_eq!(chip.subunit_to_unit(), 1000);
        assert_eq!(Currency::get(&chip).unwrap(), chip);
    }
}
