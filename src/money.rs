//! The money value type and its arithmetic.
//!
//! A [`Money`] is an integer count of a currency's minor units plus the
//! currency record and the rounding method it was constructed with. Values
//! are immutable; every operation returns a new value carrying the left
//! operand's currency and rounding method. Whenever an operation produces a
//! fraction of a cent, the excess goes through [`Context::round_with`] and
//! lands in the overflow ledger rather than disappearing.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use crate::context::Context;
use crate::currency::{Currency, CurrencyId};
use crate::error::{Error, Result};
use crate::rounding::RoundingMethod;

/// How an amount is denominated: directly in minor units, or as a decimal
/// number of major units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Mode {
    Cents,
    Decimal,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Cents, Mode::Decimal];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Cents => "cents",
            Mode::Decimal => "decimal",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cents" => Ok(Mode::Cents),
            "decimal" => Ok(Mode::Decimal),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// Construction options. Every field defaults to the corresponding
/// [`Context`] value when left unset.
///
/// ```rust
/// use simple_money::{Context, Mode, Money, MoneyOpts, RoundingMethod};
/// use rust_decimal_macros::dec;
///
/// let ctx = Context::new();
/// let opts = MoneyOpts::new()
///     .mode(Mode::Decimal)
///     .rounding_method(RoundingMethod::Up)
///     .currency("eur");
/// let price = Money::new_with(dec!(1.99), opts, &ctx).unwrap();
/// assert_eq!(price.cents(), 199);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoneyOpts {
    mode: Option<Mode>,
    rounding_method: Option<RoundingMethod>,
    currency: Option<CurrencyId>,
}

impl MoneyOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn rounding_method(mut self, rounding_method: RoundingMethod) -> Self {
        self.rounding_method = Some(rounding_method);
        self
    }

    pub fn currency<T: Into<CurrencyId>>(mut self, id: T) -> Self {
        self.currency = Some(id.into());
        self
    }
}

/// An immutable amount of one currency, stored as minor units.
#[derive(Clone, Debug, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Money {
    /// The value in minor units.
    #[getset(get_copy = "pub")]
    cents: i64,
    /// The rounding method every arithmetic operation on this value uses.
    #[getset(get_copy = "pub")]
    rounding_method: RoundingMethod,
    /// The resolved currency captured at construction.
    #[getset(get = "pub")]
    currency: Currency,
}

impl Money {
    /// Create a Money from `n` using the context defaults for mode, rounding
    /// method and currency.
    pub fn new<N: Into<Decimal>>(n: N, ctx: &Context) -> Result<Money> {
        Money::new_with(n, MoneyOpts::new(), ctx)
    }

    /// Create a Money from `n`, taking anything unspecified in `opts` from
    /// the context defaults.
    ///
    /// In `cents` mode `n` is already minor units and simply rounds to an
    /// integer (posting any fraction to the ledger). In `decimal` mode the
    /// scaling depends on the currency's subunit ratio; a ratio the engine
    /// cannot scale fails `UnsupportedSubunitRatio` before the ledger is
    /// touched.
    pub fn new_with<N: Into<Decimal>>(n: N, opts: MoneyOpts, ctx: &Context) -> Result<Money> {
        let MoneyOpts { mode, rounding_method, currency } = opts;
        let currency = match currency {
            Some(id) => id.resolve()?,
            None => ctx.default_currency().clone(),
        };
        let rounding_method = rounding_method.unwrap_or_else(|| ctx.default_rounding_method());
        let mode = mode.unwrap_or_else(|| ctx.default_mode());
        let n = n.into();

        let cents = match mode {
            Mode::Cents => ctx.round_with(n, rounding_method)?,
            Mode::Decimal => match currency.subunit_to_unit() {
                10 | 100 | 1000 => {
                    let ratio = Decimal::from(currency.subunit_to_unit());
                    ctx.round_with(n * ratio, rounding_method)?
                }
                // whole-unit currencies have nothing to scale
                1 => ctx.round_with(n, rounding_method)?,
                // non-decimal ratio: the tenths digit counts subunits
                // directly (1.4 ariary = 1 unit, 4 iraimbilanja), so whole
                // units scale by the ratio and tenths pass through. The sum
                // rounds with the context default method, not the instance
                // one.
                5 => {
                    let unit = n.floor() * dec!(5);
                    let subunit = (n - n.floor()) * dec!(10);
                    ctx.round(unit + subunit)?
                }
                ratio => Err(Error::UnsupportedSubunitRatio(ratio))?,
            },
        };

        Ok(Money { cents, rounding_method, currency })
    }

    /// Add two amounts of the same currency. Exact: integer addition, the
    /// ledger is never touched.
    pub fn add(&self, n: &Money) -> Result<Money> {
        self.same_currency(n)?;
        let cents = self.cents.checked_add(n.cents).ok_or(Error::AmountOutOfRange)?;
        Ok(self.derive(cents))
    }

    /// Subtract two amounts of the same currency. Exact.
    pub fn subtract(&self, n: &Money) -> Result<Money> {
        self.same_currency(n)?;
        let cents = self.cents.checked_sub(n.cents).ok_or(Error::AmountOutOfRange)?;
        Ok(self.derive(cents))
    }

    /// Multiply by a scalar. The exact product of cents and scalar goes
    /// through the rounding primitive with this value's method.
    pub fn multiply<N: Into<Decimal>>(&self, n: N, ctx: &Context) -> Result<Money> {
        let product = Decimal::from(self.cents) * n.into();
        let cents = ctx.round_with(product, self.rounding_method)?;
        Ok(self.derive(cents))
    }

    /// The exact quotient of two same-currency amounts. Dimensionless, so the
    /// result is a plain decimal, not a Money; the ledger is not involved.
    pub fn ratio(&self, n: &Money) -> Result<Decimal> {
        self.same_currency(n)?;
        if n.cents == 0 {
            Err(Error::DivisionByZero)?;
        }
        Ok(Decimal::from(self.cents) / Decimal::from(n.cents))
    }

    /// Divide by a scalar: floored division of the cent count. The integral
    /// quotient becomes the new value and the whole remainder posts to the
    /// overflow ledger.
    pub fn divide<N: Into<Decimal>>(&self, n: N, ctx: &Context) -> Result<Money> {
        let n = n.into();
        if n.is_zero() {
            Err(Error::DivisionByZero)?;
        }
        let (quotient, remainder) = floor_divmod(Decimal::from(self.cents), n);
        let cents = ctx.round_with(quotient, self.rounding_method)?;
        ctx.post_overflow(remainder);
        Ok(self.derive(cents))
    }

    /// The floored-division remainder of two same-currency cent counts, as a
    /// plain decimal.
    pub fn remainder(&self, n: &Money) -> Result<Decimal> {
        self.same_currency(n)?;
        if n.cents == 0 {
            Err(Error::DivisionByZero)?;
        }
        Ok(floor_divmod(Decimal::from(self.cents), Decimal::from(n.cents)).1)
    }

    /// The floored-division remainder of the cent count by a scalar, rounded
    /// back into a Money (any fractional part posts to the ledger).
    pub fn modulo<N: Into<Decimal>>(&self, n: N, ctx: &Context) -> Result<Money> {
        let n = n.into();
        if n.is_zero() {
            Err(Error::DivisionByZero)?;
        }
        let (_, remainder) = floor_divmod(Decimal::from(self.cents), n);
        let cents = ctx.round_with(remainder, self.rounding_method)?;
        Ok(self.derive(cents))
    }

    /// Floored quotient and remainder against another same-currency amount:
    /// the quotient is a dimensionless integral decimal, the remainder wraps
    /// this value's currency and rounding method. Both parts are exact, so
    /// the ledger stays out of it.
    pub fn divmod_money(&self, n: &Money) -> Result<(Decimal, Money)> {
        self.same_currency(n)?;
        if n.cents == 0 {
            Err(Error::DivisionByZero)?;
        }
        let (quotient, remainder) = floor_divmod(Decimal::from(self.cents), Decimal::from(n.cents));
        let cents = remainder.to_i64().ok_or(Error::AmountOutOfRange)?;
        Ok((quotient, self.derive(cents)))
    }

    /// Floored quotient and remainder against a scalar, both as Money. The
    /// quotient is integral; the remainder rounds through the primitive, so
    /// its fractional part posts to the ledger.
    pub fn divmod<N: Into<Decimal>>(&self, n: N, ctx: &Context) -> Result<(Money, Money)> {
        let n = n.into();
        if n.is_zero() {
            Err(Error::DivisionByZero)?;
        }
        let (quotient, remainder) = floor_divmod(Decimal::from(self.cents), n);
        let quotient_cents = ctx.round_with(quotient, self.rounding_method)?;
        let remainder_cents = ctx.round_with(remainder, self.rounding_method)?;
        Ok((self.derive(quotient_cents), self.derive(remainder_cents)))
    }

    /// The absolute value, keeping currency and rounding method.
    pub fn abs(&self) -> Result<Money> {
        let cents = self.cents.checked_abs().ok_or(Error::AmountOutOfRange)?;
        Ok(self.derive(cents))
    }

    /// Compare two amounts of the same currency; comparing across currencies
    /// is an error rather than an answer.
    pub fn try_cmp(&self, n: &Money) -> Result<Ordering> {
        self.same_currency(n)?;
        Ok(self.cents.cmp(&n.cents))
    }

    /// Format the amount as a string.
    ///
    /// `cents` prints the raw minor-unit count. `decimal` splits it by the
    /// subunit ratio into whole units and a zero-padded subunit part (ratio-1
    /// currencies have no fractional part to print).
    pub fn format(&self, mode: Mode) -> String {
        match mode {
            Mode::Cents => self.cents.to_string(),
            Mode::Decimal => {
                let ratio = self.currency.subunit_to_unit();
                if ratio == 1 {
                    return self.cents.to_string();
                }
                let ratio = u64::from(ratio);
                let sign = if self.cents < 0 { "-" } else { "" };
                let abs = self.cents.unsigned_abs();
                let (unit, subunit) = (abs / ratio, abs % ratio);
                let places = self.currency.decimal_places() as usize;
                format!("{}{}.{:0places$}", sign, unit, subunit, places = places)
            }
        }
    }

    fn same_currency(&self, n: &Money) -> Result<()> {
        if self.currency != n.currency {
            Err(Error::CurrencyMismatch(
                self.currency.iso_code().clone(),
                n.currency.iso_code().clone(),
            ))?;
        }
        Ok(())
    }

    /// A new value with this one's currency and rounding method.
    fn derive(&self, cents: i64) -> Money {
        Money {
            cents,
            rounding_method: self.rounding_method,
            currency: self.currency.clone(),
        }
    }
}

/// Floored divmod: `q = floor(a / b)`, `r = a - b * q`. The remainder takes
/// the divisor's sign.
fn floor_divmod(a: Decimal, b: Decimal) -> (Decimal, Decimal) {
    let quotient = (a / b).floor();
    (quotient, a - b * quotient)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Mode::Cents))
    }
}

/// Equal when cents and currency agree; the rounding method is a calculation
/// preference, not part of the value.
impl PartialEq for Money {
    fn eq(&self, n: &Self) -> bool {
        self.currency == n.currency && self.cents == n.cents
    }
}

/// Ordered within a currency; amounts of different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, n: &Self) -> Option<Ordering> {
        if self.currency == n.currency {
            Some(self.cents.cmp(&n.cents))
        } else {
            None
        }
    }
}


#[cfg(all(test, feature = "with_serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn money_round_trips_through_json() {
        let ctx = Context::new();
        let money = Money::new_with(
            199,
            MoneyOpts::new().currency("eur").rounding_method(RoundingMethod::Up),
            &ctx,
        )
        .unwrap();
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
        assert_eq!(back.rounding_method(), RoundingMethod::Up);
    }

    #[test]
    fn rounding_methods_serialize_as_snake_case() {
        let json = serde_json::to_string(&RoundingMethod::AwayFromZero).unwrap();
        assert_eq!(json, "\"away_from_zero\"");
    }
}
