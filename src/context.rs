//! The engine's shared state: construction/formatting defaults and the
//! overflow ledger, bundled into an explicit [`Context`] that callers pass to
//! the operations that need it.
//!
//! The ledger is the crate's core invariant made concrete: every fractional
//! cent discarded by rounding is added here, so repeated roundings stay
//! auditable and, in aggregate, reconcilable. It only ever moves through
//! [`Context::round_with`] (and the scalar-divide posting), plus the explicit
//! caller-facing `set_overflow`/`reset_overflow`.
//!
//! A `&Context` is shareable across threads: the ledger sits behind a mutex,
//! so concurrent roundings keep the sum exact, while changing a default needs
//! `&mut self` and therefore exclusive access.

use std::sync::Mutex;
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::*;
use crate::currency::{Currency, CurrencyId};
use crate::error::{Error, Result};
use crate::money::Mode;
use crate::rounding::RoundingMethod;

/// Defaults and the overflow ledger. Defaults are consulted only when a value
/// is constructed or formatted without explicit overrides; changing them
/// never affects already-constructed values.
#[derive(Debug, Getters, CopyGetters)]
pub struct Context {
    /// The mode assumed when none is given (initially `cents`).
    #[getset(get_copy = "pub")]
    default_mode: Mode,
    /// The rounding method used when none is given (initially `bankers`).
    #[getset(get_copy = "pub")]
    default_rounding_method: RoundingMethod,
    /// The currency assumed when none is given (initially USD).
    #[getset(get = "pub")]
    default_currency: Currency,
    overflow: Mutex<Decimal>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            default_mode: Mode::Cents,
            default_rounding_method: RoundingMethod::Bankers,
            default_currency: Currency::get("USD").expect("bundled registry includes USD"),
            overflow: Mutex::new(Decimal::zero()),
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_mode(&mut self, mode: Mode) {
        self.default_mode = mode;
    }

    pub fn set_default_rounding_method(&mut self, rounding_method: RoundingMethod) {
        self.default_rounding_method = rounding_method;
    }

    /// Set the default currency, resolving codes through the registry. Fails
    /// with `UnknownCurrency` before anything changes.
    pub fn set_default_currency<T: Into<CurrencyId>>(&mut self, id: T) -> Result<()> {
        self.default_currency = id.into().resolve()?;
        Ok(())
    }

    /// The fractional cents accumulated from every rounding so far.
    pub fn overflow(&self) -> Decimal {
        *self.lock_overflow()
    }

    /// Assign the ledger outright.
    pub fn set_overflow<T: Into<Decimal>>(&self, n: T) {
        let n = n.into();
        *self.lock_overflow() = n;
        log::debug!("overflow ledger set to {}", n);
    }

    /// Zero the ledger.
    pub fn reset_overflow(&self) {
        self.set_overflow(Decimal::zero());
    }

    /// Round `n` to an integer count of minor units with the context default
    /// method, posting the discarded remainder to the ledger.
    pub fn round(&self, n: Decimal) -> Result<i64> {
        self.round_with(n, self.default_rounding_method)
    }

    /// Round `n` to an integer count of minor units, posting `n - rounded` to
    /// the ledger. This is the single point where precision is lost, and the
    /// posting makes the loss auditable. A result outside the i64 range fails
    /// `AmountOutOfRange` with the ledger untouched.
    pub fn round_with(&self, n: Decimal, rounding_method: RoundingMethod) -> Result<i64> {
        let rounded = n.round_dp_with_strategy(0, rounding_method.strategy());
        let cents = rounded.to_i64().ok_or(Error::AmountOutOfRange)?;
        self.post_overflow(n - rounded);
        Ok(cents)
    }

    /// Additive ledger posting. Zero remainders are skipped; everything else
    /// lands in the ledger, never resetting it.
    pub(crate) fn post_overflow(&self, remainder: Decimal) {
        if remainder.is_zero() {
            return;
        }
        let mut overflow = self.lock_overflow();
        *overflow += remainder;
        log::trace!("overflow ledger += {} (now {})", remainder, *overflow);
    }

    fn lock_overflow(&self) -> std::sync::MutexGuard<'_, Decimal> {
        // a poisoned lock still holds a consistent sum: additions happen
        // entirely inside the critical section
        self.overflow.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
