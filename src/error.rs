//! The crate-wide error type. Every rejected operation surfaces one of these
//! variants synchronously; nothing is retried internally, and a rejected
//! operation never leaves a partial write in the overflow ledger.

use thiserror::Error;

/// The ways a money operation can be rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A mode string named neither `cents` nor `decimal`.
    #[error("invalid `mode`: {0}")]
    InvalidMode(String),
    /// A rounding method string named no known method.
    #[error("invalid `rounding_method`: {0}")]
    InvalidRoundingMethod(String),
    /// A currency code matched nothing in the registry.
    #[error("unknown currency `{0}`")]
    UnknownCurrency(String),
    /// A currency record carries a subunit ratio the engine cannot scale.
    /// This is a configuration error: the currency stays unusable until its
    /// definition changes.
    #[error("subunit_to_unit ratio `{0}` is not supported")]
    UnsupportedSubunitRatio(u32),
    /// The two operands belong to different currencies. Holds both ISO codes,
    /// left operand first.
    #[error("incompatible currencies (`{0}` and `{1}`)")]
    CurrencyMismatch(String, String),
    /// Division or modulo with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// A result fell outside the representable range of minor units.
    #[error("amount overflows the minor-unit range")]
    AmountOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
