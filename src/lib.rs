//! Money without the pitfalls of binary floating point: amounts live as an
//! integer count of a currency's minor units, every intermediate calculation
//! runs on exact decimals, and any fraction of a cent a rounding discards is
//! posted to an overflow ledger instead of vanishing.
//!
//! The moving parts:
//!
//! - [`Currency`]: immutable currency records with a bundled, case-insensitive
//!   registry, including the non-decimal subunit ratios (5, 10) alongside the
//!   ordinary ones (1, 100, 1000).
//! - [`RoundingMethod`]: the closed set of seven rounding strategies.
//! - [`Context`]: construction defaults plus the overflow ledger, passed
//!   explicitly so tests and threads don't share hidden globals.
//! - [`Money`]: the value type itself, with exact add/subtract, rounded
//!   multiply/divide/modulo/divmod, and cents/decimal formatting.
//!
//! ```rust
//! use simple_money::{Context, Mode, Money, MoneyOpts};
//! use rust_decimal_macros::dec;
//!
//! let ctx = Context::new();
//! let price = Money::new_with(dec!(19.99), MoneyOpts::new().mode(Mode::Decimal), &ctx).unwrap();
//! assert_eq!(price.cents(), 1999);
//! let per_person = price.divide(3, &ctx).unwrap();
//! assert_eq!(per_person.cents(), 666);
//! // the cent that couldn't be split is on the ledger, not lost
//! assert_eq!(ctx.overflow(), dec!(1));
//! ```

pub mod context;
pub mod currency;
pub mod error;
pub mod money;
pub mod rounding;

pub use context::Context;
pub use currency::{Currency, CurrencyId};
pub use error::{Error, Result};
pub use money::{Mode, Money, MoneyOpts};
pub use rounding::RoundingMethod;
