//! The closed set of rounding methods and their mapping onto exact-decimal
//! rounding strategies.
//!
//! Methods come in two families: the `nearest_*`/`bankers` group picks the
//! closest integer and only differs on ties, while `away_from_zero`,
//! `toward_zero`, `up` and `down` always move in their stated direction.

use std::fmt;
use std::str::FromStr;
use rust_decimal::RoundingStrategy;
use crate::error::Error;

/// How an exact decimal collapses to an integer count of minor units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RoundingMethod {
    /// Round away from zero.
    AwayFromZero,
    /// Truncate toward zero.
    TowardZero,
    /// Round to the nearest integer; ties move away from zero.
    NearestUp,
    /// Round to the nearest integer; ties move toward zero.
    NearestDown,
    /// Round to the nearest integer; ties move to the even neighbor.
    Bankers,
    /// Round toward positive infinity.
    Up,
    /// Round toward negative infinity.
    Down,
}

impl RoundingMethod {
    /// Every valid method, in declaration order.
    pub const ALL: [RoundingMethod; 7] = [
        RoundingMethod::AwayFromZero,
        RoundingMethod::TowardZero,
        RoundingMethod::NearestUp,
        RoundingMethod::NearestDown,
        RoundingMethod::Bankers,
        RoundingMethod::Up,
        RoundingMethod::Down,
    ];

    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMethod::AwayFromZero => RoundingStrategy::AwayFromZero,
            RoundingMethod::TowardZero => RoundingStrategy::ToZero,
            RoundingMethod::NearestUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMethod::NearestDown => RoundingStrategy::MidpointTowardZero,
            RoundingMethod::Bankers => RoundingStrategy::MidpointNearestEven,
            RoundingMethod::Up => RoundingStrategy::ToPositiveInfinity,
            RoundingMethod::Down => RoundingStrategy::ToNegativeInfinity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundingMethod::AwayFromZero => "away_from_zero",
            RoundingMethod::TowardZero => "toward_zero",
            RoundingMethod::NearestUp => "nearest_up",
            RoundingMethod::NearestDown => "nearest_down",
            RoundingMethod::Bankers => "bankers",
            RoundingMethod::Up => "up",
            RoundingMethod::Down => "down",
        }
    }
}

impl fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoundingMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "away_from_zero" => Ok(RoundingMethod::AwayFromZero),
            "toward_zero" => Ok(RoundingMethod::TowardZero),
            "nearest_up" => Ok(RoundingMethod::NearestUp),
            "nearest_down" => Ok(RoundingMethod::NearestDown),
            "bankers" => Ok(RoundingMethod::Bankers),
            "up" => Ok(RoundingMethod::Up),
            "down" => Ok(RoundingMethod::Down),
            _ => Err(Error::InvalidRoundingMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_valid_method() {
        for method in RoundingMethod::ALL.iter() {
            assert_eq!(method.as_str().parse::<RoundingMethod>().unwrap(), *method);
        }
    }

    #[test]
    fn rejects_unknown_methods() {
        let res = "foo".parse::<RoundingMethod>();
        assert_eq!(res, Err(Error::InvalidRoundingMethod("foo".into())));
    }

    #[test]
    fn displays_as_the_parseable_name() {
        assert_eq!(RoundingMethod::AwayFromZero.to_string(), "away_from_zero");
        assert_eq!(RoundingMethod::Bankers.to_string(), "bankers");
    }
}
