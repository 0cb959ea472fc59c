pub mod cost;
pub mod energy;
pub mod rate;

use serde::Serialize;

/// Physical quantity tagged with the exponents of its dimensions.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::Sub,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const COST: isize>(pub T);

impl<T, const POWER: isize, const TIME: isize, const COST: isize> Quantity<T, POWER, TIME, COST> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl<const POWER: isize, const TIME: isize, const COST: isize> Quantity<f64, POWER, TIME, COST> {
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn round_to_thousandths(self) -> Self {
        Self(round_to_thousandths(self.0))
    }
}

/// Round to three decimal places.
#[must_use]
pub fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
