use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// US dollars per kilowatt-hour.
pub type KilowattHourRate = Quantity<f64, -1, -1, 1>;

impl KilowattHourRate {
    /// Build a rate from a tariff sheet value in cents per kilowatt-hour.
    pub const fn from_cents(cents: f64) -> Self {
        Self(cents / 100.0)
    }
}

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4} ¢/kWh", self.0 * 100.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}$/kWh", self.0)
    }
}
