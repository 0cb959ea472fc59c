use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// US dollars.
pub type Cost = Quantity<f64, 0, 0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0.0 { write!(f, "-${:.2}", -self.0) } else { write!(f, "${:.2}", self.0) }
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}$", self.0)
    }
}
