use serde::Serialize;

use crate::{
    quantity::{cost::Cost, energy::KilowattHours},
    summary::Period,
};

/// Finalized summary of a month or of the whole input, rounded to three decimals.
///
/// The field order is the output order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub block_cost: Cost,

    /// Block plan cost minus the time-of-use plan cost: positive when the latter is cheaper.
    pub difference: Cost,

    pub ev_cost: Cost,

    #[serde(rename = "kWh")]
    pub usage: KilowattHours,

    /// Missing when the period has no usage at all.
    #[serde(rename = "off_peak_%", skip_serializing_if = "Option::is_none")]
    pub off_peak_percent: Option<f64>,

    #[serde(rename = "sum_peak_kWh")]
    pub peak_usage: KilowattHours,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
#[display("off-peak share of {period} is undefined: no usage")]
pub struct UndefinedOffPeakShare {
    pub period: Period,
}
